//! The built-in `basic` index template.
//!
//! Renders one tag index page as plain HTML: a list section per tag with a
//! link to every document carrying it, followed by a pagination nav.

use super::{PageContext, Render, RenderError};

/// Programmatic HTML renderer for index pages.
#[derive(Debug, Clone)]
pub struct BasicTemplate {
    title: String,
}

impl BasicTemplate {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Render for BasicTemplate {
    async fn render(&self, ctx: &PageContext) -> Result<Vec<u8>, RenderError> {
        let mut html = String::with_capacity(2048);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&format!(
            "  <title>{} - tags (page {})</title>\n",
            escape_html(&self.title),
            ctx.pagination.num
        ));
        html.push_str("</head>\n<body>\n");

        for entry in ctx.tags.values() {
            html.push_str(&format!("  <h2>{}</h2>\n", escape_html(&entry.name)));
            html.push_str("  <ul>\n");
            for link in &entry.links {
                html.push_str(&format!(
                    "    <li><a href=\"{0}\">{0}</a></li>\n",
                    escape_html(link)
                ));
            }
            html.push_str("  </ul>\n");
        }

        let nav = &ctx.pagination;
        html.push_str("  <nav>\n");
        html.push_str(&format!(
            "    <a href=\"{}\">first</a>\n    <a href=\"{}\">prev</a>\n",
            escape_html(&nav.first_url),
            escape_html(&nav.prev_url)
        ));
        html.push_str(&format!("    <span>{}</span>\n", nav.num));
        html.push_str(&format!(
            "    <a href=\"{}\">next</a>\n    <a href=\"{}\">last</a>\n",
            escape_html(&nav.next_url),
            escape_html(&nav.last_url)
        ));
        html.push_str("  </nav>\n</body>\n</html>\n");

        Ok(html.into_bytes())
    }
}

/// Escape special HTML characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::links::{build_links, build_pagination_links};
    use crate::index::paginate::Page;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[tokio::test]
    async fn test_basic_template_output() {
        let page = Page {
            num: 2,
            first: 1,
            last: 3,
            prev: 1,
            next: 3,
            items: vec!["rust".to_string()],
        };
        let ctx = PageContext {
            tags: build_links(&page.items, &[]),
            pagination: build_pagination_links(&page, "tags/index-:num.html"),
        };

        let tmpl = BasicTemplate::new("My Site");
        let html = String::from_utf8(tmpl.render(&ctx).await.unwrap()).unwrap();

        assert!(html.contains("<h2>rust</h2>"));
        assert!(html.contains("page 2"));
        assert!(html.contains(r#"<a href="tags/index-1.html">prev</a>"#));
        assert!(html.contains(r#"<a href="tags/index-3.html">next</a>"#));
    }
}
