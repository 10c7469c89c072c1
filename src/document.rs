//! Document model and front-matter parsing.
//!
//! A [`Document`] is the unit that flows through the pipeline: one source
//! file (or one generated index page) with a destination path, a raw byte
//! payload, and parsed front-matter metadata.
//!
//! # Front matter
//!
//! Source files may start with a TOML block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = "Hello"
//! tags = ["rust", "web"]
//! +++
//! <p>body...</p>
//! ```
//!
//! Only `tags` and `dest` are interpreted; every other key is carried
//! through opaque in `extra`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Front-matter fence line
const FENCE: &str = "+++";

/// Front-matter related errors
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("unclosed front-matter block (missing `{FENCE}` fence)")]
    Unclosed,

    #[error("front-matter parsing error")]
    Toml(#[from] toml::de::Error),
}

/// Parsed front-matter metadata of one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocData {
    /// Destination path of the rendered document. Defaults to the source
    /// path with the extension normalized to `.html`.
    pub dest: String,

    /// Tag labels from front matter. `None` when the field is absent;
    /// a document without tags contributes nothing to the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Uninterpreted front-matter fields, passed through as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

/// One document flowing through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Destination identifier, relative to the output root.
    pub path: String,

    /// Raw payload (source body, or rendered bytes for generated pages).
    pub contents: Vec<u8>,

    /// Front-matter metadata.
    pub data: DocData,
}

impl Document {
    /// Build a document from raw source text.
    ///
    /// Splits off the front-matter block, parses it, and fills in a default
    /// `dest` when the front matter does not set one.
    pub fn from_source(rel_path: &Path, text: &str) -> Result<Self, FrontMatterError> {
        let (data, body) = split_front_matter(text)?;
        let mut data = data;
        if data.dest.is_empty() {
            data.dest = normalize_extname(&rel_path.to_string_lossy());
        }

        Ok(Self {
            path: rel_path.to_string_lossy().into_owned(),
            contents: body.as_bytes().to_vec(),
            data,
        })
    }

    /// Whether this document carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.data
            .tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Split a source file into parsed front matter and body.
///
/// A file without a leading `+++` fence has no front matter; the whole text
/// is the body and the metadata is default.
fn split_front_matter(text: &str) -> Result<(DocData, &str), FrontMatterError> {
    let Some(rest) = text.strip_prefix(FENCE) else {
        return Ok((DocData::default(), text));
    };
    let rest = rest.strip_prefix('\n').unwrap_or(rest);

    let Some(end) = rest.find(&format!("\n{FENCE}")) else {
        return Err(FrontMatterError::Unclosed);
    };

    let raw = &rest[..end];
    let body = rest[end + 1 + FENCE.len()..].trim_start_matches('\n');
    let data: DocData = toml::from_str(raw)?;

    Ok((data, body))
}

/// Replace a path's extension with `.html`, keeping directory components.
pub fn normalize_extname(path: &str) -> String {
    let p = Path::new(path);
    p.with_extension("html").to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter_basic() {
        let text = "+++\ntags = [\"a\", \"b\"]\n+++\n<p>body</p>\n";
        let (data, body) = split_front_matter(text).unwrap();
        assert_eq!(data.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(body, "<p>body</p>\n");
    }

    #[test]
    fn test_split_front_matter_absent() {
        let text = "<p>no metadata here</p>";
        let (data, body) = split_front_matter(text).unwrap();
        assert!(data.tags.is_none());
        assert_eq!(body, text);
    }

    #[test]
    fn test_split_front_matter_unclosed() {
        let text = "+++\ntags = [\"a\"]\n<p>body</p>";
        assert!(matches!(
            split_front_matter(text),
            Err(FrontMatterError::Unclosed)
        ));
    }

    #[test]
    fn test_split_front_matter_invalid_toml() {
        let text = "+++\ntags = not valid\n+++\nbody";
        assert!(matches!(
            split_front_matter(text),
            Err(FrontMatterError::Toml(_))
        ));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let text = "+++\ntitle = \"Hi\"\ntags = [\"a\"]\n+++\nbody";
        let (data, _) = split_front_matter(text).unwrap();
        assert_eq!(
            data.extra.get("title").and_then(|v| v.as_str()),
            Some("Hi")
        );
    }

    #[test]
    fn test_dest_defaults_from_path() {
        let doc = Document::from_source(Path::new("posts/hello.md"), "body").unwrap();
        assert_eq!(doc.data.dest, "posts/hello.html");
        assert_eq!(doc.path, "posts/hello.md");
    }

    #[test]
    fn test_dest_override_from_front_matter() {
        let text = "+++\ndest = \"custom/target.html\"\n+++\nbody";
        let doc = Document::from_source(Path::new("a.md"), text).unwrap();
        assert_eq!(doc.data.dest, "custom/target.html");
    }

    #[test]
    fn test_has_tag() {
        let text = "+++\ntags = [\"rust\", \"web\"]\n+++\n";
        let doc = Document::from_source(Path::new("a.md"), text).unwrap();
        assert!(doc.has_tag("rust"));
        assert!(!doc.has_tag("go"));

        let untagged = Document::from_source(Path::new("b.md"), "body").unwrap();
        assert!(!untagged.has_tag("rust"));
    }

    #[test]
    fn test_normalize_extname() {
        assert_eq!(normalize_extname("a/b.md"), "a/b.html");
        assert_eq!(normalize_extname("index.hbs"), "index.html");
        assert_eq!(normalize_extname("plain"), "plain.html");
    }
}
