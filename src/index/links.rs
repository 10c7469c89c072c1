//! Link building for index pages.
//!
//! Two pure steps run per page during the flush phase:
//! - [`build_links`] maps each tag on the page to the destination paths of
//!   the documents carrying it.
//! - [`build_pagination_links`] expands the configured URL pattern into the
//!   five navigation URLs of the page.

use crate::document::Document;
use crate::index::paginate::Page;
use serde::Serialize;
use std::collections::BTreeMap;

/// Placeholder token substituted with page numbers in URL patterns.
pub const NUM_PLACEHOLDER: &str = ":num";

/// Links for one tag: the tag name plus the destinations that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    /// The tag itself
    pub name: String,
    /// `data.dest` of every matching document, in document order
    pub links: Vec<String>,
}

/// Tag-to-links map for one page, ordered by tag.
pub type TagLinks = BTreeMap<String, TagEntry>;

/// Navigation data for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub num: usize,
    pub first: usize,
    pub last: usize,
    pub prev: usize,
    pub next: usize,
    pub url: String,
    pub first_url: String,
    pub last_url: String,
    pub prev_url: String,
    pub next_url: String,
}

/// Map each tag to the destination paths of the documents carrying it.
///
/// A tag with no matching documents yields an entry with an empty link
/// list, not a missing key. Matching is exact string equality.
pub fn build_links(tags: &[String], docs: &[Document]) -> TagLinks {
    let mut res = TagLinks::new();

    for tag in tags {
        let links = docs
            .iter()
            .filter(|doc| doc.has_tag(tag))
            .map(|doc| doc.data.dest.clone())
            .collect();

        res.insert(
            tag.clone(),
            TagEntry {
                name: tag.clone(),
                links,
            },
        );
    }

    res
}

/// Expand the URL pattern into the five navigation URLs of a page.
///
/// Every occurrence of `:num` in the pattern is replaced by the respective
/// page number.
pub fn build_pagination_links<T>(page: &Page<T>, pattern: &str) -> Pagination {
    let expand = |n: usize| pattern.replace(NUM_PLACEHOLDER, &n.to_string());

    Pagination {
        num: page.num,
        first: page.first,
        last: page.last,
        prev: page.prev,
        next: page.next,
        url: expand(page.num),
        first_url: expand(page.first),
        last_url: expand(page.last),
        prev_url: expand(page.prev),
        next_url: expand(page.next),
    }
}
