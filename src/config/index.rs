//! `[index]` section configuration.
//!
//! Controls how the tag index pages are generated: which template renders
//! them, how many tags land on one page, and the URL pattern of the
//! generated documents.

use super::defaults;
use crate::index::IndexOptions;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[index]` section in tagdex.toml.
///
/// # Example
/// ```toml
/// [index]
/// collection = "indices"
/// template = "basic"
/// per_page = 10
/// url_pattern = "tags/index-:num.html"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Template collection the index template is looked up in.
    #[serde(default = "defaults::index::collection")]
    #[educe(Default = defaults::index::collection())]
    pub collection: String,

    /// Template name within the collection.
    #[serde(default = "defaults::index::template")]
    #[educe(Default = defaults::index::template())]
    pub template: String,

    /// Tags per generated page. 0 falls back to the paginator default.
    #[serde(default = "defaults::index::per_page")]
    #[educe(Default = defaults::index::per_page())]
    pub per_page: usize,

    /// URL pattern for generated pages; `:num` is the page number.
    #[serde(default = "defaults::index::url_pattern")]
    #[educe(Default = defaults::index::url_pattern())]
    pub url_pattern: String,
}

impl IndexConfig {
    /// Options injected into the collector stage.
    pub fn options(&self) -> IndexOptions {
        IndexOptions {
            per_page: self.per_page,
            url_pattern: self.url_pattern.clone(),
        }
    }
}
