//! Template rendering for generated index pages.
//!
//! Rendering is a collaborator behind the [`Render`] trait: the collector
//! hands over one [`PageContext`] at a time and receives rendered bytes or
//! an error. Built-in templates live in a [`TemplateRegistry`] keyed by
//! collection and name; the task configuration selects one at setup.
//!
//! | Collection | Template | Output                          |
//! |------------|----------|---------------------------------|
//! | `indices`  | `basic`  | Plain HTML tag index page       |
//! | `indices`  | `json`   | Page context as pretty JSON     |

mod basic;

pub use basic::BasicTemplate;

use crate::index::links::{Pagination, TagLinks};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Default template collection for index pages
pub const INDICES_COLLECTION: &str = "indices";

/// Rendering-related errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template `{name}` not found in collection `{collection}`")]
    TemplateNotFound { collection: String, name: String },

    #[error("render failed: {0}")]
    Failed(String),
}

/// Data handed to the renderer for one index page.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    /// Tag-to-links map restricted to this page's tags
    pub tags: TagLinks,
    /// Navigation numbers and expanded URLs
    pub pagination: Pagination,
}

/// The template-rendering collaborator.
///
/// One render call is in flight at a time; the collector awaits each page
/// before starting the next so output paths stay deterministic.
#[allow(async_fn_in_trait)]
pub trait Render {
    async fn render(&self, ctx: &PageContext) -> Result<Vec<u8>, RenderError>;
}

/// A registered template, dispatching to one of the built-in renderers.
#[derive(Debug, Clone)]
pub enum Template {
    Basic(BasicTemplate),
    Json,
}

impl Render for Template {
    async fn render(&self, ctx: &PageContext) -> Result<Vec<u8>, RenderError> {
        match self {
            Self::Basic(tmpl) => tmpl.render(ctx).await,
            Self::Json => {
                let json = serde_json::to_vec_pretty(ctx)
                    .map_err(|err| RenderError::Failed(err.to_string()))?;
                Ok(json)
            }
        }
    }
}

/// Named template collections.
///
/// Collections group templates by purpose; index generation reads from the
/// `indices` collection.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    collections: HashMap<String, HashMap<String, Template>>,
}

impl TemplateRegistry {
    /// Registry pre-populated with the built-in `indices` templates.
    pub fn with_builtins(site_title: &str) -> Self {
        let mut registry = Self::default();
        registry.insert(
            INDICES_COLLECTION,
            "basic",
            Template::Basic(BasicTemplate::new(site_title)),
        );
        registry.insert(INDICES_COLLECTION, "json", Template::Json);
        registry
    }

    /// Register a template under a collection and name.
    pub fn insert(&mut self, collection: &str, name: &str, template: Template) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(name.to_string(), template);
    }

    /// Look up a template by collection and name.
    pub fn get(&self, collection: &str, name: &str) -> Result<&Template, RenderError> {
        self.collections
            .get(collection)
            .and_then(|c| c.get(name))
            .ok_or_else(|| RenderError::TemplateNotFound {
                collection: collection.to_string(),
                name: name.to_string(),
            })
    }
}
