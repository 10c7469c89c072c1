//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "My Site".into()
    }

    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn source() -> String {
        "content/*.md".into()
    }

    pub fn output() -> PathBuf {
        "result".into()
    }
}

// ============================================================================
// [index] Section Defaults
// ============================================================================

pub mod index {
    use crate::render::INDICES_COLLECTION;

    pub fn collection() -> String {
        INDICES_COLLECTION.into()
    }

    pub fn template() -> String {
        "basic".into()
    }

    pub fn per_page() -> usize {
        10
    }

    pub fn url_pattern() -> String {
        "tags/index-:num.html".into()
    }
}
