//! Tag aggregation over a document batch.

use crate::document::Document;
use std::collections::HashSet;

/// Collect the unique tag values across all documents.
///
/// Documents without a `tags` field contribute nothing. The returned order
/// is unspecified; callers that need a stable order sort explicitly.
pub fn aggregate_tags(docs: &[Document]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for doc in docs {
        let Some(doc_tags) = &doc.data.tags else {
            continue;
        };
        for tag in doc_tags {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }

    tags
}
