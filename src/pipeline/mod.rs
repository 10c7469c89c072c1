//! Document stream endpoints.
//!
//! The collector sits between the two halves of this module: a source that
//! loads and parses documents from a glob pattern, and a sink that accepts
//! emitted documents for writing. Both are thin wrappers; the interesting
//! work happens in [`crate::index`].

pub mod sink;
pub mod source;

pub use sink::{DocumentSink, FsSink, SinkError};
pub use source::{SourceError, load_documents};
