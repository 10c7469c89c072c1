//! Downstream document sinks.

use crate::document::{Document, normalize_extname};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sink-side errors
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Accepts documents emitted by the collector.
pub trait DocumentSink {
    fn push(&mut self, doc: Document) -> Result<(), SinkError>;
}

/// In-memory sink, used in tests and for inspecting a run.
impl DocumentSink for Vec<Document> {
    fn push(&mut self, doc: Document) -> Result<(), SinkError> {
        Vec::push(self, doc);
        Ok(())
    }
}

/// Writes documents under an output directory, normalizing the file
/// extension to `.html` on the way out.
#[derive(Debug)]
pub struct FsSink {
    output: PathBuf,
    written: usize,
}

impl FsSink {
    pub fn new(output: &Path) -> Self {
        Self {
            output: output.to_path_buf(),
            written: 0,
        }
    }

    /// Number of documents written so far.
    pub const fn written(&self) -> usize {
        self.written
    }
}

impl DocumentSink for FsSink {
    fn push(&mut self, doc: Document) -> Result<(), SinkError> {
        let target = self.output.join(normalize_extname(&doc.path));

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| SinkError::Io(parent.to_path_buf(), err))?;
        }
        fs::write(&target, &doc.contents).map_err(|err| SinkError::Io(target.clone(), err))?;

        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn doc(path: &str, contents: &[u8]) -> Document {
        Document {
            path: path.to_string(),
            contents: contents.to_vec(),
            ..Document::default()
        }
    }

    #[test]
    fn test_vec_sink_preserves_order() {
        let mut sink: Vec<Document> = Vec::new();
        DocumentSink::push(&mut sink, doc("a.md", b"A")).unwrap();
        DocumentSink::push(&mut sink, doc("b.md", b"B")).unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].path, "a.md");
    }

    #[test]
    fn test_fs_sink_normalizes_extension() {
        let dir = tempdir().unwrap();
        let mut sink = FsSink::new(dir.path());

        sink.push(doc("posts/hello.md", b"<p>hi</p>")).unwrap();

        let written = dir.path().join("posts/hello.html");
        assert!(written.is_file());
        assert_eq!(fs::read(written).unwrap(), b"<p>hi</p>");
        assert_eq!(sink.written(), 1);
    }

    #[test]
    fn test_fs_sink_keeps_html_extension() {
        let dir = tempdir().unwrap();
        let mut sink = FsSink::new(dir.path());

        sink.push(doc("tags/index-1.html", b"index")).unwrap();

        assert!(dir.path().join("tags/index-1.html").is_file());
    }
}
