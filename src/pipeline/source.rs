//! Document loading from a source glob.

use crate::document::{Document, FrontMatterError};
use glob::glob;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Source-side errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source glob `{0}`")]
    Pattern(String, #[source] glob::PatternError),

    #[error("glob walk error")]
    Walk(#[from] glob::GlobError),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("front matter error in `{0}`")]
    FrontMatter(PathBuf, #[source] FrontMatterError),
}

/// Load all documents matching `pattern`, in stable path order.
///
/// Document paths (and default destinations) are taken relative to the
/// static part of the glob, so `content/*.md` yields `a.md`, not
/// `content/a.md`.
pub fn load_documents(pattern: &str) -> Result<Vec<Document>, SourceError> {
    let base = glob_base(pattern);

    let mut paths: Vec<PathBuf> = glob(pattern)
        .map_err(|err| SourceError::Pattern(pattern.to_string(), err))?
        .collect::<Result<_, _>>()?;
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        if !path.is_file() {
            continue;
        }
        let text =
            fs::read_to_string(&path).map_err(|err| SourceError::Io(path.clone(), err))?;
        let rel = path.strip_prefix(&base).unwrap_or(&path);
        let doc = Document::from_source(rel, &text)
            .map_err(|err| SourceError::FrontMatter(path.clone(), err))?;
        docs.push(doc);
    }

    Ok(docs)
}

/// The static prefix of a glob pattern: every path component up to the
/// first one containing a wildcard.
fn glob_base(pattern: &str) -> PathBuf {
    let mut base = PathBuf::new();
    for component in Path::new(pattern).components() {
        match component {
            Component::Normal(part)
                if part
                    .to_str()
                    .is_some_and(|s| s.contains(['*', '?', '['])) =>
            {
                break;
            }
            Component::Normal(part) => {
                // The last component is the file pattern even without
                // wildcards; stop before a component with an extension.
                if Path::new(part).extension().is_some() {
                    break;
                }
                base.push(part);
            }
            other => base.push(other),
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_glob_base() {
        assert_eq!(glob_base("content/*.md"), PathBuf::from("content"));
        assert_eq!(glob_base("a/b/**/*.md"), PathBuf::from("a/b"));
        assert_eq!(glob_base("/abs/x/*.md"), PathBuf::from("/abs/x"));
        assert_eq!(glob_base("content/post.md"), PathBuf::from("content"));
    }

    #[test]
    fn test_load_documents_in_path_order() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir(&content).unwrap();
        fs::write(content.join("b.md"), "+++\ntags = [\"x\"]\n+++\nB").unwrap();
        fs::write(content.join("a.md"), "A").unwrap();

        let pattern = format!("{}/content/*.md", dir.path().display());
        let docs = load_documents(&pattern).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].path, "a.md");
        assert_eq!(docs[1].path, "b.md");
        assert_eq!(docs[0].data.dest, "a.html");
        assert_eq!(docs[1].data.tags, Some(vec!["x".to_string()]));
        assert_eq!(docs[0].contents, b"A");
    }

    #[test]
    fn test_load_documents_empty_match() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/content/*.md", dir.path().display());
        let docs = load_documents(&pattern).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn test_load_documents_invalid_pattern() {
        let err = load_documents("content/[").unwrap_err();
        assert!(matches!(err, SourceError::Pattern(..)));
    }

    #[test]
    fn test_load_documents_bad_front_matter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.md"), "+++\ntags = oops\n+++\n").unwrap();

        let pattern = format!("{}/*.md", dir.path().display());
        let err = load_documents(&pattern).unwrap_err();
        assert!(matches!(err, SourceError::FrontMatter(..)));
    }
}
