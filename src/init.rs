//! Project initialization module.
//!
//! Creates a new project structure with default configuration and a few
//! tagged sample documents.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "tagdex.toml";

/// Default project directory structure
const PROJECT_DIRS: &[&str] = &["content"];

/// Sample documents written by `init`, as (path, front-matter tags) pairs
const SAMPLE_DOCS: &[(&str, &str)] = &[
    ("content/first-post.md", r#"tags = ["intro", "news"]"#),
    ("content/second-post.md", r#"tags = ["news"]"#),
    ("content/about.md", r#"tags = ["site"]"#),
];

/// Create a new project with default structure
pub fn new_project(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // Safety check: if no name was provided (init in current dir),
    // the directory must be completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `tagdex init <NAME>` to create in a subdirectory."
        );
    }

    init_project_structure(root)?;
    init_default_config(root)?;
    init_sample_content(root)?;

    log!("init"; "created project at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Create project directory structure
fn init_project_structure(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `tagdex init <NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write tagged sample documents
fn init_sample_content(root: &Path) -> Result<()> {
    for (rel, front_matter) in SAMPLE_DOCS {
        let path = root.join(rel);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = format!("+++\n{front_matter}\n+++\n<p>{stem}</p>\n");
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}
