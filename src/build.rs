//! Index build orchestration.
//!
//! Wires the stream endpoints to the collector stage: load documents from
//! the source glob, feed them through a fresh collector over a filesystem
//! sink, then flush to render and emit the index pages.

use crate::config::SiteConfig;
use crate::index::Collector;
use crate::log;
use crate::pipeline::{FsSink, load_documents};
use crate::render::TemplateRegistry;
use anyhow::{Context, Result};
use std::{fs, time::Instant};

/// Run one full index build for the given configuration.
pub fn build_index(config: &SiteConfig) -> Result<()> {
    let started = Instant::now();

    if config.build.clean && config.build.output.exists() {
        fs::remove_dir_all(&config.build.output).with_context(|| {
            format!("Failed to clean {}", config.build.output.display())
        })?;
    }

    let docs = load_documents(&config.build.source)
        .with_context(|| format!("Failed to load sources from `{}`", config.build.source))?;
    log!("build"; "collected {} documents", docs.len());

    let registry = TemplateRegistry::with_builtins(&config.base.title);
    let template = registry
        .get(&config.index.collection, &config.index.template)?
        .clone();

    let sink = FsSink::new(&config.build.output);
    let mut collector = Collector::new(template, sink, config.index.options());

    // Rendering is the only async step; a current-thread runtime keeps the
    // per-page render calls strictly sequential.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start the render runtime")?;

    let pages = runtime.block_on(async {
        for doc in docs {
            collector.write(doc)?;
        }
        collector.finish().await
    })?;

    let sink = collector.into_sink();
    log!(
        "build";
        "wrote {} files ({} index pages) to {} in {:.2?}",
        sink.written(),
        pages,
        config.build.output.display(),
        started.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_sources(root: &Path) {
        let content = root.join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("one.md"),
            "+++\ntags = [\"a\", \"b\"]\n+++\nOne",
        )
        .unwrap();
        fs::write(content.join("two.md"), "+++\ntags = [\"b\"]\n+++\nTwo").unwrap();
        fs::write(content.join("three.md"), "+++\ntags = [\"c\"]\n+++\nThree").unwrap();
    }

    fn config_for(root: &Path, template: &str, per_page: usize) -> SiteConfig {
        let toml = format!(
            r#"
            [build]
            source = "{root}/content/*.md"
            output = "{root}/result"

            [index]
            template = "{template}"
            per_page = {per_page}
            "#,
            root = root.display(),
        );
        SiteConfig::from_str(&toml).unwrap()
    }

    #[test]
    fn test_build_index_end_to_end() {
        let dir = tempdir().unwrap();
        write_sources(dir.path());

        build_index(&config_for(dir.path(), "basic", 2)).unwrap();

        let out = dir.path().join("result");
        assert!(out.join("one.html").is_file());
        assert!(out.join("two.html").is_file());
        assert!(out.join("three.html").is_file());
        assert!(out.join("tags/index-1.html").is_file());
        assert!(out.join("tags/index-2.html").is_file());

        let page1 = fs::read_to_string(out.join("tags/index-1.html")).unwrap();
        assert!(page1.contains("<h2>a</h2>"));
        assert!(page1.contains("<h2>b</h2>"));
        assert!(!page1.contains("<h2>c</h2>"));

        let page2 = fs::read_to_string(out.join("tags/index-2.html")).unwrap();
        assert!(page2.contains("<h2>c</h2>"));
    }

    #[test]
    fn test_build_index_json_template() {
        let dir = tempdir().unwrap();
        write_sources(dir.path());

        build_index(&config_for(dir.path(), "json", 2)).unwrap();

        let page1 = fs::read(dir.path().join("result/tags/index-1.html")).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&page1).unwrap();
        assert_eq!(value["tags"]["b"]["links"][0], "one.html");
        assert_eq!(value["tags"]["b"]["links"][1], "two.html");
    }

    #[test]
    fn test_build_index_unknown_template_fails() {
        let dir = tempdir().unwrap();
        write_sources(dir.path());

        let err = build_index(&config_for(dir.path(), "fancy", 2)).unwrap_err();
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_build_index_no_sources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();

        build_index(&config_for(dir.path(), "basic", 2)).unwrap();

        // No documents, no tags, no index pages; output dir stays absent
        assert!(!dir.path().join("result/tags").exists());
    }
}
