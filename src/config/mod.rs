//! Site configuration management for `tagdex.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `[base]`  | Site metadata (title, url)                      |
//! | `[build]` | Source glob, output directory, cleanup          |
//! | `[index]` | Template selection, page size, URL pattern      |
//! | `[extra]` | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//!
//! [build]
//! source = "content/*.md"
//! output = "result"
//!
//! [index]
//! template = "basic"
//! per_page = 10
//! url_pattern = "tags/index-:num.html"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod index;

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use index::IndexConfig;

use crate::cli::{Cli, Commands};
use crate::index::links::NUM_PLACEHOLDER;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing tagdex.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Index generation settings
    #[serde(default)]
    pub index: IndexConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Commands::Build { build_args } = &cli.command {
            if build_args.clean {
                self.build.clean = true;
            }
            Self::update_option(&mut self.index.per_page, build_args.per_page.as_ref());
            Self::update_option(&mut self.index.url_pattern, build_args.url_pattern.as_ref());
            Self::update_option(&mut self.index.template, build_args.template.as_ref());
            Self::update_option(&mut self.index.collection, build_args.collection.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.source, cli.source.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));

        // The source glob is a pattern, not a path; only anchor it at root
        if Path::new(&self.build.source).is_relative() {
            self.build.source = root.join(&self.build.source).to_string_lossy().into_owned();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if !self.index.url_pattern.contains(NUM_PLACEHOLDER) {
            bail!(ConfigError::Validation(format!(
                "[index.url_pattern] must contain the `{NUM_PLACEHOLDER}` placeholder"
            )));
        }

        if self.index.collection.is_empty() || self.index.template.is_empty() {
            bail!(ConfigError::Validation(
                "[index.collection] and [index.template] must not be empty".into()
            ));
        }

        if let Err(err) = glob::Pattern::new(&self.build.source) {
            bail!(ConfigError::Validation(format!(
                "[build.source] is not a valid glob pattern: {err}"
            )));
        }

        if let Some(url) = &self.base.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if let Commands::Init { .. } = &self.get_cli().command
            && self.get_root().exists()
        {
            bail!("Path already exists");
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
