//! Runtime configuration
//!
//! Resolution order: built-in defaults, then `~/.intelligent-news/config.yaml`
//! (or the file given with `--config`), then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BACKEND_URL, DEFAULT_LOG_FILE};
use crate::models::Category;

/// Settings as written in the YAML config file; every key is optional
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub backend_url: Option<String>,
    pub categories: Option<bool>,
    pub default_category: Option<Category>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Read a config file. A missing file yields `None`.
    pub fn load(path: &Path) -> Result<Option<FileConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(Some(config))
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub categories: bool,
    pub default_category: Category,
    pub log_file: PathBuf,
    pub once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: String::from(DEFAULT_BACKEND_URL),
            categories: true,
            default_category: Category::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            once: false,
        }
    }
}

impl Config {
    /// `~/.intelligent-news/config.yaml`, or relative to the working directory without a home
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load the config file named by the CLI (or the default one) and apply the CLI on top
    pub fn from_cli(cli: &Cli) -> Result<Config> {
        let file = match &cli.config {
            Some(path) => Some(
                FileConfig::load(path)?
                    .with_context(|| format!("config file {} does not exist", path.display()))?,
            ),
            None => FileConfig::load(&Self::default_path())?,
        };
        Ok(Self::resolve(cli, file.unwrap_or_default()))
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Config {
        let defaults = Config::default();
        Config {
            backend_url: cli
                .backend_url
                .clone()
                .or(file.backend_url)
                .unwrap_or(defaults.backend_url),
            categories: !cli.no_categories && file.categories.unwrap_or(defaults.categories),
            default_category: cli
                .category
                .or(file.default_category)
                .unwrap_or(defaults.default_category),
            log_file: cli
                .log_file
                .clone()
                .or(file.log_file)
                .unwrap_or(defaults.log_file),
            once: cli.once,
        }
    }

    /// Category the view starts with; `None` runs the view without categories
    pub fn initial_category(&self) -> Option<Category> {
        self.categories.then_some(self.default_category)
    }
}
