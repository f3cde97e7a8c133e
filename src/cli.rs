//! Command-line interface definitions.
//!
//! Every flag is optional; anything left unset falls back to the config
//! file and then to the built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::models::Category;

/// Terminal reader for the Intelligent News backend.
///
/// # Examples
///
/// ```sh
/// # Talk to the local backend with the category selector
/// intelligent-news
///
/// # Another backend, no categories, print once and exit
/// intelligent-news --backend-url http://news.lan:8000 --no-categories --once
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base URL of the news backend
    #[arg(short, long, env = "NEWS_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Hide the category selector and always request the unfiltered list
    #[arg(long)]
    pub no_categories: bool,

    /// Category loaded on start
    #[arg(long)]
    pub category: Option<Category>,

    /// Path to a config.yaml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Fetch once, print the result and exit
    #[arg(long)]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["intelligent-news"]);
        assert!(!cli.no_categories);
        assert!(!cli.once);
        assert_eq!(cli.category, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "intelligent-news",
            "-b",
            "http://news.lan:9000",
            "--category",
            "science",
            "--no-categories",
            "--once",
            "-c",
            "/tmp/news.yaml",
        ]);

        assert_eq!(cli.backend_url.as_deref(), Some("http://news.lan:9000"));
        assert_eq!(cli.category, Some(Category::Science));
        assert!(cli.no_categories);
        assert!(cli.once);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/news.yaml")));
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["intelligent-news", "--category", "weather"]).is_err());
    }
}
