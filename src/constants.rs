//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Backend the view talks to unless configured otherwise
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Path of the news listing endpoint, relative to the backend base URL
pub const NEWS_PATH: &str = "news";

/// Query parameter carrying the category filter
pub const CATEGORY_PARAM: &str = "category";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "intelligent-news.log";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".intelligent-news";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application name, shown as the page header
pub const APP_NAME: &str = "Intelligent News";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Display fallbacks for incomplete articles
pub const NO_TITLE: &str = "No title available";
pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_SOURCE: &str = "Unknown";

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No news articles found.";
pub const EMPTY_CATEGORY_TEXT: &str = "No news articles found for this category.";
pub const EMPTY_FALLBACK_ERROR: &str = "No news articles found. Try refreshing.";
