//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::constants::{DEFAULT_BACKEND_URL, EMPTY_CATEGORY_TEXT, EMPTY_TEXT};
use crate::models::{Article, Category};

/// What the body of the view shows, derived from loading, error and articles.
///
/// Evaluated top to bottom: loading wins over an error, an error wins over
/// articles, and `Empty` only applies when none of the others do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewBody<'a> {
    Loading,
    Error(&'a str),
    Articles(&'a [Article]),
    Empty,
}

impl<'a> ViewBody<'a> {
    pub fn derive(loading: bool, error: Option<&'a str>, articles: &'a [Article]) -> Self {
        if loading {
            return ViewBody::Loading;
        }
        match error {
            Some(message) if !message.is_empty() => ViewBody::Error(message),
            _ if !articles.is_empty() => ViewBody::Articles(articles),
            _ => ViewBody::Empty,
        }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// `None` in the variant without a category selector
    pub category: Option<Category>,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,

    // Card cursor
    pub selected_article: usize,

    // Status bar
    pub backend_url: String,
    pub last_updated: Option<DateTime<Local>>,
    pub last_time_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn body(&self) -> ViewBody<'_> {
        ViewBody::derive(self.loading, self.error.as_deref(), &self.articles)
    }

    pub fn categories_enabled(&self) -> bool {
        self.category.is_some()
    }

    /// Heading above the cards; follows the selected category, not the response
    pub fn heading(&self) -> String {
        match self.category {
            Some(category) => format!("{} News", category.label()),
            None => String::from("News Articles"),
        }
    }

    pub fn empty_text(&self) -> &'static str {
        if self.categories_enabled() {
            EMPTY_CATEGORY_TEXT
        } else {
            EMPTY_TEXT
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            category: Some(Category::default()),
            articles: Vec::new(),
            loading: true,
            error: None,
            selected_article: 0,
            backend_url: String::from(DEFAULT_BACKEND_URL),
            last_updated: None,
            last_time_ms: None,
            show_help: false,
        }
    }
}
