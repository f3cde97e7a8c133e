//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::constants::EMPTY_FALLBACK_ERROR;
use crate::messages::{RenderState, ViewBody};
use crate::models::{Article, Category};

/// Main application state - pure data, no I/O
pub struct AppState {
    // News view
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<String>,
    /// Selected filter; `None` when the view runs without categories
    pub category: Option<Category>,

    // Backend the view reports in its connectivity message
    pub backend_url: String,

    // Request bookkeeping (log correlation only)
    pub next_request_id: u64,

    // Card cursor
    pub selected_article: usize,

    // Last completed fetch
    pub last_updated: Option<DateTime<Local>>,
    pub last_time_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl AppState {
    /// Fresh view state: loading, no articles, no error
    pub fn new(backend_url: impl Into<String>, category: Option<Category>) -> Self {
        AppState {
            articles: Vec::new(),
            loading: true,
            error: None,
            category,
            backend_url: backend_url.into(),
            next_request_id: 1,
            selected_article: 0,
            last_updated: None,
            last_time_ms: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn body(&self) -> ViewBody<'_> {
        ViewBody::derive(self.loading, self.error.as_deref(), &self.articles)
    }

    pub fn selected(&self) -> Option<&Article> {
        self.articles.get(self.selected_article)
    }

    /// Message shown when any fetch fails to complete
    pub fn connectivity_message(&self) -> String {
        format!(
            "Failed to connect to backend. Ensure it is running at {}.",
            self.backend_url
        )
    }

    /// Message shown when the backend answers without articles or an error of its own.
    ///
    /// Names the category the request was made for, which may differ from
    /// the one selected by the time the response lands.
    pub fn empty_result_message(category: Option<Category>) -> String {
        match category {
            Some(category) => format!("No news articles found for category: {}.", category),
            None => String::from(EMPTY_FALLBACK_ERROR),
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            category: self.category,
            articles: self.articles.clone(),
            loading: self.loading,
            error: self.error.clone(),
            selected_article: self.selected_article,
            backend_url: self.backend_url.clone(),
            last_updated: self.last_updated,
            last_time_ms: self.last_time_ms,
            show_help: self.show_help,
        }
    }
}
