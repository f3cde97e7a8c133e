//! Command handlers - business logic for processing UI events

use chrono::Local;

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Category;

impl AppState {
    // ========================
    // Fetching
    // ========================

    /// Start a fetch for the category currently in scope.
    ///
    /// Only the loading flag changes here; articles and error are replaced
    /// when the response arrives. A fetch already in flight is not cancelled.
    pub fn fetch_news(&mut self) -> NetworkCommand {
        self.loading = true;
        let id = self.next_id();
        tracing::debug!(id, category = ?self.category, "Starting news fetch");
        NetworkCommand::FetchNews {
            id,
            category: self.category,
        }
    }

    /// Re-fetch with whatever category is active
    pub fn refresh(&mut self) -> NetworkCommand {
        self.fetch_news()
    }

    /// Switch category and fetch it. Ignored when categories are disabled.
    pub fn select_category(&mut self, category: Category) -> Option<NetworkCommand> {
        if self.category.is_none() {
            return None;
        }
        self.category = Some(category);
        Some(self.fetch_news())
    }

    pub fn next_category(&mut self) -> Option<NetworkCommand> {
        let next = self.category?.next();
        self.select_category(next)
    }

    pub fn prev_category(&mut self) -> Option<NetworkCommand> {
        let prev = self.category?.prev();
        self.select_category(prev)
    }

    /// Apply a fetch outcome. The latest response to arrive always wins.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        self.loading = false;
        self.last_time_ms = Some(response.time_ms());
        self.last_updated = Some(Local::now());

        match response {
            NetworkResponse::News { id, category, payload, .. } => {
                let server_error = payload.error.clone().filter(|e| !e.is_empty());
                match payload.into_articles() {
                    Some(articles) => {
                        tracing::debug!(id, count = articles.len(), "Articles received");
                        self.articles = articles;
                        self.error = None;
                    }
                    None => {
                        tracing::debug!(id, "Response carried no articles");
                        let message = server_error.unwrap_or_else(|| Self::empty_result_message(category));
                        self.articles.clear();
                        self.error = Some(message);
                    }
                }
                self.selected_article = 0;
            }
            NetworkResponse::Error { id, message, .. } => {
                tracing::warn!(id, cause = %message, "Showing connectivity error");
                self.error = Some(self.connectivity_message());
            }
        }
    }

    // ========================
    // Card navigation
    // ========================

    pub fn next_article(&mut self) {
        if self.selected_article + 1 < self.articles.len() {
            self.selected_article += 1;
        }
    }

    pub fn prev_article(&mut self) {
        self.selected_article = self.selected_article.saturating_sub(1);
    }

    /// URL to open for the selected card, when one is shown and has a link
    pub fn open_target(&self) -> Option<String> {
        if self.loading || self.error.as_deref().is_some_and(|e| !e.is_empty()) {
            return None;
        }
        self.selected()
            .map(|article| article.url.clone())
            .filter(|url| !url.is_empty())
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
