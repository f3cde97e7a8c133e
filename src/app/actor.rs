//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop.
    ///
    /// The initial fetch is issued before the first event is read; nothing
    /// re-fetches afterwards unless the user asks.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let initial = self.state.fetch_news();
        let _ = self.network_tx.send(initial);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Fetching
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::SelectCategory(category) => {
                if let Some(cmd) = self.state.select_category(category) {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::NextCategory => {
                if let Some(cmd) = self.state.next_category() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::PrevCategory => {
                if let Some(cmd) = self.state.prev_category() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Card navigation
            UiEvent::NextArticle => self.state.next_article(),
            UiEvent::PrevArticle => self.state.prev_article(),
            UiEvent::OpenArticle => {
                if let Some(url) = self.state.open_target() {
                    tracing::info!(url = %url, "Opening article");
                    if let Err(e) = open::that(&url) {
                        tracing::warn!(url = %url, error = %e, "Could not open browser");
                    }
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ViewBody;
    use crate::models::Category;
    use crate::network::NetworkActor;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Wait for the next render state that is not loading
    async fn settled(render_rx: &mut mpsc::UnboundedReceiver<RenderState>) -> RenderState {
        loop {
            let state = render_rx.recv().await.expect("app actor stopped");
            if !state.loading {
                return state;
            }
        }
    }

    #[tokio::test]
    async fn test_initial_load_then_category_switch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(query_param("category", "general"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_articles": [
                    {"title": "One", "url": "https://n/1"},
                    {"title": "Two", "url": "https://n/2"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(query_param("category", "sports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_articles": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let network = tokio::spawn(NetworkActor::new(server.uri(), net_resp_tx).run(net_cmd_rx));
        let state = AppState::new(server.uri(), Some(Category::General));
        let app = tokio::spawn(AppActor::new(state, net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        let first = render_rx.recv().await.unwrap();
        assert!(first.loading);
        assert_eq!(first.body(), ViewBody::Loading);

        let loaded = settled(&mut render_rx).await;
        assert_eq!(loaded.articles.len(), 2);
        assert_eq!(loaded.heading(), "General News");

        ui_tx.send(UiEvent::SelectCategory(Category::Sports)).unwrap();
        let switched = render_rx.recv().await.unwrap();
        assert!(switched.loading);
        assert_eq!(switched.heading(), "Sports News");

        let empty = settled(&mut render_rx).await;
        assert!(empty.articles.is_empty());
        assert_eq!(
            empty.body(),
            ViewBody::Error("No news articles found for category: sports.")
        );

        ui_tx.send(UiEvent::Quit).unwrap();
        app.await.unwrap();
        network.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend_shows_connectivity_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let (_ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        tokio::spawn(NetworkActor::new(base.clone(), net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::new(AppState::new(base.clone(), None), net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        let failed = settled(&mut render_rx).await;
        let expected = format!("Failed to connect to backend. Ensure it is running at {}.", base);
        assert_eq!(failed.error.as_deref(), Some(expected.as_str()));
        assert!(failed.articles.is_empty());
    }
}
