//! Network actor - runs news fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands.
///
/// Every fetch runs as its own task. Nothing orders or cancels them, so
/// overlapping fetches report back in whatever order they finish.
pub struct NetworkActor {
    client: reqwest::Client,
    backend_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        backend_url: impl Into<String>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client: create_client(),
            backend_url: backend_url.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchNews { id, category }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let base_url = self.backend_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, category = ?category, "Fetching news");
                                let result = execute_fetch(&client, &base_url, category, id).await;
                                match &result {
                                    NetworkResponse::News { time_ms, .. } => {
                                        tracing::info!(id, time_ms, "News fetch completed");
                                    }
                                    NetworkResponse::Error { message, time_ms, .. } => {
                                        tracing::warn!(id, time_ms, error = %message, "News fetch failed");
                                    }
                                }
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
