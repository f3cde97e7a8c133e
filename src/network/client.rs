//! HTTP client wrapper - builds the news URL and executes the fetch

use std::time::Instant;

use reqwest::Url;
use thiserror::Error;

use crate::constants::{CATEGORY_PARAM, NEWS_PATH};
use crate::messages::NetworkResponse;
use crate::models::{Category, NewsPayload};

/// Why a news fetch could not produce a payload
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid backend url '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build `{base}/news`, adding `?category=` when a category is in scope
pub fn news_url(base_url: &str, category: Option<Category>) -> Result<Url, FetchError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), NEWS_PATH);
    let mut url = Url::parse(&raw).map_err(|source| FetchError::Url {
        url: base_url.to_string(),
        source,
    })?;

    if let Some(category) = category {
        url.query_pairs_mut()
            .append_pair(CATEGORY_PARAM, category.as_str());
    }

    Ok(url)
}

/// Issue one GET against the news endpoint and decode its body
pub async fn fetch_news(
    client: &reqwest::Client,
    base_url: &str,
    category: Option<Category>,
) -> Result<NewsPayload, FetchError> {
    let url = news_url(base_url, category)?;

    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Execute a news fetch and package the outcome for the App layer
pub async fn execute_fetch(
    client: &reqwest::Client,
    base_url: &str,
    category: Option<Category>,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_news(client, base_url, category).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(payload) => NetworkResponse::News {
            id: request_id,
            category,
            payload,
            time_ms: elapsed,
        },
        Err(e) => {
            let message = match &e {
                FetchError::Request(inner) if inner.is_connect() => {
                    format!("Connection failed: {}", e)
                }
                _ => e.to_string(),
            };
            NetworkResponse::Error {
                id: request_id,
                message,
                time_ms: elapsed,
            }
        }
    }
}

/// Create an HTTP client with default configuration.
///
/// No timeout is set; a request waits as long as the backend keeps it open.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_news_url_without_category() {
        let url = news_url("http://localhost:8000", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/news");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_news_url_with_category() {
        let url = news_url("http://localhost:8000/", Some(Category::Sports)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/news?category=sports");
    }

    #[test]
    fn test_news_url_keeps_base_path() {
        let url = news_url("http://example.com/api", Some(Category::Health)).unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/news?category=health");
    }

    #[test]
    fn test_news_url_rejects_garbage() {
        assert!(matches!(news_url("not a url", None), Err(FetchError::Url { .. })));
    }

    #[tokio::test]
    async fn test_fetch_sends_category_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(query_param("category", "technology"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_articles": [
                    {"title": "Chips", "description": "New fab", "source": "reuters", "url": "https://r/1"},
                    {"title": "Rust", "url": "https://r/2"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client();
        let payload = fetch_news(&client, &server.uri(), Some(Category::Technology))
            .await
            .unwrap();
        let articles = payload.into_articles().unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Chips"));
        assert_eq!(articles[1].url, "https://r/2");
    }

    #[tokio::test]
    async fn test_fetch_passes_server_error_field_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_articles": [],
                "error": "NEWS_API_KEY not set"
            })))
            .mount(&server)
            .await;

        let payload = fetch_news(&create_client(), &server.uri(), None).await.unwrap();
        assert_eq!(payload.error.as_deref(), Some("NEWS_API_KEY not set"));
        assert_eq!(payload.into_articles(), None);
    }

    #[tokio::test]
    async fn test_news_response_carries_request_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(query_param("category", "sports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_articles": []
            })))
            .mount(&server)
            .await;

        let response = execute_fetch(&create_client(), &server.uri(), Some(Category::Sports), 3).await;
        match response {
            NetworkResponse::News { id, category, .. } => {
                assert_eq!(id, 3);
                assert_eq!(category, Some(Category::Sports));
            }
            other => panic!("expected news, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = fetch_news(&create_client(), &server.uri(), None).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = fetch_news(&create_client(), &server.uri(), None).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_becomes_error_response() {
        // Bind then drop a listener so the port is known to be closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let response = execute_fetch(&create_client(), &format!("http://{}", addr), None, 7).await;
        match response {
            NetworkResponse::Error { id, message, .. } => {
                assert_eq!(id, 7);
                assert!(message.starts_with("Connection failed"), "{}", message);
            }
            other => panic!("expected error, got {:?}", other),
        }
    }
}
