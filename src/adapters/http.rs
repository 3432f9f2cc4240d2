use crate::utils::error::{Result, SyncError};
use reqwest::{Client, StatusCode};

/// GETs a URL and parses a `200 OK` body as JSON.
///
/// No timeout and no retry; redirects follow reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("{} -> {} ({} bytes)", url, status, body.len());

        if status != StatusCode::OK {
            return Err(SyncError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_json_success() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/menus");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!([{"id": 1, "name": "Tools"}]));
            })
            .await;

        let fetcher = HttpFetcher::new();
        let value = fetcher.fetch_json(&server.url("/api/menus")).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(value, json!([{"id": 1, "name": "Tools"}]));
    }

    #[tokio::test]
    async fn test_fetch_json_accepts_object_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/cards/7");
                then.status(200).body(r#"{"title":"single"}"#);
            })
            .await;

        let value = HttpFetcher::new()
            .fetch_json(&server.url("/api/cards/7"))
            .await
            .unwrap();

        assert_eq!(value, json!({"title": "single"}));
    }

    #[tokio::test]
    async fn test_fetch_json_non_200_carries_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/menus");
                then.status(404).body("not found");
            })
            .await;

        let err = HttpFetcher::new()
            .fetch_json(&server.url("/api/menus"))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::HttpStatusError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_json_other_2xx_is_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/menus");
                then.status(204);
            })
            .await;

        let err = HttpFetcher::new()
            .fetch_json(&server.url("/api/menus"))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::HttpStatusError { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_fetch_json_invalid_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/menus");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = HttpFetcher::new()
            .fetch_json(&server.url("/api/menus"))
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_fetch_json_transport_error() {
        // Nothing listens on port 1.
        let err = HttpFetcher::new()
            .fetch_json("http://127.0.0.1:1/api/menus")
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::ApiError(_)));
    }
}
