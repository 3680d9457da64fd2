use super::{CONTENT_TYPE_JSON, Transport};
use crate::error::TransportError;
use reqwest::header::CONTENT_TYPE;

/// Native transport: resolves request paths against a backend base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.url_for(path))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(path, status = %response.status(), "response received");

        response.text().await.map_err(|e| TransportError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport = HttpTransport::new("http://127.0.0.1:3000/");
        assert_eq!(transport.base_url(), "http://127.0.0.1:3000");
        assert_eq!(transport.url_for("/search_decl"), "http://127.0.0.1:3000/search_decl");
        assert_eq!(transport.url_for("linked_imported_by"), "http://127.0.0.1:3000/linked_imported_by");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let transport = HttpTransport::new("http://127.0.0.1:9");
        let err = transport.post("/search_decl", "{}".to_string()).await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }
}
