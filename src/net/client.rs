//! src/net/client.rs
//!
//! Thin client for `GET <base>/data`.

use std::time::Duration;

use crate::error::FetchError;
use crate::metrics::MetricsSample;

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct MetricsClient {
    http: reqwest::Client,
    url: String,
}

impl MetricsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: format!("{}/data", base_url.trim_end_matches('/')),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode one sample. No headers or parameters are sent.
    pub async fn fetch(&self) -> Result<MetricsSample, FetchError> {
        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(uri: &str) -> MetricsClient {
        MetricsClient::new(uri, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn url_joins_data_path() {
        let c = MetricsClient::new("http://example.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(c.url(), "http://example.test/data");
    }

    #[tokio::test]
    async fn test_fetch_sample_success() {
        let mock_server = MockServer::start().await;
        let body = serde_json::json!({
            "load": {"date": "2024-01-01T00:00:00Z", "value": 10},
            "errors": {"date": "2024-01-01T00:00:00Z", "value": 1},
            "success": {"date": "2024-01-01T00:00:00Z", "value": 9}
        });
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sample = client(&mock_server.uri()).fetch().await.unwrap();
        assert_eq!(sample.load.value, 10.0);
        assert_eq!(sample.errors.value, 1.0);
        assert_eq!(sample.success.value, 9.0);
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server.uri()).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_missing_key_is_decode_error() {
        let mock_server = MockServer::start().await;
        let body = serde_json::json!({
            "load": {"date": "2024-01-01T00:00:00Z", "value": 10}
        });
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server.uri()).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // nothing listens on port 1
        let err = client("http://127.0.0.1:1").fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
