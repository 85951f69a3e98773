use crate::core::CatalogSource;
use crate::utils::error::LoadError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tracing::debug!("Making catalog request to: {}", self.url);
        let unreachable = |source: reqwest::Error| LoadError::Unreachable {
            location: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(unreachable)?;
        tracing::debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(unreachable)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load;
    use httpmock::prelude::*;

    fn source(url: String) -> HttpSource {
        HttpSource::new(url, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"title": "Virtual Server", "short_desc": "VM", "long_desc": "", "url": "https://x/vs", "group": "Compute"},
            {"title": "Object Storage", "short_desc": "Buckets", "long_desc": "", "url": "https://x/os", "group": "Storage"}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/product_data_final.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let records = load(&source(server.url("/product_data_final.json")))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].group_name(), "Storage");
    }

    #[tokio::test]
    async fn test_non_success_status_is_load_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404);
        });

        let err = load(&source(server.url("/missing.json"))).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/data.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"title": "not an array"}));
        });

        let err = load(&source(server.url("/data.json"))).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let err = load(&source("http://127.0.0.1:9/data.json".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Unreachable { .. }));
    }
}
