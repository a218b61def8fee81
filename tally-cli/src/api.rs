//! API client for the inventory backend

use serde::de::DeserializeOwned;
use tally_common::{InventoryDocument, NodeHealth};
use thiserror::Error;

/// Transport-layer failures, one variant per failure class
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON endpoint and decode the body into `T`. The body is read
    /// as text first so decode failures stay distinguishable from
    /// transport failures.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }

    /// Fetch the point-in-time inventory document
    pub async fn fetch_inventory(&self) -> FetchResult<InventoryDocument> {
        self.get("/data").await
    }

    /// Fetch the per-node health summaries
    pub async fn fetch_node_health(&self) -> FetchResult<Vec<NodeHealth>> {
        self.get("/api/nodes").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_name_the_url() {
        let error = FetchError::Status {
            url: "http://localhost:5000/data".to_string(),
            status: 503,
        };
        let message = error.to_string();
        assert!(message.contains("http://localhost:5000/data"));
        assert!(message.contains("503"));
    }
}
