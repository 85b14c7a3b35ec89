//! HTTP API Client
//!
//! Frontend bindings to the order backend, organized by domain.

mod certificate;
mod notes;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::models::ApiEnvelope;

// Re-export all public items
pub use certificate::*;
pub use notes::*;

/// Backend client over `fetch`
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get(&self, path: &str) -> Result<Response, FetchError> {
        let url = self.config.endpoint(path);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        ensure_success(response, url)
    }

    /// GET a `{ "data": T }` payload
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.get(path).await?;
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

fn ensure_success(response: Response, url: String) -> Result<Response, FetchError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: response.status(),
            url,
        })
    }
}
