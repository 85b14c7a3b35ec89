//! Order Notes Endpoints
//!
//! List, detail, prepare and download calls of `orden-compra`.

use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ensure_success, HttpApi};
use crate::error::FetchError;
use crate::models::{Note, Order};

/// Order backend as seen by the notes workflow
#[async_trait(?Send)]
pub trait NotesApi {
    /// Full notes list, in server order
    async fn list_notes(&self) -> Result<Vec<Note>, FetchError>;

    /// Detail of one order
    async fn get_order(&self, id: u32) -> Result<Order, FetchError>;

    /// Mark the given notes as prepared
    async fn prepare_selected(&self, ids: &[u32]) -> Result<serde_json::Value, FetchError>;

    /// Most recently prepared interface file
    async fn download_latest(&self) -> Result<Vec<u8>, FetchError>;
}

#[async_trait(?Send)]
impl NotesApi for HttpApi {
    async fn list_notes(&self) -> Result<Vec<Note>, FetchError> {
        self.get_data("orden-compra/lista-notas").await
    }

    async fn get_order(&self, id: u32) -> Result<Order, FetchError> {
        self.get_data(&format!("orden-compra?pNumeroNota={}", id)).await
    }

    async fn prepare_selected(&self, ids: &[u32]) -> Result<serde_json::Value, FetchError> {
        let url = self.config.endpoint("orden-compra/prepara-notas");
        let request = Request::post(&url)
            .header("Accept", "application/json")
            .json(&ids)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = ensure_success(response, url)?;
        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn download_latest(&self) -> Result<Vec<u8>, FetchError> {
        let response = self.get("orden-compra/download").await?;
        response
            .binary()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
