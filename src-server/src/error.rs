use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("404 - File Not Found: {0}")]
    NotFound(String),

    #[error("500 - Internal Server Error")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let status = match self {
            AssetError::NotFound { .. } => StatusCode::NOT_FOUND,
            AssetError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
