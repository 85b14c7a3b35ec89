//! Error Types
//!
//! Failure taxonomy of the notes workflow.

use thiserror::Error;

/// Network or HTTP failure on any API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("error de red: {0}")]
    Network(String),

    #[error("el servidor respondió {status} para {url}")]
    Status { status: u16, url: String },

    #[error("respuesta inválida: {0}")]
    Decode(String),
}

/// Precondition failures handled locally with a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Seleccione al menos una nota para generar interfaces")]
    EmptySelection,
}

/// Browser-side rendering or download failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("no se pudo exportar el archivo: {0}")]
    Export(String),

    #[error("falta el elemento {0}")]
    MissingElement(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
