//! API Configuration
//!
//! The API base URL is baked in at build time through `NOTES_API_BASE_URL`.

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn load() -> Self {
        Self::new(option_env!("NOTES_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: format!("{}/", trimmed),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `orden-compra/lista-notas`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::load()
    }
}
