use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::HttpApi;
use crate::error::FetchError;
use crate::models::Certificate;

#[async_trait(?Send)]
pub trait CertificateApi {
    /// Certificate for a product code; `None` when the backend has none
    async fn get_certificate(&self, product_code: &str) -> Result<Option<Certificate>, FetchError>;
}

#[async_trait(?Send)]
impl CertificateApi for HttpApi {
    async fn get_certificate(&self, product_code: &str) -> Result<Option<Certificate>, FetchError> {
        let code = utf8_percent_encode(product_code, NON_ALPHANUMERIC);
        self.get_data(&format!("articulo/certificado?pCodigoArticulo={}", code)).await
    }
}
