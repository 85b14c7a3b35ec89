//! Certificate Page Helpers
//!
//! URL and text transforms for the product certificate view.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Certificate;

pub const NOT_AVAILABLE: &str = "No disponible";
pub const MISSING_CODE: &str = "No se proporcionó código de producto";

const SITE_ROOT: &str = "https://www.oagsa.com/";
const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=";

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Value of `name` in a `?a=b&c=d` query string
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned()
        })
        .filter(|value| !value.is_empty())
}

/// "marca modelo", else the part number, else "Producto"
pub fn product_description(cert: &Certificate) -> String {
    match (non_blank(&cert.marca), non_blank(&cert.modelo)) {
        (Some(marca), Some(modelo)) => format!("{} {}", marca, modelo),
        _ => non_blank(&cert.numero_parte).unwrap_or("Producto").to_string(),
    }
}

pub fn page_title(cert: &Certificate) -> String {
    format!("Certificado - {} | OAGSA", product_description(cert))
}

pub fn field_text(value: &Option<String>) -> String {
    non_blank(value).unwrap_or(NOT_AVAILABLE).to_string()
}

/// Absolute image URL for the API's `urlImagen`, or `None` when blank
pub fn normalize_image_url(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let url = raw.replace('\\', "/");
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url)
    } else if url.starts_with("oagsa.com") {
        Some(format!("https://www.{}", url))
    } else if url.starts_with("www.") {
        Some(format!("https://{}", url))
    } else {
        Some(format!("{}{}", SITE_ROOT, url.trim_start_matches('/')))
    }
}

/// QR image encoding the page the user is looking at
pub fn qr_image_url(page_url: &str) -> String {
    format!("{}{}", QR_SERVICE, utf8_percent_encode(page_url, URI_COMPONENT))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(normalize_image_url(None), None);
        assert_eq!(normalize_image_url(Some("   ")), None);
        assert_eq!(
            normalize_image_url(Some("https://cdn.example.com/a.png")).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(
            normalize_image_url(Some("oagsa.com\\img\\fate.jpg")).as_deref(),
            Some("https://www.oagsa.com/img/fate.jpg")
        );
        assert_eq!(
            normalize_image_url(Some("www.oagsa.com/img/a.jpg")).as_deref(),
            Some("https://www.oagsa.com/img/a.jpg")
        );
        assert_eq!(
            normalize_image_url(Some("//imagenes\\cubiertas\\x.png")).as_deref(),
            Some("https://www.oagsa.com/imagenes/cubiertas/x.png")
        );
    }

    #[test]
    fn test_qr_image_url_encodes_like_uri_component() {
        let url = qr_image_url("https://www.oagsa.com/ficha-producto.html?codigo=AB 12&x=(1)");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=\
             https%3A%2F%2Fwww.oagsa.com%2Fficha-producto.html%3Fcodigo%3DAB%2012%26x%3D(1)"
        );
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?codigo=ABC%2F1&x=2", "codigo").as_deref(), Some("ABC/1"));
        assert_eq!(query_param("?x=2", "codigo"), None);
        assert_eq!(query_param("?codigo=", "codigo"), None);
        assert_eq!(query_param("", "codigo"), None);
    }

    #[test]
    fn test_description_and_fallbacks() {
        let mut cert = Certificate {
            marca: Some("Fate".to_string()),
            modelo: Some("Maxisport".to_string()),
            numero_parte: Some("P-9".to_string()),
            ..Default::default()
        };
        assert_eq!(page_title(&cert), "Certificado - Fate Maxisport | OAGSA");

        cert.modelo = None;
        assert_eq!(product_description(&cert), "P-9");

        cert.numero_parte = Some(" ".to_string());
        assert_eq!(product_description(&cert), "Producto");

        assert_eq!(field_text(&cert.cuit), NOT_AVAILABLE);
        assert_eq!(field_text(&cert.marca), "Fate");
    }
}
