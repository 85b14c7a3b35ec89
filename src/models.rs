//! Frontend Models
//!
//! Data structures matching the order API payloads.

use serde::{Deserialize, Serialize};

/// Purchase-order summary row (one line of the notes list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u32,
    pub id_client: u32,
    pub client_name: String,
    pub date: String,
    pub items: u32,
    pub total: f64,
    pub status: String,
}

/// Order detail shown in the modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub id_client: u32,
    pub client_name: String,
    pub date: String,
    #[serde(default)]
    pub status: String,
    pub total: f64,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub subtotal: f64,
}

/// Product certificate (ficha de producto). Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub importador: Option<String>,
    pub cuit: Option<String>,
    pub origen: Option<String>,
    pub numero_certificado: Option<String>,
    pub organismo_emisor: Option<String>,
    pub numero_parte: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub medida: Option<String>,
    pub indice_carga: Option<String>,
    pub indice_velocidad: Option<String>,
    pub url_imagen: Option<String>,
}

/// GET endpoints wrap their payload in `{ "data": ... }`
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Notes picked for export, with their aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSelection {
    pub notes: Vec<Note>,
    pub count: usize,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_from_camel_case_json() {
        let json = r#"[{"id":7,"idClient":12,"clientName":"ACME","date":"2024-03-05T10:00:00","items":3,"total":-120.5,"status":"PENDIENTE"}]"#;
        let notes: Vec<Note> = serde_json::from_str(json).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id_client, 12);
        assert_eq!(notes[0].client_name, "ACME");
        assert_eq!(notes[0].total, -120.5);
    }

    #[test]
    fn test_order_optional_fields_default() {
        let json = r#"{"data":{"id":1,"idClient":2,"clientName":"X","date":"2024-01-01","total":10}}"#;
        let envelope: ApiEnvelope<Order> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.lines.is_empty());
        assert_eq!(envelope.data.status, "");
        assert_eq!(envelope.data.observations, None);
    }

    #[test]
    fn test_certificate_null_and_partial() {
        let empty: ApiEnvelope<Option<Certificate>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(empty.data.is_none());

        let partial: ApiEnvelope<Option<Certificate>> =
            serde_json::from_str(r#"{"data":{"marca":"Fate","numeroParte":"P-1"}}"#).unwrap();
        let cert = partial.data.unwrap();
        assert_eq!(cert.marca.as_deref(), Some("Fate"));
        assert_eq!(cert.numero_parte.as_deref(), Some("P-1"));
        assert_eq!(cert.modelo, None);
    }
}
