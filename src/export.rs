//! File Export
//!
//! CSV export of selected notes and browser downloads via Blob URLs.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::RenderError;
use crate::models::NoteSelection;
use crate::view_model::format_date;

pub trait FileExport {
    /// Produce the downloadable artifact for a batch of selected notes
    fn export_notes(&self, selection: &NoteSelection) -> Result<(), RenderError>;

    /// Offer raw bytes as a download
    fn save_file(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), RenderError>;
}

/// Exports notes as a `;`-separated CSV that Excel opens directly
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvExporter;

impl FileExport for CsvExporter {
    fn export_notes(&self, selection: &NoteSelection) -> Result<(), RenderError> {
        let csv = notes_csv(selection);
        let filename = format!("notas-{}.csv", chrono::Local::now().format("%Y-%m-%d"));
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&csv));
        let props = BlobPropertyBag::new();
        props.set_type("text/csv;charset=utf-8;");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
            .map_err(|e| RenderError::Export(format!("{:?}", e)))?;
        download_blob(&blob, &filename)
    }

    fn save_file(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), RenderError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let props = BlobPropertyBag::new();
        props.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
            .map_err(|e| RenderError::Export(format!("{:?}", e)))?;
        download_blob(&blob, filename)
    }
}

/// CSV body with UTF-8 BOM, one line per note and a footer with the raw total
pub fn notes_csv(selection: &NoteSelection) -> String {
    let mut csv = String::from("\u{FEFF}");
    csv.push_str("Nota;Cliente;Fecha;Articulos;Total;Estado\n");

    for note in &selection.notes {
        csv.push_str(&format!(
            "{};\"{} - {}\";{};{};{};\"{}\"\n",
            note.id,
            note.id_client,
            quote(&note.client_name),
            format_date(&note.date),
            note.items,
            decimal(note.total),
            quote(&note.status),
        ));
    }

    csv.push_str(&format!(
        "Total;\"Notas: {}\";;;{};\n",
        selection.count,
        decimal(selection.total)
    ));
    csv
}

fn quote(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Decimal comma for spreadsheet locales
fn decimal(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), RenderError> {
    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| RenderError::Export(format!("{:?}", e)))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(RenderError::MissingElement("document"))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| RenderError::Export(format!("{:?}", e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| RenderError::MissingElement("a"))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| RenderError::Export(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;

    #[test]
    fn test_notes_csv_layout() {
        let selection = NoteSelection {
            notes: vec![
                Note {
                    id: 4,
                    id_client: 20,
                    client_name: "Gomez \"El Rapido\"".to_string(),
                    date: "2024-06-01T08:00:00".to_string(),
                    items: 3,
                    total: 1500.5,
                    status: "PENDIENTE".to_string(),
                },
                Note {
                    id: 5,
                    id_client: 21,
                    client_name: "Perez".to_string(),
                    date: "2024-06-02".to_string(),
                    items: 1,
                    total: -200.0,
                    status: "NC".to_string(),
                },
            ],
            count: 2,
            total: 1300.5,
        };

        let csv = notes_csv(&selection);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "4;\"20 - Gomez \"\"El Rapido\"\"\";01/06/2024;3;1500,50;\"PENDIENTE\"");
        assert_eq!(lines[2], "5;\"21 - Perez\";02/06/2024;1;-200,00;\"NC\"");
        assert_eq!(lines[3], "Total;\"Notas: 2\";;;1300,50;");
    }
}
