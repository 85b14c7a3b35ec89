//! Table View Model
//!
//! Pure note → row transforms used by the notes table.

use chrono::NaiveDate;

use crate::models::{Note, NoteSelection};
use crate::store::NoteStore;

/// Columns of the notes table, checkbox included
pub const COLUMN_COUNT: usize = 7;

pub const EMPTY_MESSAGE: &str = "No se encontraron resultados.";

/// Class of the per-row selection checkbox
pub const CHECKBOX_CLASS: &str = "note-checkbox";

/// Display-ready note row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteRow {
    pub id: u32,
    pub client: String,
    pub date: String,
    pub items: u32,
    pub amount: String,
    pub status: String,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            client: format!("{} - {}", note.id_client, note.client_name),
            date: format_date(&note.date),
            items: note.items,
            // rows show magnitude only; the sign is kept for the aggregate
            amount: format_amount(note.total.abs()),
            status: note.status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalRow {
    pub count: usize,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single full-width "no results" row, no total row
    Empty,
    Rows { rows: Vec<NoteRow>, total: TotalRow },
}

pub fn table_body(notes: &[Note]) -> TableBody {
    if notes.is_empty() {
        return TableBody::Empty;
    }
    TableBody::Rows {
        rows: notes.iter().map(NoteRow::from).collect(),
        total: TotalRow {
            count: notes.len(),
            amount: format_amount(raw_total(notes)),
        },
    }
}

/// Sum of signed totals
pub fn raw_total(notes: &[Note]) -> f64 {
    notes.iter().map(|n| n.total).sum()
}

/// True iff at least one row is rendered and every rendered id is selected
pub fn all_selected(rendered: &[u32], selection: &NoteStore) -> bool {
    !rendered.is_empty() && rendered.iter().all(|id| selection.has(*id))
}

/// Notes of `notes` whose id is selected, in list order. Selected ids missing
/// from `notes` are dropped.
/// Whether a row click landed on the row's checkbox, given the target's `class`
pub fn is_checkbox_click(target_class: &str) -> bool {
    target_class.split_whitespace().any(|c| c == CHECKBOX_CLASS)
}

pub fn select_notes(notes: &[Note], selection: &NoteStore) -> NoteSelection {
    let picked: Vec<Note> = notes.iter().filter(|n| selection.has(n.id)).cloned().collect();
    NoteSelection {
        count: picked.len(),
        total: raw_total(&picked),
        notes: picked,
    }
}

/// Whole-peso amount with `.` thousands grouping, e.g. `$ 1.234`
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-$ {}", grouped)
    } else {
        format!("$ {}", grouped)
    }
}

/// `2024-03-05T10:00:00` → `05/03/2024`; unparsable input is returned as-is
pub fn format_date(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}
