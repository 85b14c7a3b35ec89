//! Interface Generation Workflow
//!
//! Row selection, batch generation, list refresh and the order modal, driven
//! against injectable API, export and notification collaborators.

use leptos::logging::{error, log, warn};
use leptos::prelude::*;

use crate::api::NotesApi;
use crate::error::{FetchError, ValidationError, WorkflowError, WorkflowResult};
use crate::export::FileExport;
use crate::notify::{Notifier, NotifyKind};
use crate::store::{rendered_ids, store_replace_notes, BoardStateStoreFields, BoardStore};
use crate::view_model::{all_selected, select_notes};

pub const GENERATED_MESSAGE: &str = "Interfaces generadas";
pub const REFRESH_FAILED_MESSAGE: &str = "No se pudo actualizar la lista de notas";

const ARCHIVE_MIME: &str = "application/zip";

/// Result of a generate request
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// Nothing was selected; a warning was shown and no call was made
    NothingSelected,
    Prepared { count: usize, total: f64 },
}

#[derive(Clone)]
pub struct InterfaceWorkflow<A, E, N> {
    api: A,
    exporter: E,
    notifier: N,
    board: BoardStore,
}

impl<A, E, N> InterfaceWorkflow<A, E, N>
where
    A: NotesApi,
    E: FileExport,
    N: Notifier,
{
    pub fn new(api: A, exporter: E, notifier: N, board: BoardStore) -> Self {
        Self { api, exporter, notifier, board }
    }

    pub fn board(&self) -> BoardStore {
        self.board
    }

    // ========================
    // List
    // ========================

    /// Refetch the notes and redraw. The selection is cleared only once the
    /// fetch succeeded; on failure nothing changes.
    pub async fn refresh(&self) -> Result<usize, FetchError> {
        let notes = self.api.list_notes().await?;
        let count = notes.len();
        self.board.selection().write().clear();
        store_replace_notes(&self.board, notes);
        log!("[Notes] Loaded {} notes", count);
        Ok(count)
    }

    // ========================
    // Rows
    // ========================

    /// Row checkbox changed. Returns the new select-all state.
    pub fn toggle_note(&self, id: u32, checked: bool) -> bool {
        {
            let field = self.board.selection();
            let mut selection = field.write();
            if checked {
                selection.add(id);
            } else {
                selection.remove(id);
            }
        }
        self.all_selected()
    }

    /// Select-all changed: apply to every rendered row. Returns how many rows
    /// it applied to.
    pub fn toggle_all(&self, checked: bool) -> usize {
        let ids = rendered_ids(&self.board);
        let field = self.board.selection();
        let mut selection = field.write();
        for id in &ids {
            if checked {
                selection.add(*id);
            } else {
                selection.remove(*id);
            }
        }
        ids.len()
    }

    pub fn all_selected(&self) -> bool {
        let ids = rendered_ids(&self.board);
        self.board.selection().with_untracked(|s| all_selected(&ids, s))
    }

    // ========================
    // Batch actions
    // ========================

    pub async fn generate_interfaces(&self) -> WorkflowResult<Generation> {
        if let Err(e) = self.board.selection().with_untracked(|s| s.ensure_not_empty()) {
            return Ok(self.nothing_selected(e));
        }

        let notes = self.api.list_notes().await?;

        // selection may have changed while the list was in flight
        let (picked, ids) = self
            .board
            .selection()
            .with_untracked(|s| (select_notes(&notes, s), s.ids()));
        if ids.is_empty() {
            return Ok(self.nothing_selected(ValidationError::EmptySelection));
        }

        log!("[Notes] Exporting {} of {} selected notes, total {}", picked.count, ids.len(), picked.total);
        self.exporter.export_notes(&picked)?;

        // the export above is not undone if this fails
        self.api.prepare_selected(&ids).await?;

        // the batch is prepared server-side from here on
        self.board.selection().write().clear();
        self.notifier.notify(GENERATED_MESSAGE, NotifyKind::Info);

        if let Err(e) = self.refresh().await {
            error!("[Notes] Refresh after generation failed: {}", e);
            self.notifier
                .notify(&format!("{}: {}", REFRESH_FAILED_MESSAGE, e), NotifyKind::Error);
        }

        Ok(Generation::Prepared {
            count: picked.count,
            total: picked.total,
        })
    }

    pub async fn download_latest(&self) -> WorkflowResult<()> {
        let bytes = self.api.download_latest().await?;
        let filename = latest_archive_name(chrono::Local::now().date_naive());
        log!("[Notes] Downloading {} ({} bytes)", filename, bytes.len());
        self.exporter.save_file(&bytes, &filename, ARCHIVE_MIME)?;
        Ok(())
    }

    fn nothing_selected(&self, e: ValidationError) -> Generation {
        warn!("[Notes] Generate skipped: {}", e);
        self.notifier.notify(&e.to_string(), NotifyKind::Error);
        Generation::NothingSelected
    }

    // ========================
    // Modal
    // ========================

    /// Row clicked. Clicks on the row's checkbox only toggle selection.
    pub async fn row_clicked(&self, id: u32, on_checkbox: bool) -> Result<bool, FetchError> {
        if on_checkbox {
            return Ok(false);
        }
        self.open_order(id).await
    }

    /// Fetch and show one order. Returns whether the result was mounted; a
    /// result superseded by a later open or a close is dropped, and so is
    /// its error.
    pub async fn open_order(&self, id: u32) -> Result<bool, FetchError> {
        let ticket = self.board.modal().write().begin();
        let order = match self.api.get_order(id).await {
            Ok(order) => order,
            Err(e) if self.board.modal().with_untracked(|m| m.is_current(ticket)) => return Err(e),
            Err(e) => {
                warn!("[Modal] Ignoring failure of superseded request for note {}: {}", id, e);
                return Ok(false);
            }
        };
        let mounted = self.board.modal().write().resolve(ticket, order);
        if !mounted {
            log!("[Modal] Dropping stale detail for note {}", id);
        }
        Ok(mounted)
    }

    pub fn close_order(&self) {
        self.board.modal().write().close();
    }

    /// Surface a failed action to the user
    pub fn report(&self, err: &WorkflowError) {
        error!("[Notes] {}", err);
        let message = match err {
            WorkflowError::Validation(e) => e.to_string(),
            other => format!("No se pudo completar la operación: {}", other),
        };
        self.notifier.notify(&message, NotifyKind::Error);
    }
}

/// `pedidos-2024-06-01.zip`
pub fn latest_archive_name(date: chrono::NaiveDate) -> String {
    format!("pedidos-{}.zip", date.format("%Y-%m-%d"))
}
