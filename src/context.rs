//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::ApiConfig;
use crate::export::CsvExporter;
use crate::notify::{ToastNotifier, ToastQueue};
use crate::store::{new_board, BoardStore};
use crate::workflow::InterfaceWorkflow;

/// Workflow wired to the browser collaborators
pub type AppWorkflow = InterfaceWorkflow<HttpApi, CsvExporter, ToastNotifier>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rendered notes, selection and modal
    pub board: BoardStore,
    /// Visible toasts
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            board: new_board(),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Workflow over the shared board; cheap to build per event
    pub fn workflow(&self) -> AppWorkflow {
        InterfaceWorkflow::new(
            HttpApi::new(ApiConfig::load()),
            CsvExporter,
            ToastNotifier::new(self.toasts),
            self.board,
        )
    }
}
