//! UI Components
//!
//! Leptos components of the notes and certificate pages.

mod certificate_page;
mod interface_generator;
mod notes_table;
mod order_modal;
mod toast_stack;

pub use certificate_page::CertificatePage;
pub use interface_generator::InterfaceGenerator;
pub use notes_table::NotesTable;
pub use order_modal::OrderModal;
pub use toast_stack::ToastStack;
