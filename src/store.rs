//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The selection and
//! modal types are plain structs so the workflow can be tested without a DOM.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ValidationError;
use crate::models::{Note, Order};

/// Set of selected note ids
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteStore {
    ids: HashSet<u32>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: u32) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: u32) {
        self.ids.remove(&id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn has(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Snapshot of the selected ids, ascending
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn ensure_not_empty(&self) -> Result<(), ValidationError> {
        if self.ids.is_empty() {
            Err(ValidationError::EmptySelection)
        } else {
            Ok(())
        }
    }
}

/// Order modal slot
///
/// Every open request takes a ticket; a fetched order is only mounted when
/// its ticket is still the newest one. Closing invalidates pending tickets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    latest: u64,
    open: Option<Order>,
}

impl ModalState {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Mount `order` if `ticket` is still current. Returns whether it was mounted.
    pub fn resolve(&mut self, ticket: u64, order: Order) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.open = Some(order);
        true
    }

    pub fn close(&mut self) {
        self.open = None;
        self.latest += 1;
    }

    pub fn order(&self) -> Option<&Order> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Rendered notes, selection and modal, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Notes of the last successful fetch, in server order
    pub notes: Vec<Note>,
    /// Selected note ids
    pub selection: NoteStore,
    pub modal: ModalState,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

pub fn new_board() -> BoardStore {
    Store::new(BoardState::default())
}

// ========================
// Store Helper Functions
// ========================

/// Ids of the currently rendered rows
pub fn rendered_ids(store: &BoardStore) -> Vec<u32> {
    store.notes().with_untracked(|notes| notes.iter().map(|n| n.id).collect())
}

/// Replace rendered notes after a successful fetch
pub fn store_replace_notes(store: &BoardStore, notes: Vec<Note>) {
    *store.notes().write() = notes;
}
