//! Notifications
//!
//! Fire-and-forget user messages, rendered as toasts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Error,
}

impl NotifyKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotifyKind::Info => "toast toast-info",
            NotifyKind::Error => "toast toast-error",
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotifyKind,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: &str, kind: NotifyKind) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.to_string(),
            kind,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Browser notifier backed by a toast signal
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    queue: RwSignal<ToastQueue>,
}

impl ToastNotifier {
    pub fn new(queue: RwSignal<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));
        let queue = self.queue;
        Timeout::new(TOAST_MILLIS, move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }
}
