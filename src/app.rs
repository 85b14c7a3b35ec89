//! Interface Generator Frontend App
//!
//! Picks the page from the location path and mounts it.

use leptos::prelude::*;

use crate::components::{CertificatePage, InterfaceGenerator, ToastStack};
use crate::context::AppContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Interfaces,
    Certificate,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("ficha-producto") {
            Page::Certificate
        } else {
            Page::Interfaces
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new());

    let path = window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path);
    web_sys::console::log_1(&format!("[APP] Path {} -> {:?}", path, page).into());

    view! {
        <div class="profile-info">
            {match page {
                Page::Interfaces => view! { <InterfaceGenerator /> }.into_any(),
                Page::Certificate => view! { <CertificatePage /> }.into_any(),
            }}
        </div>
        <ToastStack />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Interfaces);
        assert_eq!(Page::from_path("/index.html"), Page::Interfaces);
        assert_eq!(Page::from_path("/ficha-producto.html"), Page::Certificate);
        assert_eq!(Page::from_path("/productos/ficha-producto"), Page::Certificate);
    }
}
