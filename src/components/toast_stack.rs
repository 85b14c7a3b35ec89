//! Toast Stack Component

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = ctx.toasts;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
