//! Interface Generator View
//!
//! Toolbar actions over the notes table and the order modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NotesTable, OrderModal};
use crate::context::AppContext;

#[component]
pub fn InterfaceGenerator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Load notes on mount
    Effect::new(move |_| {
        let wf = ctx.workflow();
        spawn_local(async move {
            if let Err(e) = wf.refresh().await {
                wf.report(&e.into());
            }
        });
    });

    let refresh = move |_| {
        let wf = ctx.workflow();
        spawn_local(async move {
            match wf.refresh().await {
                Ok(count) => web_sys::console::log_1(&format!("[Toolbar] Refreshed, {} notes", count).into()),
                Err(e) => wf.report(&e.into()),
            }
        });
    };

    let generate = move |_| {
        let wf = ctx.workflow();
        spawn_local(async move {
            match wf.generate_interfaces().await {
                Ok(outcome) => web_sys::console::log_1(&format!("[Toolbar] Generate: {:?}", outcome).into()),
                Err(e) => wf.report(&e),
            }
        });
    };

    let download = move |_| {
        let wf = ctx.workflow();
        spawn_local(async move {
            if let Err(e) = wf.download_latest().await {
                wf.report(&e);
            }
        });
    };

    view! {
        <div class="interface__generator__container">
            <button class="button-sm bg-secondary-300 bg-hover-secondary-400" on:click=refresh>
                "Actualizar Lista"
            </button>
            <button class="button-sm bg-error-400 bg-hover-error-300 text-white" on:click=generate>
                "Generar Interfaces"
            </button>
            <button class="button-sm bg-success-400 text-white bg-hover-success" on:click=download>
                "Descargar Última Interfaz"
            </button>
        </div>

        <div class="table-container">
            <NotesTable />
        </div>

        <OrderModal />
    }
}
