//! Notes Table Component
//!
//! Selectable note rows with a select-all header and a total row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::BoardStateStoreFields;
use crate::view_model::{
    all_selected, is_checkbox_click, table_body, NoteRow, TableBody, TotalRow, CHECKBOX_CLASS, COLUMN_COUNT,
    EMPTY_MESSAGE,
};

/// Notes table, rebuilt whenever the fetched list changes
#[component]
pub fn NotesTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board = ctx.board;

    let body = Memo::new(move |_| board.notes().with(|notes| table_body(notes)));

    // Checked iff rows are rendered and all of them are selected
    let select_all_checked = move || {
        let ids: Vec<u32> = board.notes().with(|notes| notes.iter().map(|n| n.id).collect());
        board.selection().with(|selection| all_selected(&ids, selection))
    };

    let on_select_all = move |ev| {
        let checked = event_target_checked(&ev);
        let applied = ctx.workflow().toggle_all(checked);
        web_sys::console::log_1(&format!("[NotesTable] Select all={} on {} rows", checked, applied).into());
    };

    view! {
        <table class="fl-table">
            <thead>
                <tr>
                    <th scope="col" class="note-select-col">
                        <input
                            type="checkbox"
                            id="select-all-notes"
                            title="Seleccionar todas"
                            prop:checked=select_all_checked
                            on:change=on_select_all
                        />
                    </th>
                    <th scope="col">"#"</th>
                    <th scope="col">"Cliente"</th>
                    <th scope="col" class="visually-hidden-mobile">"Fecha"</th>
                    <th scope="col">"Articulos"</th>
                    <th scope="col">"Total"</th>
                    <th scope="col" class="visually-hidden-mobile">"Estado"</th>
                </tr>
            </thead>
            <tbody id="table-body">
                {move || match body.get() {
                    TableBody::Empty => view! {
                        <tr>
                            <td colspan=COLUMN_COUNT.to_string()>{EMPTY_MESSAGE}</td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows { rows, total } => view! {
                        {rows.into_iter().map(|row| view! { <NoteRowView row=row /> }).collect_view()}
                        <TotalRowView total=total />
                    }.into_any(),
                }}
            </tbody>
        </table>
    }
}

/// One note row; the checkbox toggles selection, the rest opens the detail
#[component]
fn NoteRowView(row: NoteRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board = ctx.board;
    let id = row.id;

    let checked = move || board.selection().with(|selection| selection.has(id));

    let open_detail = move |ev: web_sys::MouseEvent| {
        let on_checkbox = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| is_checkbox_click(&el.class_name()));
        let wf = ctx.workflow();
        spawn_local(async move {
            if let Err(e) = wf.row_clicked(id, on_checkbox).await {
                wf.report(&e.into());
            }
        });
    };

    view! {
        <tr class="orders__table__row" on:click=open_detail>
            <td class="note-select-col">
                <input
                    type="checkbox"
                    class=CHECKBOX_CLASS
                    data-note-id=id.to_string()
                    prop:checked=checked
                    on:change=move |ev| {
                        ctx.workflow().toggle_note(id, event_target_checked(&ev));
                    }
                />
            </td>
            <td>{id}</td>
            <td>{row.client}</td>
            <td class="visually-hidden-mobile">{row.date}</td>
            <td class="text-end">{row.items}</td>
            <td class="text-end">{row.amount}</td>
            <td class="visually-hidden-mobile">{row.status}</td>
        </tr>
    }
}

#[component]
fn TotalRowView(total: TotalRow) -> impl IntoView {
    view! {
        <tr class="total-row">
            <td></td>
            <td>"Total"</td>
            <td class="text-start">{format!("Notas: {}", total.count)}</td>
            <td></td>
            <td></td>
            <td class="text-end">{total.amount}</td>
            <td></td>
        </tr>
    }
}
