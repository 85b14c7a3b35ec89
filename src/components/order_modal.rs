//! Order Modal Component
//!
//! Overlay plus detail of the most recently opened order.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Order;
use crate::store::BoardStateStoreFields;
use crate::view_model::{format_amount, format_date};

#[component]
pub fn OrderModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let board = ctx.board;

    let close = move |_| ctx.workflow().close_order();

    view! {
        <Show when=move || board.modal().with(|modal| modal.is_open())>
            <div class="overlay" on:click=close></div>
            <div class="modal" role="dialog">
                <button class="modal__close" title="Cerrar" on:click=close>"✕"</button>
                {move || board.modal().with(|modal| modal.order().cloned()).map(|order| view! { <OrderDetail order=order /> })}
            </div>
        </Show>
    }
}

#[component]
fn OrderDetail(order: Order) -> impl IntoView {
    let observations = order.observations.clone().filter(|o| !o.trim().is_empty());

    view! {
        <div class="modal__content">
            <h2 class="modal__title">{format!("Nota #{}", order.id)}</h2>
            <p class="modal__client">{format!("{} - {}", order.id_client, order.client_name)}</p>
            <p class="modal__meta">
                <span>{format_date(&order.date)}</span>
                " · "
                <span>{order.status.clone()}</span>
            </p>

            <table class="fl-table modal__table">
                <thead>
                    <tr>
                        <th scope="col">"Código"</th>
                        <th scope="col">"Descripción"</th>
                        <th scope="col">"Cantidad"</th>
                        <th scope="col">"Precio"</th>
                        <th scope="col">"Subtotal"</th>
                    </tr>
                </thead>
                <tbody>
                    {order.lines.into_iter().map(|line| view! {
                        <tr>
                            <td>{line.code}</td>
                            <td>{line.description}</td>
                            <td class="text-end">{line.quantity}</td>
                            <td class="text-end">{format_amount(line.unit_price)}</td>
                            <td class="text-end">{format_amount(line.subtotal)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            {observations.map(|text| view! { <p class="modal__observations">{text}</p> })}

            <p class="modal__total">{format!("Total: {}", format_amount(order.total))}</p>
        </div>
    }
}
