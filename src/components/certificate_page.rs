//! Certificate Page Component
//!
//! Product certificate (ficha de producto) looked up by the `codigo` query
//! parameter, with product image and a QR code of the page itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CertificateApi, HttpApi};
use crate::certificate::{
    field_text, normalize_image_url, page_title, product_description, qr_image_url, query_param, MISSING_CODE,
};
use crate::config::ApiConfig;
use crate::models::Certificate;

#[derive(Clone, Debug, PartialEq)]
enum CertificateState {
    Loading,
    Loaded(Certificate),
    /// Product code (or a message when there is none)
    Error(String),
}

#[component]
pub fn CertificatePage() -> impl IntoView {
    let (state, set_state) = signal(CertificateState::Loading);
    let (page_url, set_page_url) = signal(String::new());

    Effect::new(move |_| {
        let location = window().location();
        let search = location.search().unwrap_or_default();
        set_page_url.set(location.href().unwrap_or_default());

        let Some(code) = query_param(&search, "codigo") else {
            set_state.set(CertificateState::Error(MISSING_CODE.to_string()));
            return;
        };

        spawn_local(async move {
            match HttpApi::new(ApiConfig::load()).get_certificate(&code).await {
                Ok(Some(certificate)) => {
                    document().set_title(&page_title(&certificate));
                    set_state.set(CertificateState::Loaded(certificate));
                }
                Ok(None) => {
                    web_sys::console::log_1(&format!("[Certificate] No certificate for {}", code).into());
                    set_state.set(CertificateState::Error(code));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Certificate] Error loading {}: {}", code, e).into());
                    set_state.set(CertificateState::Error(code));
                }
            }
        });
    });

    view! {
        <div class="ficha-container">
            {move || match state.get() {
                CertificateState::Loading => view! {
                    <div id="loading" class="loading">"Cargando certificado..."</div>
                }.into_any(),
                CertificateState::Error(code) => view! {
                    <div id="error" class="error">
                        <p>"No se encontró el certificado del producto."</p>
                        <p>"Código: " <span id="error-code">{code}</span></p>
                    </div>
                }.into_any(),
                CertificateState::Loaded(certificate) => view! {
                    <CertificateSheet certificate=certificate page_url=page_url.get_untracked() />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CertificateSheet(certificate: Certificate, page_url: String) -> impl IntoView {
    let description = product_description(&certificate);
    let image_url = normalize_image_url(certificate.url_imagen.as_deref());
    let qr_url = qr_image_url(&page_url);
    let heading = format!("Certificado - {}", description);
    let qr_alt = format!("Código QR - {}", description);

    let (image_failed, set_image_failed) = signal(false);
    let (qr_failed, set_qr_failed) = signal(false);
    let has_image = image_url.is_some();

    let field = |label: &'static str, value: &Option<String>| {
        let text = field_text(value);
        view! {
            <div class="ficha-field">
                <span class="ficha-label">{label}</span>
                <span class="ficha-value">{text}</span>
            </div>
        }
    };

    view! {
        <div id="ficha" class="ficha">
            <h1 id="product-breadcrumb-title">{heading}</h1>

            <section class="ficha-section">
                <h2>"Importador"</h2>
                {field("Importador", &certificate.importador)}
                {field("CUIT", &certificate.cuit)}
                {field("Origen", &certificate.origen)}
            </section>

            <section class="ficha-section">
                <h2>"Certificación"</h2>
                {field("N° de certificado", &certificate.numero_certificado)}
                {field("Organismo emisor", &certificate.organismo_emisor)}
            </section>

            <section class="ficha-section">
                <h2>"Producto"</h2>
                {field("N° de parte", &certificate.numero_parte)}
                {field("Marca", &certificate.marca)}
                {field("Modelo", &certificate.modelo)}
                {field("Medida", &certificate.medida)}
                {field("Índice de carga", &certificate.indice_carga)}
                {field("Índice de velocidad", &certificate.indice_velocidad)}
            </section>

            <div class="ficha-media">
                <Show
                    when=move || has_image && !image_failed.get()
                    fallback=|| view! { <div id="no-image" class="no-image">"Imagen no disponible"</div> }
                >
                    <img
                        id="product-image"
                        src=image_url.clone().unwrap_or_default()
                        alt=description.clone()
                        on:error=move |_| {
                            web_sys::console::log_1(&"[Certificate] Product image failed to load".into());
                            set_image_failed.set(true);
                        }
                    />
                </Show>
                <Show
                    when=move || !qr_failed.get()
                    fallback=|| view! { <div id="no-qr" class="no-qr">"QR no disponible"</div> }
                >
                    <img
                        id="qr-image"
                        src=qr_url.clone()
                        alt=qr_alt.clone()
                        on:error=move |_| set_qr_failed.set(true)
                    />
                </Show>
            </div>
        </div>
    }
}
