//! Image modal fragment (HTMX).
//!
//! The page layout has a single `#img-modal` slot. Opening renders the overlay
//! into it; closing requests the fragment again without `src`, which renders
//! nothing and empties the slot.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use qr_inventory_core::view::Modal;
use serde::Deserialize;

/// Path of the modal fragment.
pub const MODAL_PATH: &str = "/inventory/modal";

#[derive(Debug, Deserialize)]
pub struct ModalParams {
    pub src: Option<String>,
}

/// Modal fragment template (for HTMX). Renders nothing when closed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/modal.html")]
pub struct ModalTemplate {
    pub source: Option<String>,
}

/// Request that opens the modal on `src`.
#[must_use]
pub fn modal_href(src: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("src", src)
        .finish();
    format!("{MODAL_PATH}?{query}")
}

/// Open or close the modal.
pub async fn show(Query(params): Query<ModalParams>) -> ModalTemplate {
    let modal = Modal::from_source(params.src.as_deref());
    ModalTemplate {
        source: modal.source().map(str::to_owned),
    }
}
