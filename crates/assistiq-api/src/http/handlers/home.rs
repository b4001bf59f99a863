//! Homepage handler.

use axum::response::Html;

/// GET / - Fixed HTML homepage with the ticket submission form.
///
/// Embedded at compile time so the binary is self-contained.
pub async fn homepage() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
