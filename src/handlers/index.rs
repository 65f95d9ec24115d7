//! Landing page and favicon.

use crate::response::empty_not_found;
use axum::{http::StatusCode, response::Html};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

/// No icon is served; browsers get a bare 404.
pub async fn favicon() -> StatusCode {
    empty_not_found()
}
