//! Human and machine readable API documentation.

use axum::Json;
use axum::response::Html;
use utoipa::OpenApi;

use crate::doc::ApiDoc;

const INDEX: &str = include_str!("../../docs/index.html");

/// `GET /docs/index.html`, the `profile` of every resource.
pub async fn index() -> Html<&'static str> {
    Html(INDEX)
}

/// `GET /docs/openapi.json`.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
