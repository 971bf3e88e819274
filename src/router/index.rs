//! Entry point listing navigation links.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};

use crate::config::Configuration;
use crate::response::{ApiResponse, EntityModel, SuccessResponse};

/// Documentation anchor describing this route.
const PROFILE: &str = "docs/index.html#resources-index-get";

pub type Response = EntityModel<ApiResponse<SuccessResponse>>;

/// Public URL of the service root, always ending with `/`.
fn base_url(config: &Configuration, headers: &HeaderMap) -> String {
    let mut url = if config.url.is_empty() {
        let host = headers
            .get(header::HOST)
            .and_then(|host| host.to_str().ok())
            .unwrap_or("localhost");
        format!("http://{host}/")
    } else {
        config.url.clone()
    };

    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (
            status = 200,
            description = "Success with `self` and `profile` links",
            body = EntityModel<ApiResponse<SuccessResponse>>
        )
    ),
    tag = "index",
    operation_id = "index"
)]
pub async fn handler(
    State(config): State<Arc<Configuration>>,
    headers: HeaderMap,
) -> Json<Response> {
    let base = base_url(&config, &headers);

    Json(
        EntityModel::of(ApiResponse::of(SuccessResponse::create()))
            .link("self", base.clone())
            .link("profile", format!("{base}{PROFILE}")),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use super::*;
    use crate::*;

    #[tokio::test]
    async fn test_index_handler() {
        let app = app(router::state());

        let response =
            make_request(app, Method::GET, "/", String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["body"]["success"], true);
        assert!(body["createDate"].is_string());
        assert_eq!(body["_links"]["self"]["href"], "http://localhost/");
        assert_eq!(
            body["_links"]["profile"]["href"],
            "http://localhost/docs/index.html#resources-index-get"
        );
    }

    #[test]
    fn test_base_url() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "api.example.com:8080".parse().unwrap());

        let config = Configuration::default();
        assert_eq!(base_url(&config, &headers), "http://api.example.com:8080/");

        let mut config = Configuration::default();
        config.url = "https://accounts.example.com/v1".into();
        assert_eq!(
            base_url(&config, &headers),
            "https://accounts.example.com/v1/"
        );
    }
}
