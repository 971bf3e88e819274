use axum::Json;
use axum::extract::State;

use crate::account::{AccountResponse, AccountService, PageQuery};
use crate::error::{ResponseError, Result};
use crate::response::ApiResponse;
use crate::router::Paging;

/// Handler to list accounts, page by page.
#[utoipa::path(
    get,
    path = "/api/accounts",
    params(
        PageQuery,
        (
            "sort" = Option<Vec<String>>,
            Query,
            description = "Sort key, `{fieldName},{asc|desc}`. \
                Repeat it to sort on several fields."
        )
    ),
    responses(
        (
            status = 200,
            description = "Requested page of accounts",
            body = ApiResponse<Vec<AccountResponse>>
        ),
        (
            status = 400,
            description = "Malformed paging parameters",
            body = ResponseError
        )
    ),
    tag = "accounts",
    operation_id = "findAll"
)]
pub async fn handler(
    State(accounts): State<AccountService>,
    Paging(pageable): Paging,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>> {
    let accounts = accounts.find_all(&pageable).await?;
    Ok(Json(ApiResponse::of(accounts)))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use super::*;
    use crate::router::accounts::tests::register;
    use crate::*;

    async fn find_all(app: Router, query: &str) -> Vec<AccountResponse> {
        let response = make_request(
            app,
            Method::GET,
            &format!("/api/accounts?{query}"),
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{query}");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: ApiResponse<Vec<AccountResponse>> =
            serde_json::from_slice(&body).unwrap();
        body.body().clone()
    }

    fn names(accounts: &[AccountResponse]) -> Vec<&str> {
        accounts.iter().map(|a| a.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_handler() {
        let app = app(router::state());
        register(app.clone(), "jojiapp", 26).await;

        let accounts =
            find_all(app.clone(), "page=0&size=5&sort=id,asc").await;
        assert_eq!(
            accounts,
            [AccountResponse {
                id: 1,
                name: "jojiapp".into(),
                age: 26
            }]
        );

        // Page index starts at 0.
        let response = make_request(
            app,
            Method::GET,
            "/api/accounts?page=1&size=5&sort=id,asc",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["body"], json!([]));
    }

    #[tokio::test]
    async fn test_find_all_sorted() {
        let app = app(router::state());
        for (name, age) in [("carol", 30), ("alice", 41), ("bob", 19)] {
            register(app.clone(), name, age).await;
        }

        let accounts = find_all(app.clone(), "sort=age,desc").await;
        assert_eq!(names(&accounts), ["alice", "carol", "bob"]);

        let accounts = find_all(app, "size=2&sort=name").await;
        assert_eq!(names(&accounts), ["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_find_all_several_sort_keys() {
        let app = app(router::state());
        for (name, age) in [("carol", 30), ("alice", 41), ("bob", 30)] {
            register(app.clone(), name, age).await;
        }

        let accounts =
            find_all(app.clone(), "sort=age,desc&sort=name,asc").await;
        assert_eq!(names(&accounts), ["alice", "bob", "carol"]);

        let accounts = find_all(app, "sort=age,asc&sort=name,desc").await;
        assert_eq!(names(&accounts), ["carol", "bob", "alice"]);
    }

    #[tokio::test]
    async fn test_find_all_empty_sort() {
        let app = app(router::state());
        for (name, age) in [("carol", 30), ("alice", 41)] {
            register(app.clone(), name, age).await;
        }

        // Blank sort keys fall back on `id,asc`.
        for query in ["sort=", "sort=&size=5", "sort=&sort=%20"] {
            let accounts = find_all(app.clone(), query).await;
            assert_eq!(names(&accounts), ["carol", "alice"], "{query}");
        }
    }

    #[tokio::test]
    async fn test_find_all_size_clamped() {
        let app = app(router::state());
        register(app.clone(), "jojiapp", 26).await;

        let accounts = find_all(app.clone(), "size=3000").await;
        assert_eq!(accounts.len(), 1);

        let accounts = find_all(app, "page=4294967295&size=2000").await;
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_malformed_params() {
        let app = app(router::state());

        for query in [
            "page=-1",
            "page=first",
            "size=abc",
            "size=0",
            "sort=unknown,asc",
            "sort=id,sideways",
            "sort=age,desc&sort=email",
            "page=0&page=1",
        ] {
            let response = make_request(
                app.clone(),
                Method::GET,
                &format!("/api/accounts?{query}"),
                String::default(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{query}");
        }
    }
}
