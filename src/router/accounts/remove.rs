//! Delete an account.

use axum::extract::State;
use axum::http::StatusCode;

use crate::account::AccountService;
use crate::error::{ResponseError, Result};
use crate::router::AccountId;

#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account unique identifier")),
    responses(
        (status = 204, description = "Account removed"),
        (status = 404, description = "Unknown account", body = ResponseError)
    ),
    tag = "accounts",
    operation_id = "removeById"
)]
pub async fn handler(
    State(accounts): State<AccountService>,
    AccountId(id): AccountId,
) -> Result<StatusCode> {
    accounts.remove_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
