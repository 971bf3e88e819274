//! Replace every field of an account.

use axum::extract::State;
use axum::http::StatusCode;

use crate::account::{AccountService, AccountUpdate};
use crate::error::{ResponseError, Result};
use crate::router::{AccountId, Valid};

#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    params(("id" = i64, Path, description = "Account unique identifier")),
    request_body = AccountUpdate,
    responses(
        (status = 204, description = "Account updated"),
        (
            status = 400,
            description = "Missing name or age",
            body = ResponseError
        ),
        (status = 404, description = "Unknown account", body = ResponseError)
    ),
    tag = "accounts",
    operation_id = "updateAllById"
)]
pub async fn handler(
    State(accounts): State<AccountService>,
    AccountId(id): AccountId,
    Valid(body): Valid<AccountUpdate>,
) -> Result<StatusCode> {
    accounts.update_all_by_id(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}
