use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::account::{AccountRegister, AccountService};
use crate::error::{ResponseError, Result};
use crate::response::{ApiResponse, SuccessResponse};
use crate::router::Valid;

/// Handler to register an account.
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = AccountRegister,
    responses(
        (
            status = 201,
            description = "Account created",
            body = ApiResponse<SuccessResponse>
        ),
        (
            status = 400,
            description = "Missing name or age",
            body = ResponseError
        )
    ),
    tag = "accounts",
    operation_id = "register"
)]
pub async fn handler(
    State(accounts): State<AccountService>,
    Valid(body): Valid<AccountRegister>,
) -> Result<(StatusCode, Json<ApiResponse<SuccessResponse>>)> {
    accounts.register(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::of(SuccessResponse::create())),
    ))
}
