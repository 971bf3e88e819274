//! Accounts-related HTTP API.
pub mod find_all;
pub mod register;
pub mod remove;
pub mod update;

use axum::Router;
use axum::routing::{get, put};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /api/accounts` goes to `register`, `GET` to `find_all`.
        .route("/", get(find_all::handler).post(register::handler))
        // `PUT /api/accounts/{id}` goes to `update`, `DELETE` to `remove`.
        .route("/{id}", put(update::handler).delete(remove::handler))
}
