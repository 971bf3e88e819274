//! HTTP routes and their extractors.
pub mod accounts;
pub mod docs;
pub mod index;
pub mod status;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use validator::ValidationErrors;

use crate::AppState;
use crate::ServerError;
use crate::account::{AccountForm, PageQuery, Pageable, sort_params};

/// JSON body accepted only once it passes validation.
///
/// A missing `Content-Type`, malformed JSON and invalid fields all end up
/// as `400 Bad Request`.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: TryFrom<AccountForm, Error = ValidationErrors> + Send,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(form) =
            Json::<AccountForm>::from_request(req, state).await?;
        Ok(Valid(T::try_from(form)?))
    }
}

/// Paging parameters resolved against configured defaults.
///
/// `sort` may be repeated, each value adding a sort key.
pub struct Paging(pub Pageable);

impl FromRequestParts<AppState> for Paging {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) =
            Query::<PageQuery>::from_request_parts(parts, state).await?;
        let sort = sort_params(parts.uri.query().unwrap_or_default());

        let pageable = query.into_pageable(&sort, &state.config.pagination)?;
        Ok(Paging(pageable))
    }
}

/// Numeric `{id}` path segment.
pub struct AccountId(pub i64);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(AccountId(id))
    }
}

/// In-memory state for route tests.
#[cfg(test)]
pub fn state() -> AppState {
    use std::sync::Arc;

    use crate::account::{AccountService, MemoryRepository};

    AppState {
        config: Arc::new(crate::config::Configuration::default()),
        accounts: AccountService::new(Arc::new(MemoryRepository::new())),
        metrics: None,
    }
}
