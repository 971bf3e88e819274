//! Account domain: payloads, storage and business rules.
mod builder;
mod page;
mod postgres;
mod repository;
mod service;

pub use builder::*;
pub use page::*;
pub use postgres::*;
pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account as saved on the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// Read-only projection of an [`Account`] returned by listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    /// Account unique identifier.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "jojiapp")]
    pub name: String,
    #[schema(example = 26)]
    pub age: i32,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            age: account.age,
        }
    }
}
