use std::sync::Arc;

use crate::account::{
    Account, AccountRegister, AccountRepository, AccountResponse,
    AccountUpdate, Pageable,
};
use crate::error::{Result, ServerError};

/// Account manager.
#[derive(Clone)]
pub struct AccountService {
    repo: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Create a new [`AccountService`].
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }

    /// Save a new account.
    pub async fn register(&self, request: AccountRegister) -> Result<Account> {
        let account = self.repo.create(&request).await?;
        tracing::info!(account_id = account.id, "account registered");
        Ok(account)
    }

    /// List accounts, one page at a time.
    pub async fn find_all(
        &self,
        pageable: &Pageable,
    ) -> Result<Vec<AccountResponse>> {
        tracing::debug!(
            page = pageable.page(),
            size = pageable.size(),
            sort = %pageable.sort(),
            "listing accounts"
        );

        Ok(self
            .repo
            .list(pageable)
            .await?
            .into_iter()
            .map(AccountResponse::from)
            .collect())
    }

    /// Replace `name` and `age` of account `id`.
    pub async fn update_all_by_id(
        &self,
        id: i64,
        request: AccountUpdate,
    ) -> Result<()> {
        if !self.repo.replace(id, &request).await? {
            return Err(ServerError::AccountNotFound { id });
        }

        tracing::info!(account_id = id, "account updated");
        Ok(())
    }

    /// Delete account `id`.
    pub async fn remove_by_id(&self, id: i64) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(ServerError::AccountNotFound { id });
        }

        tracing::info!(account_id = id, "account removed");
        Ok(())
    }
}
