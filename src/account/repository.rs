//! Account storage port and its in-memory adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::{Account, AccountRegister, AccountUpdate, Pageable};
use crate::error::Result;

/// Port for account persistence operations.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Store a new account under a freshly assigned id.
    async fn create(&self, account: &AccountRegister) -> Result<Account>;

    /// List accounts in `pageable` order, restricted to the requested page.
    async fn list(&self, pageable: &Pageable) -> Result<Vec<Account>>;

    /// Replace every field of account `id`.
    /// Returns `false` when no such account exists.
    async fn replace(&self, id: i64, account: &AccountUpdate) -> Result<bool>;

    /// Delete account `id`.
    /// Returns `false` when no such account exists.
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, Default)]
struct Store {
    accounts: BTreeMap<i64, Account>,
    last_id: i64,
}

/// Accounts kept in process memory.
///
/// Readers share the lock; writers, including id assignment, are serialized.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    store: RwLock<Store>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for MemoryRepository {
    async fn create(&self, account: &AccountRegister) -> Result<Account> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let account = Account {
            id: store.last_id,
            name: account.name().to_owned(),
            age: account.age(),
        };
        store.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn list(&self, pageable: &Pageable) -> Result<Vec<Account>> {
        let store = self.store.read().await;

        let mut accounts = store.accounts.values().collect::<Vec<_>>();
        let sort = pageable.sort();
        accounts.sort_by(|a, b| sort.compare(a, b));

        let offset = usize::try_from(pageable.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(pageable.size()).unwrap_or(usize::MAX);

        Ok(accounts
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect())
    }

    async fn replace(&self, id: i64, account: &AccountUpdate) -> Result<bool> {
        let mut store = self.store.write().await;

        match store.accounts.get_mut(&id) {
            Some(stored) => {
                stored.name = account.name().to_owned();
                stored.age = account.age();
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.store.write().await.accounts.remove(&id).is_some())
    }
}
