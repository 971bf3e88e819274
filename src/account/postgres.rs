//! PostgreSQL adapter of [`AccountRepository`].

use async_trait::async_trait;
use sqlx::PgPool;

use crate::account::{
    Account, AccountRegister, AccountRepository, AccountUpdate, Pageable,
};
use crate::error::Result;

#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Create a new [`PostgresRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Listing query for `pageable`.
///
/// Columns and directions come from closed enums, never from user input.
fn list_query(pageable: &Pageable) -> String {
    let sort = pageable.sort();
    let mut order_by = sort
        .orders()
        .iter()
        .map(|order| {
            format!("{} {}", order.field.column(), order.direction.keyword())
        })
        .collect::<Vec<_>>();
    if !sort.contains_id() {
        order_by.push("id ASC".to_owned());
    }

    format!(
        "SELECT id, name, age FROM accounts ORDER BY {} LIMIT $1 OFFSET $2",
        order_by.join(", ")
    )
}

#[async_trait]
impl AccountRepository for PostgresRepository {
    async fn create(&self, account: &AccountRegister) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (name, age) VALUES ($1, $2)
            RETURNING id, name, age"#,
        )
        .bind(account.name())
        .bind(account.age())
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    async fn list(&self, pageable: &Pageable) -> Result<Vec<Account>> {
        let offset = i64::try_from(pageable.offset()).unwrap_or(i64::MAX);

        let accounts = sqlx::query_as::<_, Account>(&list_query(pageable))
            .bind(i64::from(pageable.size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(accounts)
    }

    async fn replace(&self, id: i64, account: &AccountUpdate) -> Result<bool> {
        let result = sqlx::query(
            r#"UPDATE accounts SET name = $1, age = $2 WHERE id = $3"#,
        )
        .bind(account.name())
        .bind(account.age())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM accounts WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Sort, SortField};

    #[test]
    fn test_list_query() {
        let pageable =
            Pageable::of(2, 10, Sort::by(SortField::Name).descending());
        assert_eq!(
            list_query(&pageable),
            "SELECT id, name, age FROM accounts \
             ORDER BY name DESC, id ASC LIMIT $1 OFFSET $2"
        );

        let pageable = Pageable::of(
            0,
            10,
            Sort::by(SortField::Age).descending().and(SortField::Name),
        );
        assert_eq!(
            list_query(&pageable),
            "SELECT id, name, age FROM accounts \
             ORDER BY age DESC, name ASC, id ASC LIMIT $1 OFFSET $2"
        );

        assert_eq!(
            list_query(&Pageable::default()),
            "SELECT id, name, age FROM accounts \
             ORDER BY id ASC LIMIT $1 OFFSET $2"
        );
        let by_id = Pageable::of(0, 10, Sort::by(SortField::Id).descending());
        assert_eq!(
            list_query(&by_id),
            "SELECT id, name, age FROM accounts \
             ORDER BY id DESC LIMIT $1 OFFSET $2"
        );
    }
}
