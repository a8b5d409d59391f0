//! PostgreSQL Repository Implementations

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{
    AddAccountRepository, LoadAccountByEmailRepository, LogErrorRepository,
    UpdateAccessTokenRepository,
};
use crate::domain::value_object::{AccountId, access_token::AccessToken, email::Email};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AddAccountRepository for PgAccountRepository {
    async fn add(&self, account: &NewAccount) -> AccountResult<Account> {
        let id = AccountId::new();

        sqlx::query(
            r#"
            INSERT INTO accounts (
                id,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(account.clone().into_account(id))
    }
}

impl LoadAccountByEmailRepository for PgAccountRepository {
    async fn load_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                access_token
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }
}

impl UpdateAccessTokenRepository for PgAccountRepository {
    async fn update_access_token(&self, id: &AccountId, token: &AccessToken) -> AccountResult<()> {
        let updated = sqlx::query("UPDATE accounts SET access_token = $1 WHERE id = $2")
            .bind(token.as_str())
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        require_updated(id, updated)
    }
}

/// PostgreSQL-backed error log
#[derive(Clone)]
pub struct PgLogErrorRepository {
    pool: PgPool,
}

impl PgLogErrorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LogErrorRepository for PgLogErrorRepository {
    async fn log_error(&self, stack: &str) -> AccountResult<()> {
        sqlx::query("INSERT INTO error_logs (stack, created_at) VALUES ($1, $2)")
            .bind(stack)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// A token is only issued once a row holds it.
fn require_updated(id: &AccountId, rows_affected: u64) -> AccountResult<()> {
    if rows_affected == 0 {
        tracing::warn!(account_id = %id, "Access token update matched no account");
        return Err(AccountError::Database(sqlx::Error::RowNotFound));
    }
    Ok(())
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    access_token: Option<String>,
}

impl AccountRow {
    fn into_account(self) -> Account {
        Account {
            id: AccountId::from_uuid(self.id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash: self.password_hash,
            access_token: self.access_token.map(AccessToken::new),
        }
    }
}
