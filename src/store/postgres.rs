use anyhow::{anyhow, Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use std::str::FromStr;

use crate::model::{
    ChartOfAccount, LoanReleaseEntryParam, Role, SignatureKind, SignatureParam, User,
    WeeklySavingTier,
};
use crate::store::traits::{
    ChartStore, EntryParamStore, SavingsStore, SignatureStore, Store, UserStore,
};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the reference-data tables if they are missing. Additive only;
    /// existing rows are never touched.
    pub async fn migrate(&self) -> Result<()> {
        let statements = [
            r#"CREATE TABLE IF NOT EXISTS chart_of_accounts (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL,
                description TEXT NOT NULL,
                nature TEXT NOT NULL,
                classification TEXT NOT NULL,
                dept_status TEXT NOT NULL
            )"#,
            r#"CREATE TABLE IF NOT EXISTS weekly_savings (
                id TEXT PRIMARY KEY,
                range_amount_from DOUBLE PRECISION NOT NULL,
                range_amount_to DOUBLE PRECISION NOT NULL,
                weekly_savings_fund DOUBLE PRECISION NOT NULL
            )"#,
            r#"CREATE TABLE IF NOT EXISTS signature_params (
                id TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                approved_by TEXT NOT NULL,
                checked_by TEXT NOT NULL,
                received_by TEXT
            )"#,
            r#"CREATE TABLE IF NOT EXISTS loan_release_entry_params (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL,
                label TEXT NOT NULL,
                account_id TEXT NOT NULL,
                sort INTEGER NOT NULL
            )"#,
            r#"CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                username TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at TEXT NOT NULL,
                deleted_at TEXT
            )"#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to create reference-data table")?;
        }

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn count_rows(&self, table: &str) -> Result<i64> {
        let row = sqlx::query(&format!("SELECT COUNT(*) AS count FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .with_context(|| format!("Failed to count rows in {}", table))?;

        Ok(row.get("count"))
    }
}

fn account_from_row(row: &sqlx::postgres::PgRow) -> ChartOfAccount {
    ChartOfAccount {
        id: row.get("id"),
        code: row.get("code"),
        description: row.get("description"),
        nature: row.get("nature"),
        classification: row.get("classification"),
        dept_status: row.get("dept_status"),
    }
}

#[async_trait::async_trait]
impl ChartStore for PostgresStore {
    async fn count_accounts(&self) -> Result<i64> {
        self.count_rows("chart_of_accounts").await
    }

    async fn insert_accounts(&self, rows: Vec<ChartOfAccount>) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        for account in rows {
            sqlx::query(
                r#"
                INSERT INTO chart_of_accounts (id, code, description, nature, classification, dept_status)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(account.id)
            .bind(account.code)
            .bind(account.description)
            .bind(account.nature)
            .bind(account.classification)
            .bind(account.dept_status)
            .execute(&mut *tx)
            .await
            .context("Failed to insert chart-of-accounts row")?;
        }

        tx.commit().await.context("Failed to commit chart-of-accounts insert")?;
        Ok(())
    }

    async fn find_accounts_by_codes(&self, codes: &[String]) -> Result<Vec<ChartOfAccount>> {
        let rows = sqlx::query(
            "SELECT id, code, description, nature, classification, dept_status
             FROM chart_of_accounts WHERE code = ANY($1)",
        )
        .bind(codes)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch chart-of-accounts rows by code")?;

        Ok(rows.iter().map(account_from_row).collect())
    }

    async fn list_accounts(&self, code: Option<&str>) -> Result<Vec<ChartOfAccount>> {
        let rows = match code {
            Some(code) => {
                sqlx::query(
                    "SELECT id, code, description, nature, classification, dept_status
                     FROM chart_of_accounts WHERE code = $1 ORDER BY code",
                )
                .bind(code)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT id, code, description, nature, classification, dept_status
                     FROM chart_of_accounts ORDER BY code",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .context("Failed to list chart of accounts")?;

        Ok(rows.iter().map(account_from_row).collect())
    }
}

#[async_trait::async_trait]
impl SavingsStore for PostgresStore {
    async fn count_tiers(&self) -> Result<i64> {
        self.count_rows("weekly_savings").await
    }

    async fn insert_tiers(&self, rows: Vec<WeeklySavingTier>) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        for tier in rows {
            sqlx::query(
                r#"
                INSERT INTO weekly_savings (id, range_amount_from, range_amount_to, weekly_savings_fund)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(tier.id)
            .bind(tier.range_amount_from)
            .bind(tier.range_amount_to)
            .bind(tier.weekly_savings_fund)
            .execute(&mut *tx)
            .await
            .context("Failed to insert weekly-savings tier")?;
        }

        tx.commit().await.context("Failed to commit weekly-savings insert")?;
        Ok(())
    }

    async fn list_tiers(&self) -> Result<Vec<WeeklySavingTier>> {
        let rows = sqlx::query(
            "SELECT id, range_amount_from, range_amount_to, weekly_savings_fund
             FROM weekly_savings ORDER BY range_amount_from",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list weekly-savings tiers")?;

        Ok(rows
            .into_iter()
            .map(|row| WeeklySavingTier {
                id: row.get("id"),
                range_amount_from: row.get("range_amount_from"),
                range_amount_to: row.get("range_amount_to"),
                weekly_savings_fund: row.get("weekly_savings_fund"),
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl SignatureStore for PostgresStore {
    async fn count_signature_params(&self) -> Result<i64> {
        self.count_rows("signature_params").await
    }

    async fn insert_signature_params(&self, rows: Vec<SignatureParam>) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        for param in rows {
            sqlx::query(
                r#"
                INSERT INTO signature_params (id, kind, approved_by, checked_by, received_by)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(param.id)
            .bind(param.kind.as_str())
            .bind(param.approved_by)
            .bind(param.checked_by)
            .bind(param.received_by)
            .execute(&mut *tx)
            .await
            .context("Failed to insert signature param")?;
        }

        tx.commit().await.context("Failed to commit signature-params insert")?;
        Ok(())
    }

    async fn list_signature_params(&self) -> Result<Vec<SignatureParam>> {
        let rows = sqlx::query(
            "SELECT id, kind, approved_by, checked_by, received_by
             FROM signature_params ORDER BY kind",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list signature params")?;

        rows.into_iter()
            .map(|row| {
                let kind: String = row.get("kind");
                Ok(SignatureParam {
                    id: row.get("id"),
                    kind: SignatureKind::from_str(&kind).map_err(|e| anyhow!(e))?,
                    approved_by: row.get("approved_by"),
                    checked_by: row.get("checked_by"),
                    received_by: row.get("received_by"),
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl EntryParamStore for PostgresStore {
    async fn count_entry_params(&self) -> Result<i64> {
        self.count_rows("loan_release_entry_params").await
    }

    async fn insert_entry_params(&self, rows: Vec<LoanReleaseEntryParam>) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        for param in rows {
            sqlx::query(
                r#"
                INSERT INTO loan_release_entry_params (id, code, label, account_id, sort)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(param.id)
            .bind(param.code)
            .bind(param.label)
            .bind(param.account_id)
            .bind(param.sort as i32)
            .execute(&mut *tx)
            .await
            .context("Failed to insert loan-release entry param")?;
        }

        tx.commit().await.context("Failed to commit entry-params insert")?;
        Ok(())
    }

    async fn list_entry_params(&self) -> Result<Vec<LoanReleaseEntryParam>> {
        let rows = sqlx::query(
            "SELECT id, code, label, account_id, sort
             FROM loan_release_entry_params ORDER BY sort",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list loan-release entry params")?;

        Ok(rows
            .into_iter()
            .map(|row| LoanReleaseEntryParam {
                id: row.get("id"),
                code: row.get("code"),
                label: row.get("label"),
                account_id: row.get("account_id"),
                sort: row.get::<i32, _>("sort") as u32,
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresStore {
    async fn live_superuser_exists(&self) -> Result<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(
                SELECT 1 FROM users WHERE role = $1 AND deleted_at IS NULL
             ) AS present",
        )
        .bind(Role::Superuser.as_str())
        .fetch_one(&self.pool)
        .await
        .context("Failed to check for a live superuser")?;

        Ok(row.get("present"))
    }

    async fn insert_user(&self, user: User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, username, password_hash, role, created_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(user.name)
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.deleted_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert user")?;

        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            "SELECT id, name, username, password_hash, role, created_at, deleted_at
             FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        rows.into_iter()
            .map(|row| {
                let role: String = row.get("role");
                Ok(User {
                    id: row.get("id"),
                    name: row.get("name"),
                    username: row.get("username"),
                    password_hash: row.get("password_hash"),
                    role: Role::from_str(&role).map_err(|e| anyhow!(e))?,
                    created_at: row.get("created_at"),
                    deleted_at: row.get("deleted_at"),
                })
            })
            .collect()
    }
}

impl Store for PostgresStore {}
