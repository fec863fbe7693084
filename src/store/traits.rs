use crate::model::{ChartOfAccount, LoanReleaseEntryParam, SignatureParam, User, WeeklySavingTier};
use anyhow::Result;

#[async_trait::async_trait]
pub trait ChartStore: Send + Sync {
    async fn count_accounts(&self) -> Result<i64>;
    async fn insert_accounts(&self, rows: Vec<ChartOfAccount>) -> Result<()>;
    /// Fetch the rows whose code appears in `codes`. Order is unspecified.
    async fn find_accounts_by_codes(&self, codes: &[String]) -> Result<Vec<ChartOfAccount>>;
    async fn list_accounts(&self, code: Option<&str>) -> Result<Vec<ChartOfAccount>>;
}

#[async_trait::async_trait]
pub trait SavingsStore: Send + Sync {
    async fn count_tiers(&self) -> Result<i64>;
    async fn insert_tiers(&self, rows: Vec<WeeklySavingTier>) -> Result<()>;
    async fn list_tiers(&self) -> Result<Vec<WeeklySavingTier>>;
}

#[async_trait::async_trait]
pub trait SignatureStore: Send + Sync {
    async fn count_signature_params(&self) -> Result<i64>;
    async fn insert_signature_params(&self, rows: Vec<SignatureParam>) -> Result<()>;
    /// List signature params ordered by their kind's wire name.
    async fn list_signature_params(&self) -> Result<Vec<SignatureParam>>;
}

#[async_trait::async_trait]
pub trait EntryParamStore: Send + Sync {
    async fn count_entry_params(&self) -> Result<i64>;
    async fn insert_entry_params(&self, rows: Vec<LoanReleaseEntryParam>) -> Result<()>;
    /// List entry params ordered by their `sort` column.
    async fn list_entry_params(&self) -> Result<Vec<LoanReleaseEntryParam>>;
}

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// True when a non-deleted superuser row exists. Soft-deleted
    /// predecessors do not count.
    async fn live_superuser_exists(&self) -> Result<bool>;
    async fn insert_user(&self, user: User) -> Result<()>;
    async fn list_users(&self) -> Result<Vec<User>>;
}

pub trait Store:
    ChartStore + SavingsStore + SignatureStore + EntryParamStore + UserStore + Send + Sync
{
}
