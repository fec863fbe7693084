use anyhow::Result;
use parking_lot::RwLock;

use crate::model::{
    ChartOfAccount, LoanReleaseEntryParam, Role, SignatureParam, User, WeeklySavingTier,
};
use crate::store::traits::{
    ChartStore, EntryParamStore, SavingsStore, SignatureStore, Store, UserStore,
};

/// In-memory store used by tests and local runs without a database. Same
/// contract as PostgresStore; rows live in plain vectors behind locks.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<ChartOfAccount>>,
    tiers: RwLock<Vec<WeeklySavingTier>>,
    signature_params: RwLock<Vec<SignatureParam>>,
    entry_params: RwLock<Vec<LoanReleaseEntryParam>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ChartStore for MemoryStore {
    async fn count_accounts(&self) -> Result<i64> {
        Ok(self.accounts.read().len() as i64)
    }

    async fn insert_accounts(&self, rows: Vec<ChartOfAccount>) -> Result<()> {
        self.accounts.write().extend(rows);
        Ok(())
    }

    async fn find_accounts_by_codes(&self, codes: &[String]) -> Result<Vec<ChartOfAccount>> {
        Ok(self
            .accounts
            .read()
            .iter()
            .filter(|account| codes.contains(&account.code))
            .cloned()
            .collect())
    }

    async fn list_accounts(&self, code: Option<&str>) -> Result<Vec<ChartOfAccount>> {
        let mut rows: Vec<ChartOfAccount> = self
            .accounts
            .read()
            .iter()
            .filter(|account| code.map_or(true, |c| account.code == c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl SavingsStore for MemoryStore {
    async fn count_tiers(&self) -> Result<i64> {
        Ok(self.tiers.read().len() as i64)
    }

    async fn insert_tiers(&self, rows: Vec<WeeklySavingTier>) -> Result<()> {
        self.tiers.write().extend(rows);
        Ok(())
    }

    async fn list_tiers(&self) -> Result<Vec<WeeklySavingTier>> {
        let mut rows = self.tiers.read().clone();
        rows.sort_by(|a, b| a.range_amount_from.total_cmp(&b.range_amount_from));
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl SignatureStore for MemoryStore {
    async fn count_signature_params(&self) -> Result<i64> {
        Ok(self.signature_params.read().len() as i64)
    }

    async fn insert_signature_params(&self, rows: Vec<SignatureParam>) -> Result<()> {
        self.signature_params.write().extend(rows);
        Ok(())
    }

    async fn list_signature_params(&self) -> Result<Vec<SignatureParam>> {
        let mut rows = self.signature_params.read().clone();
        rows.sort_by_key(|param| param.kind.as_str());
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl EntryParamStore for MemoryStore {
    async fn count_entry_params(&self) -> Result<i64> {
        Ok(self.entry_params.read().len() as i64)
    }

    async fn insert_entry_params(&self, rows: Vec<LoanReleaseEntryParam>) -> Result<()> {
        self.entry_params.write().extend(rows);
        Ok(())
    }

    async fn list_entry_params(&self) -> Result<Vec<LoanReleaseEntryParam>> {
        let mut rows = self.entry_params.read().clone();
        rows.sort_by_key(|param| param.sort);
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryStore {
    async fn live_superuser_exists(&self) -> Result<bool> {
        Ok(self
            .users
            .read()
            .iter()
            .any(|user| user.role == Role::Superuser && user.is_live()))
    }

    async fn insert_user(&self, user: User) -> Result<()> {
        self.users.write().push(user);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().clone())
    }
}

impl Store for MemoryStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn superuser_check_ignores_soft_deleted_rows() {
        let store = MemoryStore::new();

        let mut deleted = User::new(
            "Old Admin".to_string(),
            "old-admin".to_string(),
            "hash".to_string(),
            Role::Superuser,
        );
        deleted.deleted_at = Some(chrono::Utc::now().to_rfc3339());
        store.insert_user(deleted).await.unwrap();

        assert!(!store.live_superuser_exists().await.unwrap());

        store
            .insert_user(User::new(
                "Admin".to_string(),
                "admin".to_string(),
                "hash".to_string(),
                Role::Superuser,
            ))
            .await
            .unwrap();

        assert!(store.live_superuser_exists().await.unwrap());
    }

    #[tokio::test]
    async fn signature_params_come_back_ordered_by_kind() {
        use crate::model::{SignatureKind, SignatureParam};

        let store = MemoryStore::new();
        store
            .insert_signature_params(vec![
                SignatureParam::new(
                    SignatureKind::Remittance,
                    "General Manager".to_string(),
                    "Cashier".to_string(),
                    None,
                ),
                SignatureParam::new(
                    SignatureKind::CashVoucher,
                    "General Manager".to_string(),
                    "Accountant".to_string(),
                    None,
                ),
            ])
            .await
            .unwrap();

        // Same contract as the SQL store: ordered by the kind's wire name.
        let rows = store.list_signature_params().await.unwrap();
        assert_eq!(rows[0].kind, SignatureKind::CashVoucher);
        assert_eq!(rows[1].kind, SignatureKind::Remittance);
    }

    #[tokio::test]
    async fn entry_params_come_back_in_sort_order() {
        let store = MemoryStore::new();

        store
            .insert_entry_params(vec![
                LoanReleaseEntryParam::new("B".into(), "Beta".into(), "id-b".into(), 2),
                LoanReleaseEntryParam::new("A".into(), "Alpha".into(), "id-a".into(), 1),
            ])
            .await
            .unwrap();

        let rows = store.list_entry_params().await.unwrap();
        assert_eq!(rows[0].code, "A");
        assert_eq!(rows[1].code, "B");
    }
}
