use crate::bootstrap::error::BootstrapError;
use crate::store::traits::Store;

/// Point-in-time presence snapshot of the five bootstrap datasets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReport {
    pub chart_of_accounts: i64,
    pub weekly_savings: i64,
    pub entry_params: i64,
    pub signature_params: i64,
    pub live_superuser: bool,
}

/// Issue the five presence queries concurrently and wait for all of them.
/// `tokio::join!` (not `try_join!`) so one probe's failure never cancels
/// the others mid-flight; the first error is surfaced after every query
/// has finished. Read-only, no side effects.
pub async fn probe<S: Store>(store: &S) -> Result<ProbeReport, BootstrapError> {
    let (chart_of_accounts, weekly_savings, entry_params, signature_params, live_superuser) = tokio::join!(
        store.count_accounts(),
        store.count_tiers(),
        store.count_entry_params(),
        store.count_signature_params(),
        store.live_superuser_exists(),
    );

    Ok(ProbeReport {
        chart_of_accounts: chart_of_accounts.map_err(BootstrapError::Probe)?,
        weekly_savings: weekly_savings.map_err(BootstrapError::Probe)?,
        entry_params: entry_params.map_err(BootstrapError::Probe)?,
        signature_params: signature_params.map_err(BootstrapError::Probe)?,
        live_superuser: live_superuser.map_err(BootstrapError::Probe)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, User};
    use crate::store::memory::MemoryStore;
    use crate::store::traits::UserStore;

    #[tokio::test]
    async fn empty_store_reports_everything_missing() {
        let store = MemoryStore::new();
        let report = probe(&store).await.unwrap();

        assert_eq!(report.chart_of_accounts, 0);
        assert_eq!(report.weekly_savings, 0);
        assert_eq!(report.entry_params, 0);
        assert_eq!(report.signature_params, 0);
        assert!(!report.live_superuser);
    }

    #[tokio::test]
    async fn probe_sees_a_live_superuser() {
        let store = MemoryStore::new();
        store
            .insert_user(User::new(
                "Admin".to_string(),
                "admin".to_string(),
                "hash".to_string(),
                Role::Superuser,
            ))
            .await
            .unwrap();

        let report = probe(&store).await.unwrap();
        assert!(report.live_superuser);
    }
}
