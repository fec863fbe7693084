//! Seed executors, one per dataset. Failure policy differs per dataset and
//! is deliberate: chart of accounts and weekly savings are best-effort
//! (logged, swallowed, retried on next restart via the presence probe),
//! signature params propagate, the administrator seed is fatal.

use crate::bootstrap::credential::CredentialHasher;
use crate::bootstrap::data;
use crate::bootstrap::error::BootstrapError;
use crate::bootstrap::sheet;
use crate::config::AdminConfig;
use crate::model::{Role, User};
use crate::store::traits::Store;

/// Fixed display name of the bootstrap administrator.
pub const ADMIN_DISPLAY_NAME: &str = "System Administrator";

/// Load the reference sheet and bulk-insert it. Soft failure: a missing or
/// malformed sheet, or a failed insert, must not keep the service down.
pub async fn seed_chart_of_accounts<S: Store>(store: &S, sheet_path: &str) {
    match try_seed_chart(store, sheet_path).await {
        Ok(count) => log::info!("seeded {} chart-of-accounts rows from {}", count, sheet_path),
        Err(err) => log::warn!("chart-of-accounts seed skipped: {:#}", err),
    }
}

async fn try_seed_chart<S: Store>(store: &S, sheet_path: &str) -> anyhow::Result<usize> {
    let rows = sheet::load_chart_sheet(sheet_path)?;
    let count = rows.len();
    store.insert_accounts(rows).await?;
    Ok(count)
}

/// Insert the literal tier table. Same soft policy as the chart seed.
pub async fn seed_weekly_savings<S: Store>(store: &S) {
    let tiers = data::weekly_saving_tiers();
    let count = tiers.len();
    match store.insert_tiers(tiers).await {
        Ok(()) => log::info!("seeded {} weekly-saving tiers", count),
        Err(err) => log::warn!("weekly-savings seed skipped: {:#}", err),
    }
}

/// Insert the literal signature table. An insert failure propagates to the
/// sequencer instead of being swallowed.
pub async fn seed_signature_params<S: Store>(store: &S) -> Result<(), BootstrapError> {
    let params = data::signature_params();
    let count = params.len();
    store
        .insert_signature_params(params)
        .await
        .map_err(BootstrapError::SignatureSeed)?;

    log::info!("seeded {} signature params", count);
    Ok(())
}

/// Create the administrator account from the configured secrets. Invoked
/// only when the probe saw no live superuser. Any failure here is fatal:
/// the service must not come up without an administrative identity.
pub async fn seed_superuser<S, H>(
    store: &S,
    admin: &AdminConfig,
    hasher: &H,
) -> Result<(), BootstrapError>
where
    S: Store,
    H: CredentialHasher + ?Sized,
{
    let username = admin
        .username()
        .ok_or(BootstrapError::MissingAdminCredentials)?;
    let password = admin
        .password()
        .ok_or(BootstrapError::MissingAdminCredentials)?;

    let password_hash = hasher.hash(&password).map_err(BootstrapError::AdminSeed)?;
    let user = User::new(
        ADMIN_DISPLAY_NAME.to_string(),
        username,
        password_hash,
        Role::Superuser,
    );

    store
        .insert_user(user)
        .await
        .map_err(BootstrapError::AdminSeed)?;

    log::info!("created administrator account");
    Ok(())
}
