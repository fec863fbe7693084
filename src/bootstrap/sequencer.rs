use crate::bootstrap::credential::CredentialHasher;
use crate::bootstrap::error::BootstrapError;
use crate::bootstrap::executors;
use crate::bootstrap::plan::{plan, SeedAction};
use crate::bootstrap::probe::probe;
use crate::bootstrap::resolver;
use crate::config::AppConfig;
use crate::store::traits::Store;

/// Lifecycle of a single bootstrap pass. `Aborted` is terminal and is
/// entered from `Seeding` only by the derivation resolver's invariant
/// violation or the administrator seed failing; every other failure either
/// stays inside its executor (soft) or is returned without the abort
/// transition (probe errors, signature-params inserts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Disconnected,
    Connected,
    Probing,
    Planning,
    Seeding,
    Ready,
    Aborted,
}

/// Drives one probe → plan → seed pass. Construct, `run()` once, drop.
pub struct BootstrapSequencer<'a, S, H>
where
    S: Store,
    H: CredentialHasher + ?Sized,
{
    store: &'a S,
    config: &'a AppConfig,
    hasher: &'a H,
    phase: Phase,
}

impl<'a, S, H> BootstrapSequencer<'a, S, H>
where
    S: Store,
    H: CredentialHasher + ?Sized,
{
    pub fn new(store: &'a S, config: &'a AppConfig, hasher: &'a H) -> Self {
        Self {
            store,
            config,
            hasher,
            phase: Phase::Disconnected,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub async fn run(&mut self) -> Result<(), BootstrapError> {
        self.phase = Phase::Connected;

        self.phase = Phase::Probing;
        let report = probe(self.store).await?;

        self.phase = Phase::Planning;
        let actions = plan(&report);
        if actions.is_empty() {
            self.phase = Phase::Ready;
            log::info!("reference data and administrator identity already present");
            return Ok(());
        }
        log::info!("bootstrap plan: {:?}", actions);

        self.phase = Phase::Seeding;
        for action in actions {
            match action {
                SeedAction::ChartOfAccounts => {
                    // Awaited to completion before the resolver runs; the
                    // entry-params read must observe this insert.
                    executors::seed_chart_of_accounts(
                        self.store,
                        &self.config.bootstrap.chart_of_accounts_path,
                    )
                    .await;
                }
                SeedAction::EntryParams => {
                    if let Err(err) = resolver::seed_entry_params(self.store).await {
                        self.phase = Phase::Aborted;
                        return Err(err);
                    }
                }
                SeedAction::WeeklySavings => {
                    executors::seed_weekly_savings(self.store).await;
                }
                SeedAction::SignatureParams => {
                    executors::seed_signature_params(self.store).await?;
                }
                SeedAction::SuperuserAccount => {
                    if let Err(err) =
                        executors::seed_superuser(self.store, &self.config.admin, self.hasher)
                            .await
                    {
                        self.phase = Phase::Aborted;
                        return Err(err);
                    }
                }
            }
        }

        self.phase = Phase::Ready;
        log::info!("reference data and administrator identity present; bootstrap complete");
        Ok(())
    }
}

/// The one operation this subsystem exposes: run the bootstrap pass once,
/// before the application starts accepting requests. A returned error means
/// startup must not proceed; the caller owns process termination.
pub async fn ensure_reference_data<S: Store>(
    store: &S,
    config: &AppConfig,
    hasher: &dyn CredentialHasher,
) -> Result<(), BootstrapError> {
    let mut sequencer = BootstrapSequencer::new(store, config, hasher);
    sequencer.run().await
}
