use thiserror::Error;

/// Failures that abort startup. Soft seed failures (chart of accounts,
/// weekly savings) never reach this type; they are logged and swallowed
/// inside their executors, and the next restart retries them because the
/// presence probe still reports the dataset missing.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("existence probe failed")]
    Probe(#[source] anyhow::Error),

    /// Signature-params inserts propagate unmasked, unlike the other two
    /// literal-table seeds. See DESIGN.md for why the asymmetry is kept.
    #[error("signature-params seed failed")]
    SignatureSeed(#[source] anyhow::Error),

    #[error("loan-release entry params unresolvable: {found} of {expected} required chart-of-account codes matched")]
    EntryParamMismatch { expected: usize, found: usize },

    #[error("entry-params lookup failed")]
    EntryLookup(#[source] anyhow::Error),

    #[error("entry-params seed failed")]
    EntrySeed(#[source] anyhow::Error),

    #[error("administrator credentials missing: set BACKOFFICE_ADMIN_USERNAME and BACKOFFICE_ADMIN_PASSWORD")]
    MissingAdminCredentials,

    #[error("administrator seed failed")]
    AdminSeed(#[source] anyhow::Error),
}
