//! Startup bootstrap: brings the reference datasets (chart of accounts,
//! weekly-saving tiers, loan-release entry params, signature params) and the
//! administrator account from "possibly absent" to "present and consistent".
//! Runs exactly once per process, right after the store connection is
//! established, and is safe to re-run on every restart because every seed is
//! guarded by a presence probe.

pub mod credential;
pub mod data;
pub mod error;
pub mod executors;
pub mod plan;
pub mod probe;
pub mod resolver;
pub mod sequencer;
pub mod sheet;

pub use credential::{CredentialHasher, Sha256Hasher};
pub use error::BootstrapError;
pub use plan::{plan, SeedAction};
pub use probe::{probe, ProbeReport};
pub use sequencer::{ensure_reference_data, BootstrapSequencer, Phase};
