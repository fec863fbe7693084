//! Derivation resolver: builds the loan-release entry params by joining the
//! required-code list against the chart of accounts. The join is transient;
//! only the derived rows are persisted.

use std::collections::HashMap;

use crate::bootstrap::data::REQUIRED_ENTRY_CODES;
use crate::bootstrap::error::BootstrapError;
use crate::model::LoanReleaseEntryParam;
use crate::store::traits::Store;

/// Resolve every required code against the chart of accounts and insert the
/// derived rows in one batch. Hard invariant: matched-row count must equal
/// the required-code count exactly. A mismatch means the chart is
/// misconfigured for the loan-release entry screens, which is fatal, and
/// nothing is inserted (all-or-nothing).
pub async fn seed_entry_params<S: Store>(store: &S) -> Result<(), BootstrapError> {
    let codes: Vec<String> = REQUIRED_ENTRY_CODES
        .iter()
        .map(|(code, _)| code.to_string())
        .collect();

    let matched = store
        .find_accounts_by_codes(&codes)
        .await
        .map_err(BootstrapError::EntryLookup)?;

    if matched.len() != REQUIRED_ENTRY_CODES.len() {
        return Err(BootstrapError::EntryParamMismatch {
            expected: REQUIRED_ENTRY_CODES.len(),
            found: matched.len(),
        });
    }

    let by_code: HashMap<&str, &crate::model::ChartOfAccount> =
        matched.iter().map(|account| (account.code.as_str(), account)).collect();

    // sort is the 1-based position in the static list, independent of the
    // order the store returned rows in.
    let mut rows = Vec::with_capacity(REQUIRED_ENTRY_CODES.len());
    for (position, (code, label)) in REQUIRED_ENTRY_CODES.iter().enumerate() {
        let account = by_code
            .get(code)
            .ok_or(BootstrapError::EntryParamMismatch {
                expected: REQUIRED_ENTRY_CODES.len(),
                found: by_code.len(),
            })?;

        rows.push(LoanReleaseEntryParam::new(
            code.to_string(),
            label.to_string(),
            account.id.clone(),
            (position + 1) as u32,
        ));
    }

    store
        .insert_entry_params(rows)
        .await
        .map_err(BootstrapError::EntrySeed)?;

    log::info!(
        "seeded {} loan-release entry params",
        REQUIRED_ENTRY_CODES.len()
    );
    Ok(())
}
