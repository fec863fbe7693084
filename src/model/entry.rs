use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// One line of the loan-release entry screen, derived at bootstrap from the
/// chart of accounts. `sort` is the 1-based position of the code in the
/// static required-code list, never the order the store returned rows in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanReleaseEntryParam {
    pub id: Id,
    /// Matches a ChartOfAccount code.
    pub code: String,
    /// Human caption shown on the entry screen.
    pub label: String,
    /// Id of the matched ChartOfAccount row.
    pub account_id: Id,
    pub sort: u32,
}

impl LoanReleaseEntryParam {
    pub fn new(code: String, label: String, account_id: Id, sort: u32) -> Self {
        Self {
            id: generate_id(),
            code,
            label,
            account_id,
            sort,
        }
    }
}
