//! Literal seed tables. These are build-time constants; the loaders insert
//! them verbatim and only ever check presence, not content.

use crate::model::{SignatureKind, SignatureParam, WeeklySavingTier};

/// The ordered required-code list for loan-release entry params. Every code
/// must resolve against the chart of accounts; `sort` on the produced rows
/// is the 1-based position in this list.
pub const REQUIRED_ENTRY_CODES: [(&str, &str); 8] = [
    ("1010", "Loans Receivable"),
    ("1020", "Cash on Hand"),
    ("2010", "Client Savings Fund"),
    ("2020", "Insurance Fund"),
    ("4010", "Interest Income"),
    ("4020", "Service Fee"),
    ("4030", "Filing Fee"),
    ("4040", "Notarial Fee"),
];

/// Weekly-savings fund per loan-principal range, inclusive bounds.
pub fn weekly_saving_tiers() -> Vec<WeeklySavingTier> {
    [
        (1_000.0, 5_000.0, 15.0),
        (5_001.0, 10_000.0, 20.0),
        (10_001.0, 15_000.0, 25.0),
        (15_001.0, 20_000.0, 30.0),
        (20_001.0, 25_000.0, 35.0),
        (25_001.0, 30_000.0, 40.0),
        (30_001.0, 35_000.0, 45.0),
        (35_001.0, 40_000.0, 50.0),
        (40_001.0, 45_000.0, 55.0),
        (45_001.0, 50_000.0, 60.0),
        (50_001.0, 55_000.0, 65.0),
        (55_001.0, 60_000.0, 70.0),
        (60_001.0, 65_000.0, 75.0),
        (65_001.0, 70_000.0, 80.0),
    ]
    .into_iter()
    .map(|(from, to, fund)| WeeklySavingTier::new(from, to, fund))
    .collect()
}

/// Default signatories per document kind, one row per kind.
pub fn signature_params() -> Vec<SignatureParam> {
    let row = |kind, approved: &str, checked: &str, received: Option<&str>| {
        SignatureParam::new(
            kind,
            approved.to_string(),
            checked.to_string(),
            received.map(str::to_string),
        )
    };

    vec![
        row(SignatureKind::LoanRelease, "General Manager", "Branch Manager", Some("Client")),
        row(SignatureKind::CashVoucher, "General Manager", "Accountant", Some("Payee")),
        row(SignatureKind::CheckVoucher, "General Manager", "Accountant", Some("Payee")),
        row(SignatureKind::JournalVoucher, "General Manager", "Accountant", None),
        row(SignatureKind::OfficialReceipt, "Branch Manager", "Cashier", None),
        row(SignatureKind::WeeklyCollection, "Branch Manager", "Account Officer", Some("Cashier")),
        row(SignatureKind::PettyCash, "Branch Manager", "Bookkeeper", Some("Custodian")),
        row(SignatureKind::Remittance, "General Manager", "Cashier", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fourteen_weekly_saving_tiers() {
        assert_eq!(weekly_saving_tiers().len(), 14);
    }

    #[test]
    fn one_signature_row_per_document_kind() {
        let params = signature_params();
        assert_eq!(params.len(), SignatureKind::ALL.len());

        let kinds: HashSet<_> = params.iter().map(|p| p.kind).collect();
        assert_eq!(kinds.len(), SignatureKind::ALL.len());
    }

    #[test]
    fn required_entry_codes_are_distinct() {
        let codes: HashSet<_> = REQUIRED_ENTRY_CODES.iter().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), REQUIRED_ENTRY_CODES.len());
    }
}
