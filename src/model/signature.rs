use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// The document kinds that carry a signature block. The bootstrap seeds one
/// SignatureParam per kind in a single batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureKind {
    LoanRelease,
    CashVoucher,
    CheckVoucher,
    JournalVoucher,
    OfficialReceipt,
    WeeklyCollection,
    PettyCash,
    Remittance,
}

impl SignatureKind {
    /// Every document kind, in the order the seed batch inserts them.
    pub const ALL: [SignatureKind; 8] = [
        SignatureKind::LoanRelease,
        SignatureKind::CashVoucher,
        SignatureKind::CheckVoucher,
        SignatureKind::JournalVoucher,
        SignatureKind::OfficialReceipt,
        SignatureKind::WeeklyCollection,
        SignatureKind::PettyCash,
        SignatureKind::Remittance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureKind::LoanRelease => "loan-release",
            SignatureKind::CashVoucher => "cash-voucher",
            SignatureKind::CheckVoucher => "check-voucher",
            SignatureKind::JournalVoucher => "journal-voucher",
            SignatureKind::OfficialReceipt => "official-receipt",
            SignatureKind::WeeklyCollection => "weekly-collection",
            SignatureKind::PettyCash => "petty-cash",
            SignatureKind::Remittance => "remittance",
        }
    }
}

impl std::str::FromStr for SignatureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown signature kind '{}'", s))
    }
}

/// Default signatory names printed on a document kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureParam {
    pub id: Id,
    pub kind: SignatureKind,
    pub approved_by: String,
    pub checked_by: String,
    pub received_by: Option<String>,
}

impl SignatureParam {
    pub fn new(
        kind: SignatureKind,
        approved_by: String,
        checked_by: String,
        received_by: Option<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            kind,
            approved_by,
            checked_by,
            received_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_as_kebab_case() {
        let value = serde_json::to_value(SignatureKind::LoanRelease).unwrap();
        assert_eq!(value, serde_json::json!("loan-release"));

        let back: SignatureKind = serde_json::from_value(value).unwrap();
        assert_eq!(back, SignatureKind::LoanRelease);
    }

    #[test]
    fn param_serializes_missing_receiver_as_null() {
        let param = SignatureParam::new(
            SignatureKind::JournalVoucher,
            "General Manager".to_string(),
            "Accountant".to_string(),
            None,
        );

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(value["kind"], "journal-voucher");
        assert_eq!(value["approved_by"], "General Manager");
        assert!(value["received_by"].is_null());
    }
}
