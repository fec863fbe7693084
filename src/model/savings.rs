use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// A weekly-savings tier: loans whose principal falls inside the inclusive
/// range pay the given weekly savings fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySavingTier {
    pub id: Id,
    pub range_amount_from: f64,
    pub range_amount_to: f64,
    pub weekly_savings_fund: f64,
}

impl WeeklySavingTier {
    pub fn new(range_amount_from: f64, range_amount_to: f64, weekly_savings_fund: f64) -> Self {
        Self {
            id: generate_id(),
            range_amount_from,
            range_amount_to,
            weekly_savings_fund,
        }
    }
}
