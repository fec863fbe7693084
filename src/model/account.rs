use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// One row of the chart of accounts. Loaded once from the reference sheet
/// at bootstrap and never mutated by this subsystem afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOfAccount {
    pub id: Id,
    /// Business key. Uniqueness is expected from the reference sheet but
    /// not enforced by the loader.
    pub code: String,
    pub description: String,
    pub nature: String,
    pub classification: String,
    pub dept_status: String,
}

impl ChartOfAccount {
    pub fn new(
        code: String,
        description: String,
        nature: String,
        classification: String,
        dept_status: String,
    ) -> Self {
        Self {
            id: generate_id(),
            code,
            description,
            nature,
            classification,
            dept_status,
        }
    }
}
