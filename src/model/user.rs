use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superuser,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superuser => "superuser",
            Role::Staff => "staff",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superuser" => Ok(Role::Superuser),
            "staff" => Ok(Role::Staff),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// A back-office account. The bootstrap only ever creates the administrator
/// (role = Superuser), and only when no live one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub username: String,
    /// Salted hash; plaintext never touches the store.
    pub password_hash: String,
    pub role: Role,
    pub created_at: String, // ISO 8601 timestamp
    /// Soft-delete marker. A row is "live" while this is None.
    pub deleted_at: Option<String>,
}

impl User {
    pub fn new(name: String, username: String, password_hash: String, role: Role) -> Self {
        Self {
            id: generate_id(),
            name,
            username,
            password_hash,
            role,
            created_at: chrono::Utc::now().to_rfc3339(),
            deleted_at: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}
