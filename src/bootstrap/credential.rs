use anyhow::Result;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Scoped credential-hashing seam. The administrator seed is the only
/// caller; hashing internals stay swappable behind this trait.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String>;
}

/// Salted SHA-256, `salt$digest` with both halves hex/simple-encoded.
#[derive(Debug, Default)]
pub struct Sha256Hasher;

impl CredentialHasher for Sha256Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = Uuid::new_v4().simple().to_string();
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(plaintext.as_bytes());
        Ok(format!("{}${}", salt, hex::encode(hasher.finalize())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted() {
        let hasher = Sha256Hasher;
        let first = hasher.hash("hunter2").unwrap();
        let second = hasher.hash("hunter2").unwrap();

        assert_ne!(first, second);
        assert!(first.contains('$'));
        assert!(!first.contains("hunter2"));
    }
}
