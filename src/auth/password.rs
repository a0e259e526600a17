//! # Password Hashing
//!
//! Passwords are never stored or compared in plaintext. The auth service only
//! sees the [`PasswordHasher`] trait, so the algorithm can be swapped without
//! touching signup or login.

use crate::error::{AppError, AppResult};

/// One-way, salted password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash `plain` with a fresh salt; the digest embeds everything `verify` needs
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// Check `plain` against a digest produced by `hash`
    ///
    /// Malformed digests verify as false.
    fn verify(&self, plain: &str, digest: &str) -> bool;
}

/// bcrypt with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, plain: &str, digest: &str) -> bool {
        bcrypt::verify(plain, digest).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let hasher = BcryptHasher::new(4);
        let first = hasher.hash("password").unwrap();
        let second = hasher.hash("password").unwrap();

        assert_ne!(first, "password");
        assert_ne!(first, second);
        assert!(hasher.verify("password", &first));
        assert!(hasher.verify("password", &second));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hasher = BcryptHasher::new(4);
        let digest = hasher.hash("password").unwrap();
        assert!(!hasher.verify("Password", &digest));
    }

    #[test]
    fn garbage_digest_does_not_verify() {
        let hasher = BcryptHasher::new(4);
        assert!(!hasher.verify("password", "not-a-bcrypt-hash"));
    }

    #[test]
    fn invalid_cost_is_an_error() {
        let hasher = BcryptHasher::new(99);
        assert!(matches!(hasher.hash("password"), Err(AppError::Internal(_))));
    }
}
