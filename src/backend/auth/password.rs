//! Password Hashing
//!
//! bcrypt wrapper with a tunable work factor. Hashing embeds a random salt,
//! so two hashes of the same password differ; verification recomputes with
//! the embedded salt and compares in constant time.

use bcrypt::BcryptError;

/// Default bcrypt cost factor.
///
/// Overridable per deployment via `BCRYPT_COST`.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Password hasher with a fixed work factor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password.
    ///
    /// The result embeds the salt and the cost factor, so it is
    /// self-describing for later verification.
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `false` for a mismatch and for any malformed hash input.
    /// Signin passes attacker-controlled data through here, so this never
    /// errors or panics.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("password verification on malformed hash: {e}");
                false
            }
        }
    }
}
