use crate::error::{AccountError, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher as Argon2PasswordHasher, SaltString},
    Algorithm, Argon2, ParamsBuilder, Version,
};
use rand::Rng;

/// A freshly hashed credential: the salt and the derived hash, both
/// stored on the user record.
#[derive(Debug, Clone)]
pub struct HashedCredential {
    pub salt: String,
    pub hash: String,
}

/// Password hasher using Argon2id
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with recommended parameters
    /// Memory: 19456 KiB (19 MiB)
    /// Iterations: 2
    /// Parallelism: 1
    pub fn new() -> Self {
        let params = ParamsBuilder::new()
            .m_cost(19456)
            .t_cost(2)
            .p_cost(1)
            .build()
            .expect("Failed to build Argon2 parameters");

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        Self { argon2 }
    }

    /// Hash a password with a freshly generated salt.
    pub fn hash(&self, password: &str) -> Result<HashedCredential> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hash(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(HashedCredential {
            salt: salt.as_str().to_string(),
            hash,
        })
    }

    /// Re-hash a password with a stored salt. Deterministic for a given
    /// salt, so the result can be compared against the stored hash.
    pub fn hash_with_salt(&self, password: &str, salt: &str) -> Result<String> {
        let salt = SaltString::from_b64(salt)
            .map_err(|e| AccountError::Hash(format!("Invalid stored salt: {}", e)))?;

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hash(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify a password by re-hashing with the stored salt and comparing
    /// to the stored hash.
    pub fn verify(&self, password: &str, salt: &str, expected_hash: &str) -> Result<bool> {
        let hash = self.hash_with_salt(password, salt)?;
        Ok(hash == expected_hash)
    }
}

/// Generate a random alphanumeric temporary password.
pub fn generate_temp_password(len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
