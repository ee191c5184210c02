use std::str::FromStr;

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// How `POST /users` turns the submitted password into the stored value.
///
/// Both forms land in the same `password` column, so a database written
/// under one policy is not readable as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordPolicy {
    /// Argon2id PHC string with a random salt.
    #[default]
    Hashed,
    /// Stored exactly as submitted. Legacy behaviour, insecure.
    Plaintext,
}

#[derive(Debug, Error)]
#[error("unknown password storage '{0}' (expected 'hashed' or 'plaintext')")]
pub struct UnknownPasswordPolicy(String);

impl FromStr for PasswordPolicy {
    type Err = UnknownPasswordPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashed" | "argon2" => Ok(Self::Hashed),
            "plaintext" | "plain" => Ok(Self::Plaintext),
            _ => Err(UnknownPasswordPolicy(s.to_string())),
        }
    }
}

impl PasswordPolicy {
    /// Value to persist for `password`. Hashing is CPU-bound; call this from
    /// a blocking context.
    pub fn prepare(self, password: &str) -> anyhow::Result<String> {
        match self {
            Self::Hashed => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))?;
                Ok(hash.to_string())
            }
            Self::Plaintext => Ok(password.to_string()),
        }
    }
}
