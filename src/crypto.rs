//! Password hashing.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::config::Argon2 as ArgonConfig;
use crate::error::{Result, ToInternal};
use crate::ports::Encrypter;

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),
}

/// Argon2id password hasher.
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Create a new [`Argon2Encrypter`].
    pub fn new(config: Option<ArgonConfig>) -> std::result::Result<Self, CryptoError> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'_> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Hash password using Argon2id.
    pub fn hash_password(
        &self,
        password: impl AsRef<[u8]>,
    ) -> std::result::Result<String, CryptoError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_ref(), &salt)
            .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(hash.to_string())
    }

    /// Check `password` against a PHC string produced by [`Self::hash_password`].
    #[cfg(test)]
    fn verify_password(
        &self,
        password: impl AsRef<[u8]>,
        hash: &str,
    ) -> std::result::Result<bool, CryptoError> {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        let parsed_hash = PasswordHash::new(hash)
            .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(self
            .argon2()
            .verify_password(password.as_ref(), &parsed_hash)
            .is_ok())
    }
}

impl Encrypter for Argon2Encrypter {
    fn encrypt(&self, value: &str) -> Result<String> {
        self.hash_password(value).catch()
    }
}
