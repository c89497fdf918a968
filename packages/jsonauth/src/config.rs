//! Token configuration
//!
//! [`TokenConfig`] is the immutable `{algorithm, key}` pair a codec is built
//! from. It is produced once by [`TokenConfigBuilder`] and never changes
//! afterwards.

use crate::{
    algorithm::Algorithm,
    error::{TokenError, TokenResult},
    key::SecretKey,
};
use std::fmt;
use zeroize::Zeroizing;

/// Validated signing configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    algorithm: Algorithm,
    key: SecretKey,
}

impl TokenConfig {
    /// Start building a configuration
    #[must_use]
    pub fn builder() -> TokenConfigBuilder {
        TokenConfigBuilder::new()
    }

    /// Configuration with the default algorithm (SHA-512)
    ///
    /// # Errors
    /// Returns [`TokenError::MissingKey`] if `key` is empty.
    pub fn new(key: impl Into<Vec<u8>>) -> TokenResult<Self> {
        Self::builder().with_secret(key).build()
    }

    /// Configured hash function
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Configured secret key
    #[must_use]
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    pub(crate) fn into_parts(self) -> (Algorithm, SecretKey) {
        (self.algorithm, self.key)
    }
}

/// Builder for [`TokenConfig`]
///
/// The pending secret is wiped on drop and never shown by `Debug`.
#[derive(Default)]
pub struct TokenConfigBuilder {
    algorithm: Option<Algorithm>,
    secret: Option<Zeroizing<Vec<u8>>>,
}

impl fmt::Debug for TokenConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfigBuilder")
            .field("algorithm", &self.algorithm)
            .field("secret_set", &self.secret.is_some())
            .finish()
    }
}

impl TokenConfigBuilder {
    /// Create new builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hash function
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the hash function by name (`"sha512"`, `"SHA-256"`, ...)
    ///
    /// # Errors
    /// Returns [`TokenError::UnsupportedAlgorithm`] for unknown names.
    pub fn with_algorithm_name(self, name: &str) -> TokenResult<Self> {
        Ok(self.with_algorithm(name.parse()?))
    }

    /// Set the secret key
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(Zeroizing::new(secret.into()));
        self
    }

    /// Validate and freeze the configuration
    ///
    /// # Errors
    /// Returns [`TokenError::MissingKey`] if no secret was set or it is empty.
    pub fn build(self) -> TokenResult<TokenConfig> {
        let mut secret = self.secret.ok_or(TokenError::MissingKey)?;
        // move the bytes into the key; the emptied wrapper is wiped on drop
        let key = SecretKey::new(std::mem::take(&mut *secret))?;
        Ok(TokenConfig {
            algorithm: self.algorithm.unwrap_or_default(),
            key,
        })
    }
}
