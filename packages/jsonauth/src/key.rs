//! Secret key storage

use crate::error::{TokenError, TokenResult};
use jsonauth_common::LoggingTransformer;
use std::fmt;
use zeroize::ZeroizeOnDrop;

/// HMAC secret, wiped from memory on drop
///
/// Never empty: construction fails with [`TokenError::MissingKey`] otherwise.
/// `Debug` prints a fingerprint instead of the key bytes.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Wrap raw key bytes
    ///
    /// # Errors
    /// Returns [`TokenError::MissingKey`] if `key` is empty.
    pub fn new(key: impl Into<Vec<u8>>) -> TokenResult<Self> {
        let bytes = key.into();
        if bytes.is_empty() {
            return Err(TokenError::MissingKey);
        }
        Ok(Self { bytes })
    }

    /// Raw key bytes
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; kept alongside `len` for API symmetry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Log-safe identifier for this key
    #[must_use]
    pub fn fingerprint(&self) -> String {
        LoggingTransformer::key_fingerprint(&self.bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("fingerprint", &self.fingerprint())
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = TokenError;

    fn try_from(key: &str) -> TokenResult<Self> {
        Self::new(key.as_bytes())
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = TokenError;

    fn try_from(key: &[u8]) -> TokenResult<Self> {
        Self::new(key)
    }
}

impl TryFrom<String> for SecretKey {
    type Error = TokenError;

    fn try_from(key: String) -> TokenResult<Self> {
        Self::new(key.into_bytes())
    }
}

impl TryFrom<Vec<u8>> for SecretKey {
    type Error = TokenError;

    fn try_from(key: Vec<u8>) -> TokenResult<Self> {
        Self::new(key)
    }
}
