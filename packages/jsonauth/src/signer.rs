//! HMAC signing for the data segment

use crate::{
    algorithm::Algorithm,
    config::TokenConfig,
    error::{TokenError, TokenResult},
    key::SecretKey,
};
use hmac::{
    digest::{KeyInit, Mac},
    Hmac,
};
use jsonauth_common::LoggingTransformer;
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Signature algorithm interface.
///
/// Produces and checks the hex signature segment of a token. Implementations
/// must be thread-safe (Send + Sync).
pub trait Signer: Send + Sync {
    /// Hash function this signer uses
    fn algorithm(&self) -> Algorithm;

    /// Log-safe identifier of the signing key
    fn key_fingerprint(&self) -> &str;

    /// Sign `input`, returning the lowercase hex signature
    ///
    /// # Errors
    /// Returns a [`TokenError`] if the MAC cannot be computed.
    fn sign(&self, input: &[u8]) -> TokenResult<String>;

    /// Check `signature` against `input` in constant time
    ///
    /// # Errors
    /// Returns a [`TokenError`] if the expected signature cannot be computed.
    fn verify(&self, input: &[u8], signature: &str) -> TokenResult<bool> {
        let expected = self.sign(input)?;
        Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
    }
}

/// Implementation of Signer for Arc<T> to allow shared ownership.
impl<T: Signer + ?Sized> Signer for std::sync::Arc<T> {
    fn algorithm(&self) -> Algorithm {
        (**self).algorithm()
    }

    fn key_fingerprint(&self) -> &str {
        (**self).key_fingerprint()
    }

    fn sign(&self, input: &[u8]) -> TokenResult<String> {
        (**self).sign(input)
    }

    fn verify(&self, input: &[u8], signature: &str) -> TokenResult<bool> {
        (**self).verify(input, signature)
    }
}

/// HMAC signer keyed by a [`SecretKey`]
#[derive(Debug, Clone)]
pub struct HmacSigner {
    algorithm: Algorithm,
    key: SecretKey,
    fingerprint: String,
}

impl HmacSigner {
    /// Create a signer from raw key bytes
    ///
    /// # Errors
    /// Returns [`TokenError::MissingKey`] if `key` is empty.
    pub fn new(algorithm: Algorithm, key: impl Into<Vec<u8>>) -> TokenResult<Self> {
        Ok(Self::from_key(algorithm, SecretKey::new(key)?))
    }

    /// Create a signer from a validated configuration
    #[must_use]
    pub fn from_config(config: TokenConfig) -> Self {
        let (algorithm, key) = config.into_parts();
        Self::from_key(algorithm, key)
    }

    fn from_key(algorithm: Algorithm, key: SecretKey) -> Self {
        let fingerprint = key.fingerprint();
        Self {
            algorithm,
            key,
            fingerprint,
        }
    }
}

impl Signer for HmacSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn key_fingerprint(&self) -> &str {
        &self.fingerprint
    }

    fn sign(&self, input: &[u8]) -> TokenResult<String> {
        let key = self.key.expose();
        match self.algorithm {
            Algorithm::Sha256 => mac_hex::<HmacSha256>(key, input),
            Algorithm::Sha384 => mac_hex::<HmacSha384>(key, input),
            Algorithm::Sha512 => mac_hex::<HmacSha512>(key, input),
        }
    }
}

fn mac_hex<M: Mac + KeyInit>(key: &[u8], input: &[u8]) -> TokenResult<String> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|e| {
        LoggingTransformer::log_crypto_error("hmac key setup", &e);
        TokenError::InvalidKey(e.to_string())
    })?;
    mac.update(input);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
