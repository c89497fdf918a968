//! Token encoding and verification
//!
//! A token is two segments joined by `.`:
//!
//! ```text
//! base64url(json(payload)) . hex(hmac(segment1, key))
//! ```
//!
//! Decoding checks the signature over the first segment before anything in
//! it is decoded, and fails on mismatch without returning any payload data.

use crate::{
    algorithm::Algorithm,
    base64url,
    config::TokenConfig,
    error::{TokenError, TokenResult},
    payload::{self, Payload},
    signer::{HmacSigner, Signer},
};
use jsonauth_common::LoggingTransformer;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Separator between the data and signature segments
pub const SEGMENT_DELIMITER: char = '.';

/// Stateless token encoder/decoder
///
/// Holds only the signer, which is immutable after construction, so one
/// instance can be shared across threads (for example behind an `Arc`) and
/// used concurrently.
///
/// # Example
///
/// ```
/// use jsonauth::JsonAuth;
/// use serde_json::json;
///
/// let auth = JsonAuth::new("1234")?;
/// let token = auth.encode(&json!({"key": "value", "key2": "value2"}))?;
/// assert!(token.starts_with("eyJrZXkiOiJ2YWx1ZSIsImtleTIiOiJ2YWx1ZTIifQ."));
///
/// let payload = auth.decode(&token)?;
/// assert_eq!(payload["key2"], "value2");
/// # Ok::<(), jsonauth::TokenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonAuth<S = HmacSigner> {
    signer: S,
}

impl JsonAuth<HmacSigner> {
    /// HMAC-SHA512 codec for `key`
    ///
    /// # Errors
    /// Returns [`TokenError::MissingKey`] if `key` is empty.
    pub fn new(key: impl Into<Vec<u8>>) -> TokenResult<Self> {
        Ok(Self::from_config(TokenConfig::new(key)?))
    }

    /// Codec for a prepared configuration
    #[must_use]
    pub fn from_config(config: TokenConfig) -> Self {
        Self::with_signer(HmacSigner::from_config(config))
    }
}

impl<S: Signer> JsonAuth<S> {
    /// Codec around a custom signer
    #[must_use]
    pub fn with_signer(signer: S) -> Self {
        Self { signer }
    }

    /// The signer used for both directions
    #[must_use]
    pub fn signer(&self) -> &S {
        &self.signer
    }

    /// Hash function used for signatures
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.signer.algorithm()
    }

    /// Fingerprint of the signing key, as it appears in log events
    #[must_use]
    pub fn key_fingerprint(&self) -> &str {
        self.signer.key_fingerprint()
    }

    /// Serialize and sign `payload`
    ///
    /// # Errors
    /// Returns [`TokenError::InvalidPayload`] if `payload` does not serialize
    /// to a JSON object, or a signer error if the MAC cannot be computed.
    pub fn encode<T: Serialize + ?Sized>(&self, payload: &T) -> TokenResult<String> {
        let json = payload::serialize(payload)?;
        let data = base64url::encode(&json);
        let signature = self.signer.sign(data.as_bytes())?;

        debug!(
            algorithm = %self.signer.algorithm(),
            payload_bytes = json.len(),
            "token encoded"
        );
        LoggingTransformer::log_token_event("encode", self.signer.key_fingerprint(), true);

        let mut token = String::with_capacity(data.len() + 1 + signature.len());
        token.push_str(&data);
        token.push(SEGMENT_DELIMITER);
        token.push_str(&signature);
        Ok(token)
    }

    /// Verify `token` and return its payload
    ///
    /// # Errors
    /// - [`TokenError::MalformedToken`] if the token is not two segments
    /// - [`TokenError::SignatureMismatch`] if the signature does not match
    /// - [`TokenError::Decode`] / [`TokenError::MalformedPayload`] if the
    ///   signed data is not base64url-encoded JSON object text
    pub fn decode(&self, token: &str) -> TokenResult<Payload> {
        self.decode_as(token)
    }

    /// Verify `token` and deserialize its payload into `T`
    ///
    /// Useful for layering a typed envelope (claims, expiry) on top of the
    /// raw payload.
    ///
    /// # Errors
    /// Same as [`JsonAuth::decode`], with [`TokenError::MalformedPayload`]
    /// also covering a shape mismatch with `T`.
    pub fn decode_as<T: DeserializeOwned>(&self, token: &str) -> TokenResult<T> {
        let data = self.verified_data(token)?;
        let json = base64url::decode(data)?;
        let value = payload::deserialize(&json)?;

        debug!(
            algorithm = %self.signer.algorithm(),
            payload_bytes = json.len(),
            "token decoded"
        );
        LoggingTransformer::log_token_event("decode", self.signer.key_fingerprint(), true);
        Ok(value)
    }

    /// Whether `token` carries a valid signature, without decoding it
    #[must_use]
    pub fn verify(&self, token: &str) -> bool {
        self.verified_data(token).is_ok()
    }

    /// Data segment of `token`, only once its signature has been checked
    fn verified_data<'a>(&self, token: &'a str) -> TokenResult<&'a str> {
        let parts = TokenParts::parse(token).map_err(|e| {
            debug!(error = %e, "rejected malformed token");
            e
        })?;

        if !self
            .signer
            .verify(parts.data.as_bytes(), parts.signature)?
        {
            LoggingTransformer::log_token_event("verify", self.signer.key_fingerprint(), false);
            return Err(TokenError::SignatureMismatch);
        }

        Ok(parts.data)
    }
}

/// Borrowed view of the two token segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenParts<'a> {
    data: &'a str,
    signature: &'a str,
}

impl<'a> TokenParts<'a> {
    fn parse(token: &'a str) -> TokenResult<Self> {
        let (data, signature) = token
            .split_once(SEGMENT_DELIMITER)
            .ok_or_else(|| TokenError::malformed_token("missing segment delimiter"))?;

        if signature.contains(SEGMENT_DELIMITER) {
            return Err(TokenError::malformed_token("expected exactly two segments"));
        }
        if data.is_empty() {
            return Err(TokenError::malformed_token("empty data segment"));
        }

        Ok(Self { data, signature })
    }
}
