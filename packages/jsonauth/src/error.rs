//! Token error types

use thiserror::Error;

/// Token operation result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors raised while building, signing or verifying tokens
#[derive(Debug, Error)]
pub enum TokenError {
    /// No secret key, or an empty one, was supplied
    #[error("Secret key is required")]
    MissingKey,

    /// The key was rejected by the MAC implementation
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The hash function name is not one of the supported algorithms
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The payload is not a JSON object
    #[error("Payload must be a JSON object: {0}")]
    InvalidPayload(String),

    /// The token does not have the `data.signature` shape
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// The recomputed signature does not match the one carried by the token
    #[error("Signature checking failed")]
    SignatureMismatch,

    /// The data segment is not valid base64url
    #[error("Invalid base64url data: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded data segment is not the expected JSON
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl TokenError {
    /// Create an invalid payload error
    #[must_use]
    pub fn invalid_payload(msg: impl Into<String>) -> Self {
        Self::InvalidPayload(msg.into())
    }

    /// Create a malformed token error
    #[must_use]
    pub fn malformed_token(msg: impl Into<String>) -> Self {
        Self::MalformedToken(msg.into())
    }

    /// Create a malformed payload error
    #[must_use]
    pub fn malformed_payload(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Whether this error means the token failed authentication
    ///
    /// Callers that only need a yes/no answer for untrusted input can treat
    /// every variant returned by decoding as a rejection; this narrows it to
    /// the signature check itself.
    #[must_use]
    pub fn is_signature_mismatch(&self) -> bool {
        matches!(self, Self::SignatureMismatch)
    }
}
