//! Stateless signed JSON tokens
//!
//! Encodes a JSON object payload into a compact, URL-safe token of the form
//! `base64url(json).hex(hmac)` and verifies it back. Tokens are tamper-evident
//! but not encrypted: anyone holding one can read its payload.
//!
//! - [`base64url`] - unpadded URL-safe base64
//! - [`payload`] - insertion-ordered JSON serialization
//! - [`signer`] - HMAC-SHA512 (or SHA-256/384) hex signatures
//! - [`codec`] - the [`JsonAuth`] encoder/decoder tying them together
//!
//! ```
//! use jsonauth::{Algorithm, JsonAuth, TokenConfig, TokenError};
//! use serde_json::json;
//!
//! let config = TokenConfig::builder()
//!     .with_algorithm(Algorithm::Sha512)
//!     .with_secret("1234")
//!     .build()?;
//! let auth = JsonAuth::from_config(config);
//!
//! let token = auth.encode(&json!({"user": "ada"}))?;
//! assert_eq!(auth.decode(&token)?["user"], "ada");
//!
//! let other = JsonAuth::new("wrong")?;
//! assert!(matches!(other.decode(&token), Err(TokenError::SignatureMismatch)));
//! # Ok::<(), TokenError>(())
//! ```

pub mod algorithm;
pub mod base64url;
pub mod codec;
pub mod config;
mod error;
pub mod key;
pub mod payload;
pub mod signer;

pub use algorithm::Algorithm;
pub use codec::{JsonAuth, SEGMENT_DELIMITER};
pub use config::{TokenConfig, TokenConfigBuilder};
pub use error::*;
pub use key::SecretKey;
pub use payload::Payload;
pub use signer::{HmacSigner, Signer};
