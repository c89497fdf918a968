//! Base64url encoding used for the data segment
//!
//! Encoding uses the URL-safe alphabet (`-` and `_`) and never emits `=`
//! padding. Decoding accepts input with or without padding, so a segment can
//! be restored no matter which side stripped it.

use crate::error::{TokenError, TokenResult};
use base64::{
    alphabet,
    engine::{self, general_purpose, DecodePaddingMode},
    Engine as _,
};

/// URL-safe engine: no padding on encode, padding optional on decode
const URL_SAFE_ENGINE: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::URL_SAFE,
    general_purpose::NO_PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as unpadded base64url
#[inline]
#[must_use]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_ENGINE.encode(input)
}

/// Decode a base64url string, with or without trailing padding
///
/// # Errors
/// Returns [`TokenError::Decode`] if the input contains characters outside the
/// URL-safe alphabet or has an impossible length.
#[inline]
pub fn decode(input: &str) -> TokenResult<Vec<u8>> {
    Ok(URL_SAFE_ENGINE.decode(input)?)
}

/// Decode a base64url string into UTF-8 text
///
/// # Errors
/// Returns [`TokenError::Decode`] for invalid base64url and
/// [`TokenError::MalformedPayload`] if the bytes are not UTF-8.
pub fn decode_str(input: &str) -> TokenResult<String> {
    String::from_utf8(decode(input)?).map_err(|e| TokenError::malformed_payload(e.to_string()))
}
