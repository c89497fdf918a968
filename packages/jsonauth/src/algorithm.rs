//! Hash functions available for token signatures

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Hash function underlying the HMAC signature
///
/// Serialized with the lowercase names used by most crypto libraries
/// (`"sha256"`, `"sha384"`, `"sha512"`), so it can sit in an application's own
/// configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// HMAC-SHA512, the default
    #[default]
    Sha512,
}

impl Algorithm {
    /// Lowercase hash name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex-encoded signature segment
    #[must_use]
    pub const fn signature_len(self) -> usize {
        self.output_len() * 2
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    /// Accepts `sha512`, `SHA512` and `SHA-512` style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        match normalized.as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(TokenError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
