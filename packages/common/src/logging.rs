//! Structured logging infrastructure
//!
//! Provides `env_logger`-based logging with secure handling of key material.
//! The token crates emit `tracing` events with the `log` feature enabled, so
//! initialising `env_logger` here is enough to see them when no `tracing`
//! subscriber is installed.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points for applications and tests
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs, including per-token events
    /// - `RUST_LOG=warn` - Only signature failures and worse
    /// - `RUST_LOG=jsonauth=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Short, non-reversible identifier for a secret key
    ///
    /// First 12 hex characters of the key's SHA-256 digest, prefixed with `#`.
    /// Lets logs correlate which key handled a token without exposing it.
    #[must_use]
    pub fn key_fingerprint(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }

    /// Log a failed cryptographic operation by error type only
    pub fn log_crypto_error<E: std::error::Error>(operation: &str, error: &E) {
        log::error!(
            "Cryptographic operation failed: {} (error_type: {})",
            operation,
            Self::error_type(error)
        );
    }

    /// Log a token encode/verify outcome
    ///
    /// `key_fingerprint` should come from [`LoggingTransformer::key_fingerprint`];
    /// token contents are never passed in.
    pub fn log_token_event(operation: &str, key_fingerprint: &str, success: bool) {
        if success {
            debug!("Token operation succeeded: {operation} (key: {key_fingerprint})");
        } else {
            warn!("Token operation failed: {operation} (key: {key_fingerprint})");
        }
    }

    fn error_type<E: std::error::Error>(_error: &E) -> &'static str {
        std::any::type_name::<E>()
    }
}
