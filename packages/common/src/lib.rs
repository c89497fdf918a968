//! Common infrastructure shared by the jsonauth crates
//!
//! Currently this is the logging layer: `env_logger` initialisation and helpers
//! that log token activity without ever writing secrets or token contents.

pub mod logging;

pub use logging::LoggingTransformer;
