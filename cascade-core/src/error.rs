//! Errors surfaced by the engine's configuration layer.
//!
//! The flow engine itself has no recoverable errors: every flow step reports a
//! [`FlowOutcome`](crate::fluid::FlowOutcome) instead.

use std::io;

use thiserror::Error;

/// An error raised while loading a [`FluidConfig`](crate::config::FluidConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config file could not be accessed: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid json5 or does not match the expected shape.
    #[error("config file could not be parsed: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value in the config file is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
