//! Error types for the slidecrew command-line boundary.
//!
//! Deck generation itself is infallible for any string input; the only
//! failure mode lives at the program entry point.

use thiserror::Error;

/// Errors surfaced by the command-line entry point.
#[derive(Debug, Error)]
pub enum CliError {
    /// The required topic argument was not supplied.
    #[error("Usage: {program} <topic> [requirements]")]
    MissingTopic { program: String },
}
