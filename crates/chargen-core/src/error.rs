//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Wizard commands that reach the controller boundary are never surfaced
/// to the host as errors; the controller degrades every rejection to a
/// logged no-op. The typed variants exist so domain code can state *why*
/// a command was refused.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A command arrived in a step that does not accept it, or its
    /// payload failed a domain rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// A command referenced a catalog id that does not exist in the
    /// expected catalog subset.
    #[error("unknown catalog id: {0}")]
    UnknownId(String),
}
