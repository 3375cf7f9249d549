//! Adapter error types.
//!
//! Transforms themselves are infallible; errors only arise when resolving
//! which adapter to use.

/// Unified error type for agent adapters.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The requested agent name is not one of the supported agents.
    #[error(
        "unknown agent type: `{0}` (expected one of: antigravity, claude-code, cursor, generic)"
    )]
    UnknownAgent(String),
}

/// Convenience alias used throughout the adapters crate.
pub type Result<T> = std::result::Result<T, AdapterError>;
