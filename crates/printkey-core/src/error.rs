//! Error types shared by hosts and the interceptor.

use thiserror::Error;

/// Errors raised while wiring or running the print shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("Print request failed: {0}")]
    Print(String),
    #[error("Listener registration failed: {0}")]
    Listener(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for print shortcut operations.
pub type HookResult<T> = Result<T, HookError>;
