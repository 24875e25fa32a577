use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    /// A required field was missing or empty.
    Validation,
    /// The resource already exists (e.g. a registered username).
    Conflict,
    NotFound,
    /// A write was attempted without an authenticated identity.
    Unauthorized,
    /// The remote book catalog failed, timed out or answered with garbage.
    Upstream,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Validation failed"),
            KernelError::Conflict => write!(f, "Resource already exists"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Unauthorized => write!(f, "Authentication required"),
            KernelError::Upstream => write!(f, "Remote catalog request failed"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
