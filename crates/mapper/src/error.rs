//! Error types for synchronizer lifecycle violations.

use core::fmt;

/// Result type alias for mapper operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Lifecycle errors raised on caller bugs.
///
/// The attach/detach state machine fails loudly instead of silently
/// corrupting companion bookkeeping.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// `attach` was called on an already-attached synchronizer.
    AlreadyAttached,
    /// `detach` was called on a synchronizer that is not attached.
    NotAttached,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyAttached => {
                write!(f, "synchronizer is already attached")
            }
            Error::NotAttached => {
                write!(f, "synchronizer is not attached")
            }
        }
    }
}
