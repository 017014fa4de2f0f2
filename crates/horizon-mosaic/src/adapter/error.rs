//! Error types for the adapter crate.

use thiserror::Error;

use super::delegate::ViewType;

/// Errors that can occur during delegate registration and dispatch.
///
/// Every variant is a programmer-contract violation rather than a transient
/// condition: nothing here is retried or recovered from internally. The host
/// decides whether to log-and-skip or propagate further.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// No registered delegate's capability test matched the item and no
    /// fallback delegate is installed. Recoverable by installing a catch-all
    /// via [`DelegateRegistry::set_fallback`](super::DelegateRegistry::set_fallback).
    #[error("no delegate claimed the item at position {position}")]
    NoDelegateFound { position: usize },

    /// A view-type id that is not in the registry table flowed into
    /// [`create_view`](super::DelegateRegistry::create_view). This indicates
    /// the caller skipped the view-type query for that position.
    #[error("unknown view type {0:?}")]
    UnknownViewType(ViewType),

    /// The same delegate instance was registered twice. Distinct instances of
    /// the same delegate type are allowed; re-registering one instance is not.
    #[error("delegate instance is already registered")]
    DuplicateDelegate,

    /// A position outside `0..len` was passed to a query or mutation.
    /// The operation performed no partial mutation.
    #[error("position {position} out of range for {len} items")]
    OutOfRange { position: usize, len: usize },
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
