//! Prelude module for Horizon Mosaic.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use horizon_mosaic::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Delegates and Dispatch
// ============================================================================

pub use crate::adapter::{BindPayload, DelegateRegistry, ViewDelegate, ViewType};

// ============================================================================
// Adapter
// ============================================================================

pub use crate::adapter::{AdapterError, AdapterResult, AdapterSignals, MultiTypeAdapter};
