//! Logging facilities for Horizon Mosaic.
//!
//! Horizon Mosaic uses the `tracing` crate for instrumentation. The library
//! itself never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! # Filtering
//!
//! Every log line is emitted under a stable target, so subsystems can be
//! filtered individually with an `EnvFilter` directive, e.g.
//! `horizon_mosaic::registry=trace` to watch delegate resolution only.
//! The known targets are listed in [`targets`].

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_mosaic_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_mosaic_core::signal";
    /// Delegate registry target (resolution and dispatch).
    pub const REGISTRY: &str = "horizon_mosaic::registry";
    /// List adapter target (mutation and invalidation).
    pub const ADAPTER: &str = "horizon_mosaic::adapter";
}
