//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → (main installs logging) → Compile route table
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → graceful dev server shutdown
//! ```

pub mod signals;
pub mod startup;

pub use startup::{build_router, load, StartupError};
