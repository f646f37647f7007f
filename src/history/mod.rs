//! Hash-based history.
//!
//! # Data Flow
//! ```text
//! page URL / link / user input
//!     → location.rs (extract fragment → path, query, hash)
//!     → hash.rs (back/forward stack of locations)
//!     → navigation (resolve current path with the Router)
//! ```
//!
//! # Design Decisions
//! - Only the fragment carries application state; the server sees the base path
//! - History is plain data, owned by whoever dispatches navigation

pub mod hash;
pub mod location;

pub use hash::HashHistory;
pub use location::{HashLocation, LocationError};
