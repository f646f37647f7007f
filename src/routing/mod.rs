//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested fragment path ("/staff/1")
//!     → router.rs (scan routes in order)
//!     → matcher.rs (exact or segment match)
//!     → Return: Matched { view, params } or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → pattern.rs (parse segments)
//!     → matcher.rs (pick exact or segment matcher)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex (segment comparison only)
//! - Deterministic: same input always resolves to the same view

pub mod matcher;
pub mod params;
pub mod pattern;
pub mod router;
pub mod view;

pub use params::Params;
pub use pattern::{PatternError, RoutePattern, Segment};
pub use router::{Resolution, Route, Router};
pub use view::View;
