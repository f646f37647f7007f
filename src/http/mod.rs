//! Development HTTP server.
//!
//! # Data Flow
//! ```text
//! GET / or /index.html   → shell.rs (application document)
//! GET /api/routes        → server.rs (route table with hrefs)
//! GET /api/resolve       → server.rs → Router::resolve_location
//! anything else          → 404 (application paths never reach the server)
//! ```

pub mod request;
pub mod server;
pub mod shell;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, DevServer};
