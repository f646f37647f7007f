//! Views a route can resolve to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A renderable page of the application.
///
/// Views live outside the router; the router only names them and hands over
/// the parameters they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Sign-in page.
    Login,
    /// Administrator dashboard.
    AdminPanel,
    /// Per-staff dashboard, keyed by `id`.
    StaffPanel,
}

impl View {
    pub const ALL: [View; 3] = [View::Login, View::AdminPanel, View::StaffPanel];

    /// Parameters the view expects a route to bind.
    pub fn required_params(self) -> &'static [&'static str] {
        match self {
            View::Login | View::AdminPanel => &[],
            View::StaffPanel => &["id"],
        }
    }

    /// Stable identifier, matching the config spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Login => "login",
            View::AdminPanel => "admin_panel",
            View::StaffPanel => "staff_panel",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
