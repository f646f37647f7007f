//! Navigation dispatch.
//!
//! The navigator is the one place that ties the route table, the history
//! stack and the view host together. It borrows the router rather than
//! looking it up, so tests and embedders can hand it any table.

use crate::history::{HashHistory, HashLocation};
use crate::observability::metrics;
use crate::routing::{Params, Resolution, Router, View};

/// Collaborator that renders whatever the navigator resolves.
pub trait ViewHost {
    /// Show `view` with its bound parameters.
    fn mount(&mut self, view: View, params: &Params);

    /// No route matched `path`. Whether to show a blank page, an error page
    /// or redirect is up to the host.
    fn unresolved(&mut self, path: &str);
}

/// Drives hash navigation for one page session.
pub struct Navigator<'r, H: ViewHost> {
    router: &'r Router,
    history: HashHistory,
    host: H,
    current: Resolution,
}

impl<'r, H: ViewHost> Navigator<'r, H> {
    /// Resolve the initial location and mount it.
    pub fn start(router: &'r Router, base: &str, initial: HashLocation, mut host: H) -> Self {
        let current = router.resolve_location(&initial);
        dispatch(&mut host, &current);
        tracing::debug!(location = %initial, outcome = current.outcome(), "Navigation started");

        Self {
            router,
            history: HashHistory::new(base, initial),
            host,
            current,
        }
    }

    /// Navigate to a new location, adding a history entry.
    ///
    /// Returns false for a duplicate navigation (same location as current),
    /// which neither adds an entry nor re-mounts the view.
    pub fn push(&mut self, to: impl Into<HashLocation>) -> bool {
        let to = to.into();
        if &to == self.history.location() {
            tracing::debug!(location = %to, "Duplicate navigation ignored");
            return false;
        }
        self.history.push(to);
        self.render();
        true
    }

    /// Navigate without adding a history entry.
    pub fn replace(&mut self, to: impl Into<HashLocation>) {
        self.history.replace(to.into());
        self.render();
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move through history; nothing is rendered when the move is out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        if !self.history.go(delta) {
            return false;
        }
        self.render();
        true
    }

    /// Resolution of the current location.
    pub fn current(&self) -> &Resolution {
        &self.current
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Href for a named route, e.g. `/#/staff/1`.
    pub fn href(&self, route: &str, params: &Params) -> Result<String, crate::RouterError> {
        let path = self.router.build_path(route, params)?;
        Ok(self.history.create_href(&path))
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn render(&mut self) {
        let location = self.history.location();
        self.current = self.router.resolve_location(location);
        tracing::debug!(location = %location, outcome = self.current.outcome(), "Navigated");
        dispatch(&mut self.host, &self.current);
    }
}

fn dispatch<H: ViewHost>(host: &mut H, resolution: &Resolution) {
    metrics::record_resolution(resolution.outcome());
    match resolution {
        Resolution::Matched { view, params } => host.mount(*view, params),
        Resolution::NotFound { path } => {
            tracing::warn!(path = %path, "No route matched");
            host.unresolved(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_routes;

    #[derive(Debug, Default)]
    struct RecordingHost {
        events: Vec<String>,
    }

    impl ViewHost for RecordingHost {
        fn mount(&mut self, view: View, params: &Params) {
            match params.get("id") {
                Some(id) => self.events.push(format!("{view}:{id}")),
                None => self.events.push(view.to_string()),
            }
        }

        fn unresolved(&mut self, path: &str) {
            self.events.push(format!("404:{path}"));
        }
    }

    fn router() -> Router {
        Router::from_config(&default_routes()).unwrap()
    }

    #[test]
    fn test_start_mounts_initial_view() {
        let router = router();
        let nav = Navigator::start(&router, "/", HashLocation::from("#/"), RecordingHost::default());
        assert_eq!(nav.current().view(), Some(View::Login));
        assert_eq!(nav.host().events, vec!["login"]);
    }

    #[test]
    fn test_push_back_forward() {
        let router = router();
        let mut nav = Navigator::start(&router, "/", HashLocation::from("/"), RecordingHost::default());

        assert!(nav.push("/admin"));
        assert!(nav.push("/staff/1"));
        assert!(nav.back());
        assert!(nav.back());
        assert!(!nav.back());
        assert!(nav.forward());

        assert_eq!(
            nav.into_host().events,
            vec!["login", "admin_panel", "staff_panel:1", "admin_panel", "login", "admin_panel"]
        );
    }

    #[test]
    fn test_duplicate_push_is_ignored() {
        let router = router();
        let mut nav = Navigator::start(&router, "/", HashLocation::from("/admin"), RecordingHost::default());

        assert!(!nav.push("/admin"));
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.host().events, vec!["admin_panel"]);

        // A different query is a different location
        assert!(nav.push("/admin?tab=users"));
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_unresolved_path_reaches_host() {
        let router = router();
        let mut nav = Navigator::start(&router, "/", HashLocation::from("/"), RecordingHost::default());

        nav.replace("/unknown");
        assert_eq!(
            nav.current(),
            &Resolution::NotFound {
                path: "/unknown".into()
            }
        );
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.host().events, vec!["login", "404:/unknown"]);
    }

    #[test]
    fn test_href() {
        let router = router();
        let nav = Navigator::start(&router, "/app/", HashLocation::from("/"), RecordingHost::default());
        let href = nav.href("staff", &Params::new().with("id", "istanbul")).unwrap();
        assert_eq!(href, "/app/#/staff/istanbul");
    }
}
