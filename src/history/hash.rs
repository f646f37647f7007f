//! In-memory hash history stack.

use crate::history::location::HashLocation;

/// Session history for hash-mode navigation.
///
/// Mirrors the browser's back/forward stack: pushing drops any forward
/// entries, and moving outside the stack is refused.
#[derive(Debug, Clone)]
pub struct HashHistory {
    base: String,
    entries: Vec<HashLocation>,
    position: usize,
}

impl HashHistory {
    /// Create a history rooted at `base` (the document path before `#`).
    pub fn new(base: impl Into<String>, initial: HashLocation) -> Self {
        let mut base = base.into();
        if base.is_empty() {
            base.push('/');
        }
        // "/app/#" and "/app/" both mean the same document
        if let Some(stripped) = base.strip_suffix('#') {
            base = stripped.to_string();
        }

        Self {
            base,
            entries: vec![initial],
            position: 0,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Current location.
    pub fn location(&self) -> &HashLocation {
        &self.entries[self.position]
    }

    /// Add a new entry after the current one, discarding forward entries.
    pub fn push(&mut self, location: HashLocation) {
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position += 1;
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, location: HashLocation) {
        self.entries[self.position] = location;
    }

    /// Move `delta` entries; returns false (and stays put) when out of range.
    pub fn go(&mut self, delta: isize) -> bool {
        if delta == 0 {
            return false;
        }
        let Some(target) = (self.position as isize).checked_add(delta) else {
            return false;
        };
        if target < 0 || target >= self.entries.len() as isize {
            return false;
        }
        self.position = target as usize;
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Link target for an application path, e.g. `/#/staff/1`.
    pub fn create_href(&self, path: &str) -> String {
        format!("{}#{}", self.base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(path: &str) -> HashLocation {
        HashLocation::from_fragment(path)
    }

    #[test]
    fn test_push_and_back() {
        let mut history = HashHistory::new("/", loc("/"));
        history.push(loc("/admin"));
        history.push(loc("/staff/1"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.location().path(), "/staff/1");

        assert!(history.back());
        assert_eq!(history.location().path(), "/admin");
        assert!(history.forward());
        assert_eq!(history.location().path(), "/staff/1");
        assert!(!history.forward());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = HashHistory::new("/", loc("/"));
        history.push(loc("/admin"));
        history.push(loc("/staff/1"));
        history.go(-2);
        history.push(loc("/staff/2"));

        assert_eq!(history.len(), 2);
        assert!(!history.forward());
        assert_eq!(history.location().path(), "/staff/2");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = HashHistory::new("/", loc("/"));
        history.replace(loc("/admin"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.location().path(), "/admin");
        assert!(!history.back());
    }

    #[test]
    fn test_go_far_out_of_range() {
        let mut history = HashHistory::new("/", loc("/"));
        history.push(loc("/admin"));

        assert!(!history.go(isize::MAX));
        assert!(!history.go(isize::MIN));
        assert_eq!(history.position(), 1);
        assert_eq!(history.location().path(), "/admin");
    }

    #[test]
    fn test_create_href() {
        let history = HashHistory::new("/", loc("/"));
        assert_eq!(history.create_href("/staff/1"), "/#/staff/1");

        let history = HashHistory::new("/app/#", loc("/"));
        assert_eq!(history.base(), "/app/");
        assert_eq!(history.create_href("/admin"), "/app/#/admin");
    }
}
