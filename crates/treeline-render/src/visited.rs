//! Visited-directory tracking for cycle avoidance.

use std::collections::HashSet;

use treeline_core::DirIdentity;

/// Tracks directory identities entered through symlinks.
///
/// Created fresh for each render invocation; a link whose target identity
/// is already tracked is rendered as a leaf instead of descended into,
/// which bounds traversal on cyclic link chains.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<DirIdentity>,
}

impl VisitedSet {
    /// Create a new visited set.
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Track an identity. Returns `true` if this is the first time seeing it.
    ///
    /// If the identity was already tracked, returns `false`, indicating the
    /// physical directory has been rendered through a link before.
    pub fn track(&mut self, identity: DirIdentity) -> bool {
        self.seen.insert(identity)
    }

    /// Check if an identity has been seen (without tracking).
    pub fn has_seen(&self, identity: &DirIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Get the number of unique identities tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no identities have been tracked.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_new_identity() {
        let mut visited = VisitedSet::new();
        let identity = DirIdentity::Inode {
            device: 1,
            inode: 12345,
        };

        assert!(visited.track(identity.clone()));
        assert!(!visited.track(identity)); // Second time returns false
    }

    #[test]
    fn test_has_seen() {
        let mut visited = VisitedSet::new();
        let identity = DirIdentity::Inode {
            device: 1,
            inode: 12345,
        };

        assert!(!visited.has_seen(&identity));
        visited.track(identity.clone());
        assert!(visited.has_seen(&identity));
    }

    #[test]
    fn test_different_devices() {
        let mut visited = VisitedSet::new();
        let id1 = DirIdentity::Inode {
            device: 1,
            inode: 12345,
        };
        let id2 = DirIdentity::Inode {
            device: 2,
            inode: 12345,
        }; // Same inode, different device

        assert!(visited.track(id1));
        assert!(visited.track(id2)); // Different device, so it's new
        assert_eq!(visited.len(), 2);
        assert!(!visited.is_empty());
    }
}
