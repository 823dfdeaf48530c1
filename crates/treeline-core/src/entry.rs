//! Entry classification and directory identity types.

use std::io;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Type of file system entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink {
        /// Link target path.
        target: CompactString,
        /// Whether the link target exists.
        broken: bool,
    },
    /// Other file types (sockets, devices, etc.).
    Other,
}

impl EntryKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Check if this is a symlink.
    pub fn is_symlink(&self) -> bool {
        matches!(self, EntryKind::Symlink { .. })
    }
}

/// A single entry visited during traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Entry name (not full path).
    pub name: CompactString,

    /// Nesting level below the root (root children are depth 1).
    pub depth: u32,

    /// Entry type and associated metadata.
    pub kind: EntryKind,
}

impl Entry {
    /// Create a new entry.
    pub fn new(name: impl Into<CompactString>, depth: u32, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            depth,
            kind,
        }
    }
}

/// Alias-free identity of a physical directory.
///
/// Two paths compare equal exactly when they refer to the same directory,
/// which is what cycle avoidance needs; raw path strings can alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirIdentity {
    /// Device and inode pair (Unix).
    Inode { device: u64, inode: u64 },
    /// Fully resolved path, where inodes are unavailable.
    Path(PathBuf),
}

impl DirIdentity {
    /// Resolve the identity of the directory at `path`.
    ///
    /// Follows symlinks: the identity is that of the link target, not the
    /// link itself.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let metadata = std::fs::metadata(path)?;
        Ok(Self::Inode {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        Ok(Self::Path(std::fs::canonicalize(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_discrimination() {
        let file = EntryKind::File;
        assert!(file.is_file());
        assert!(!file.is_dir());
        assert!(!file.is_symlink());

        let dir = EntryKind::Directory;
        assert!(dir.is_dir());
        assert!(!dir.is_file());

        let link = EntryKind::Symlink {
            target: "target/path".into(),
            broken: false,
        };
        assert!(link.is_symlink());
        assert!(!link.is_dir());

        let other = EntryKind::Other;
        assert!(!other.is_file());
        assert!(!other.is_dir());
        assert!(!other.is_symlink());
    }

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new("main.rs", 2, EntryKind::File);
        assert_eq!(entry.name.as_str(), "main.rs");
        assert_eq!(entry.depth, 2);
        assert!(entry.kind.is_file());
    }

    #[test]
    fn test_dir_identity_same_directory() {
        let dir = std::env::temp_dir();
        let id1 = DirIdentity::of(&dir).unwrap();
        let id2 = DirIdentity::of(&dir).unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_dir_identity_missing_path() {
        assert!(DirIdentity::of(Path::new("/nonexistent/treeline/path")).is_err());
    }
}
