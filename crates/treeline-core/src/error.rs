//! Error types for render operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal errors that abort a render before any output is produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Permission denied for the root path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Root path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of render warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission was denied while listing a directory.
    PermissionDenied,
    /// Symbolic link target does not exist.
    BrokenSymlink,
    /// Symbolic link leads to an already-visited directory.
    LinkCycle,
    /// Error reading a directory.
    ReadError,
    /// Error reading entry metadata.
    MetadataError,
}

/// Non-fatal warning collected during a render.
///
/// Warnings never abort the traversal; the offending entry is rendered as
/// an annotated leaf and siblings are processed normally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl RenderWarning {
    /// Create a new render warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a permission denied warning.
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Permission denied: {}", path.display()),
            path,
            kind: WarningKind::PermissionDenied,
        }
    }

    /// Create a broken symlink warning.
    pub fn broken_symlink(path: impl Into<PathBuf>, target: &str) -> Self {
        let path = path.into();
        Self {
            message: format!("Broken symlink: {} -> {target}", path.display()),
            path,
            kind: WarningKind::BrokenSymlink,
        }
    }

    /// Create a warning for a link whose target was already rendered.
    pub fn link_cycle(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Link target already visited: {}", path.display()),
            path,
            kind: WarningKind::LinkCycle,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Read error: {error}"),
            path,
            kind: WarningKind::ReadError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_io() {
        let err = RenderError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, RenderError::PermissionDenied { .. }));

        let err = RenderError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, RenderError::NotFound { .. }));
    }

    #[test]
    fn test_render_warning_creation() {
        let warning = RenderWarning::permission_denied("/test/path");
        assert_eq!(warning.kind, WarningKind::PermissionDenied);
        assert!(warning.message.contains("Permission denied"));

        let warning = RenderWarning::link_cycle("/test/loop");
        assert_eq!(warning.kind, WarningKind::LinkCycle);
    }
}
