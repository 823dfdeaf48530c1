//! Rendered tree container and statistics.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::RenderWarning;

/// Summary statistics for a rendered tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total number of directories rendered (excluding the root).
    pub total_dirs: u64,
    /// Total number of files rendered.
    pub total_files: u64,
    /// Total number of symbolic links rendered.
    pub total_symlinks: u64,
    /// Maximum depth reached.
    pub max_depth: u32,
}

impl RenderStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directory.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a file.
    pub fn record_file(&mut self, depth: u32) {
        self.total_files += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a symlink.
    pub fn record_symlink(&mut self, depth: u32) {
        self.total_symlinks += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Complete result of one render invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeListing {
    /// Rendered lines, root first, in traversal order.
    pub lines: Vec<String>,

    /// Root path that was rendered.
    pub root_path: PathBuf,

    /// Render configuration used.
    pub config: RenderConfig,

    /// Summary statistics.
    pub stats: RenderStats,

    /// Warnings encountered during the render.
    pub warnings: Vec<RenderWarning>,

    /// Duration of the render.
    pub render_duration: Duration,
}

impl TreeListing {
    /// Create a new tree listing.
    pub fn new(
        lines: Vec<String>,
        root_path: PathBuf,
        config: RenderConfig,
        stats: RenderStats,
        warnings: Vec<RenderWarning>,
        render_duration: Duration,
    ) -> Self {
        Self {
            lines,
            root_path,
            config,
            stats,
            warnings,
            render_duration,
        }
    }

    /// Get the number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if there were any warnings during the render.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Write all lines to a sink, one entry per line.
    pub fn write_to(&self, sink: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }
}
