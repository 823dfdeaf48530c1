//! Directory tree rendering engine for treeline.
//!
//! This crate walks a directory hierarchy depth-first and produces the
//! classic text-tree listing, one line per entry.
//!
//! # Overview
//!
//! `treeline-render` is responsible for traversal and formatting. Key
//! behaviors:
//!
//! - **Deterministic output** via lexicographic child ordering
//! - **Explicit work stack** instead of recursion, so hierarchy depth
//!   cannot exhaust the call stack
//! - **Symlink policy** with optional descent and cycle avoidance
//! - **Warning collection** so a single unreadable entry never aborts
//!   the whole render
//!
//! # Example
//!
//! ```rust,no_run
//! use treeline_render::{RenderConfig, TreeRenderer};
//!
//! let config = RenderConfig::new("/path/to/render");
//! let renderer = TreeRenderer::new();
//! let listing = renderer.render(&config).unwrap();
//!
//! for line in &listing.lines {
//!     println!("{line}");
//! }
//! ```
//!
//! # Symlink handling
//!
//! Links are always rendered as `name -> target`. Descent into a link
//! that resolves to a directory is governed by two flags:
//!
//! ```rust,no_run
//! use treeline_render::{RenderConfig, TreeRenderer};
//!
//! let config = RenderConfig::builder()
//!     .root("/path/to/render")
//!     .follow_symlinks(true)
//!     .safe_mode(true)
//!     .build()
//!     .unwrap();
//!
//! let listing = TreeRenderer::new().render(&config).unwrap();
//! assert!(listing.line_count() > 0);
//! ```
//!
//! With `follow_symlinks` alone, cyclic link chains make the traversal
//! non-terminating; `safe_mode` bounds it by tracking the identity of
//! every directory entered through a link.

pub mod glyphs;
mod renderer;
mod visited;

pub use renderer::TreeRenderer;
pub use visited::VisitedSet;

// Re-export core types for convenience
pub use treeline_core::{
    DirIdentity, Entry, EntryKind, RenderConfig, RenderError, RenderStats, RenderWarning,
    TreeListing, WarningKind,
};
