//! Core types for treeline.
//!
//! This crate provides the fundamental data structures shared by the
//! treeline renderer and CLI, including entry classification, render
//! configuration, and the error/warning taxonomy.

mod config;
mod entry;
mod error;
mod listing;

pub use config::{RenderConfig, RenderConfigBuilder};
pub use entry::{DirIdentity, Entry, EntryKind};
pub use error::{RenderError, RenderWarning, WarningKind};
pub use listing::{RenderStats, TreeListing};
