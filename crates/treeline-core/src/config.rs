//! Render configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for one render invocation.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenderConfig {
    /// Root directory to render.
    pub root: PathBuf,

    /// Write the rendered tree to this file instead of stdout.
    ///
    /// The sink itself is opened by the caller; the renderer only produces
    /// lines.
    #[builder(default)]
    #[serde(default)]
    pub output_file: Option<PathBuf>,

    /// Descend into directories reached through symbolic links.
    #[builder(default = "false")]
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Track visited link-target identities to avoid cyclic descent.
    ///
    /// Only meaningful together with `follow_symlinks`. Without it, a
    /// cyclic link chain makes the traversal non-terminating.
    #[builder(default = "false")]
    #[serde(default)]
    pub safe_mode: bool,

    /// Entry names to prune from the listing (exact match).
    ///
    /// A pruned directory is rendered as an elided leaf; a pruned file is
    /// omitted entirely.
    #[builder(default)]
    #[serde(default)]
    pub ignore_names: Vec<String>,
}

impl RenderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Create a new render config builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Create a simple config for rendering a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_file: None,
            follow_symlinks: false,
            safe_mode: false,
            ignore_names: Vec::new(),
        }
    }

    /// Check if an entry name should be pruned from the listing.
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore_names.iter().any(|n| n == name)
    }
}
