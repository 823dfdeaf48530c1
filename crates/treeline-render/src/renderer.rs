//! Explicit-stack directory tree renderer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use compact_str::CompactString;

use treeline_core::{
    DirIdentity, Entry, EntryKind, RenderConfig, RenderError, RenderStats, RenderWarning,
    TreeListing, WarningKind,
};

use crate::glyphs;
use crate::visited::VisitedSet;

/// Marker appended to a directory whose listing was denied.
const DENIED_MARKER: &str = "[permission denied]";

/// Marker appended to a directory that failed to list for other reasons.
const UNREADABLE_MARKER: &str = "[unreadable]";

/// Marker appended to a pruned directory.
const ELIDED_MARKER: &str = "[...]";

/// Depth-first tree renderer.
///
/// Walks the hierarchy with an explicit work stack, so filesystem depth
/// never translates into call-stack depth.
pub struct TreeRenderer;

impl TreeRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render the directory at `config.root` into a [`TreeListing`].
    ///
    /// Fails before producing any line when the root is missing or not a
    /// directory. Per-entry failures below the root degrade to annotated
    /// leaf lines and collected warnings.
    pub fn render(&self, config: &RenderConfig) -> Result<TreeListing, RenderError> {
        let start = Instant::now();
        let root = &config.root;

        let metadata = fs::metadata(root).map_err(|e| RenderError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(RenderError::NotADirectory { path: root.clone() });
        }

        let mut stats = RenderStats::new();
        let mut warnings = Vec::new();
        let mut visited = VisitedSet::new();
        let mut stack: Vec<PendingEntry> = Vec::new();

        // An unreadable root is fatal: there is nothing to render.
        let root_children =
            list_children(root, 1, config, &mut warnings).map_err(|e| RenderError::io(root, e))?;

        let mut lines = vec![root_label(root)];
        push_children(&mut stack, root_children, "");

        while let Some(frame) = stack.pop() {
            let connector = if frame.is_last { glyphs::LAST } else { glyphs::TEE };
            let line_prefix = format!("{}{}", frame.prefix, connector);

            if frame.ignored {
                stats.record_dir(frame.entry.depth);
                lines.push(format!("{line_prefix}{} {ELIDED_MARKER}", frame.entry.name));
                continue;
            }

            match frame.entry.kind.clone() {
                EntryKind::File => {
                    stats.record_file(frame.entry.depth);
                    lines.push(format!("{line_prefix}{}", frame.entry.name));
                }
                EntryKind::Other => {
                    lines.push(format!("{line_prefix}{}", frame.entry.name));
                }
                EntryKind::Directory => {
                    stats.record_dir(frame.entry.depth);
                    let label = frame.entry.name.to_string();
                    self.descend(&frame, label, config, &mut stack, &mut lines, &mut warnings);
                }
                EntryKind::Symlink { target, broken } => {
                    stats.record_symlink(frame.entry.depth);
                    let label = format!("{} -> {target}", frame.entry.name);

                    if broken {
                        lines.push(format!("{line_prefix}{label}"));
                        warnings.push(RenderWarning::broken_symlink(&frame.path, &target));
                        continue;
                    }

                    let is_dir = fs::metadata(&frame.path)
                        .map(|m| m.is_dir())
                        .unwrap_or(false);
                    if !is_dir || !config.follow_symlinks {
                        lines.push(format!("{line_prefix}{label}"));
                        continue;
                    }

                    if config.safe_mode {
                        match DirIdentity::of(&frame.path) {
                            Ok(identity) => {
                                if !visited.track(identity) {
                                    lines.push(format!("{line_prefix}{label}"));
                                    warnings.push(RenderWarning::link_cycle(&frame.path));
                                    continue;
                                }
                            }
                            Err(err) => {
                                lines.push(format!("{line_prefix}{label}"));
                                warnings.push(RenderWarning::read_error(&frame.path, &err));
                                continue;
                            }
                        }
                    }

                    self.descend(&frame, label, config, &mut stack, &mut lines, &mut warnings);
                }
            }
        }

        Ok(TreeListing::new(
            lines,
            root.clone(),
            config.clone(),
            stats,
            warnings,
            start.elapsed(),
        ))
    }

    /// Emit a directory's line and queue its children.
    ///
    /// Listing failures degrade the entry to an annotated leaf; siblings
    /// already on the stack are unaffected.
    fn descend(
        &self,
        frame: &PendingEntry,
        label: String,
        config: &RenderConfig,
        stack: &mut Vec<PendingEntry>,
        lines: &mut Vec<String>,
        warnings: &mut Vec<RenderWarning>,
    ) {
        let connector = if frame.is_last { glyphs::LAST } else { glyphs::TEE };

        match list_children(&frame.path, frame.entry.depth + 1, config, warnings) {
            Ok(children) => {
                lines.push(format!("{}{connector}{label}", frame.prefix));
                let child_prefix = format!(
                    "{}{}",
                    frame.prefix,
                    if frame.is_last {
                        glyphs::TREE_SPACE
                    } else {
                        glyphs::TREE_BRANCH
                    }
                );
                push_children(stack, children, &child_prefix);
            }
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                lines.push(format!("{}{connector}{label} {DENIED_MARKER}", frame.prefix));
                warnings.push(RenderWarning::permission_denied(&frame.path));
            }
            Err(err) => {
                lines.push(format!(
                    "{}{connector}{label} {UNREADABLE_MARKER}",
                    frame.prefix
                ));
                warnings.push(RenderWarning::read_error(&frame.path, &err));
            }
        }
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// An entry waiting on the work stack.
struct PendingEntry {
    entry: Entry,
    path: PathBuf,
    is_last: bool,
    /// Accumulated ancestor continuation prefix for this entry's line.
    prefix: String,
    /// Pruned by the ignore list; rendered as an elided leaf.
    ignored: bool,
}

/// A classified child collected while listing a directory.
struct ChildEntry {
    entry: Entry,
    path: PathBuf,
    ignored: bool,
}

/// List a directory's children, classified and sorted by name.
///
/// Ignored files are dropped here so sibling connectors stay correct;
/// ignored directories are kept, flagged, and rendered as elided leaves.
fn list_children(
    dir: &Path,
    depth: u32,
    config: &RenderConfig,
    warnings: &mut Vec<RenderWarning>,
) -> io::Result<Vec<ChildEntry>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        let kind = match entry.file_type() {
            Ok(t) if t.is_symlink() => {
                let target = fs::read_link(&path)
                    .map(|p| CompactString::new(p.to_string_lossy()))
                    .unwrap_or_default();
                EntryKind::Symlink {
                    target,
                    broken: !path.exists(),
                }
            }
            Ok(t) if t.is_dir() => EntryKind::Directory,
            Ok(t) if t.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(err) => {
                warnings.push(RenderWarning::new(
                    &path,
                    format!("Metadata error: {err}"),
                    WarningKind::MetadataError,
                ));
                EntryKind::Other
            }
        };

        if config.should_ignore(&name) {
            if !kind.is_dir() {
                continue;
            }
            children.push(ChildEntry {
                entry: Entry::new(name, depth, kind),
                path,
                ignored: true,
            });
            continue;
        }

        children.push(ChildEntry {
            entry: Entry::new(name, depth, kind),
            path,
            ignored: false,
        });
    }

    children.sort_by(|a, b| a.entry.name.cmp(&b.entry.name));
    Ok(children)
}

/// Push children in reverse so the stack pops them in sorted order.
fn push_children(stack: &mut Vec<PendingEntry>, children: Vec<ChildEntry>, prefix: &str) {
    let count = children.len();
    for (idx, child) in children.into_iter().enumerate().rev() {
        stack.push(PendingEntry {
            entry: child.entry,
            path: child.path,
            is_last: idx == count - 1,
            prefix: prefix.to_string(),
            ignored: child.ignored,
        });
    }
}

/// Label for the root line: the directory's own name, falling back to the
/// path display for roots without a final component (`/`, `.`).
fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();

        temp
    }

    #[test]
    fn test_basic_render() {
        let temp = create_test_tree();
        let config = RenderConfig::new(temp.path());

        let listing = TreeRenderer::new().render(&config).unwrap();

        assert_eq!(listing.stats.total_files, 3);
        assert_eq!(listing.stats.total_dirs, 3);
        assert_eq!(listing.stats.max_depth, 3);
        // Root line plus one line per entry.
        assert_eq!(listing.line_count(), 7);
        assert!(!listing.has_warnings());
    }

    #[test]
    fn test_children_sorted_by_name() {
        let temp = create_test_tree();
        let config = RenderConfig::new(temp.path());

        let listing = TreeRenderer::new().render(&config).unwrap();

        let dir1_pos = listing.lines.iter().position(|l| l.ends_with("dir1")).unwrap();
        let dir2_pos = listing.lines.iter().position(|l| l.ends_with("dir2")).unwrap();
        let file_pos = listing
            .lines
            .iter()
            .position(|l| l.ends_with("file1.txt"))
            .unwrap();

        assert!(dir1_pos < dir2_pos);
        assert!(dir2_pos < file_pos);
    }

    #[test]
    fn test_ignored_file_omitted() {
        let temp = create_test_tree();
        let config = RenderConfig::builder()
            .root(temp.path())
            .ignore_names(vec!["file1.txt".to_string()])
            .build()
            .unwrap();

        let listing = TreeRenderer::new().render(&config).unwrap();

        assert!(!listing.lines.iter().any(|l| l.contains("file1.txt")));
        assert_eq!(listing.stats.total_files, 2);
    }

    #[test]
    fn test_ignored_directory_elided() {
        let temp = create_test_tree();
        let config = RenderConfig::builder()
            .root(temp.path())
            .ignore_names(vec!["dir1".to_string()])
            .build()
            .unwrap();

        let listing = TreeRenderer::new().render(&config).unwrap();

        assert!(listing.lines.iter().any(|l| l.ends_with("dir1 [...]")));
        assert!(!listing.lines.iter().any(|l| l.contains("file2.txt")));
    }

    #[test]
    fn test_root_label_fallback() {
        assert_eq!(root_label(Path::new("proj")), "proj");
        assert_eq!(root_label(Path::new("/tmp/proj")), "proj");
        assert_eq!(root_label(Path::new(".")), ".");
    }
}
