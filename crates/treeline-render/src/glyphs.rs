//! Tree-drawing connector glyphs.

/// Connector for a child that has later siblings.
pub const TEE: &str = "├── ";

/// Connector for the last child of a directory.
pub const LAST: &str = "└── ";

/// Continuation marker for an ancestor that still has siblings below.
pub const TREE_BRANCH: &str = "│   ";

/// Padding for an ancestor that was the last of its siblings.
pub const TREE_SPACE: &str = "    ";
