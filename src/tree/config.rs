//! Configuration types for the tree walker

use super::filter::ExclusionSet;

/// Directory names that are never listed or descended into.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 6] = [
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    "__pycache__",
];

/// Prefix added once per nesting level.
pub const INDENT_UNIT: &str = "    ";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directories with these names are skipped together with their contents
    pub exclusions: ExclusionSet,
    pub indent_unit: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionSet::default(),
            indent_unit: INDENT_UNIT.to_string(),
        }
    }
}
