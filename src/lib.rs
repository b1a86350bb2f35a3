//! dirtree - list files and folders as an indented tree, skipping build and
//! dependency directories

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::{StreamingFormatter, format_listing};
pub use tree::{
    DEFAULT_EXCLUDED_DIRS, Entry, EntryKind, ExclusionSet, INDENT_UNIT, StreamingOutput,
    TreeWalker, WalkSummary, WalkerConfig,
};
