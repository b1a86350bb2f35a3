//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory, skips excluded directory names, and streams
//! every remaining entry to a `StreamingOutput` sink in depth-first pre-order.

mod config;
mod entry;
mod filter;
mod walker;

// Re-export public types
pub use config::{DEFAULT_EXCLUDED_DIRS, INDENT_UNIT, WalkerConfig};
pub use entry::{Entry, EntryKind, read_sorted_entries, resolve_kind};
pub use filter::ExclusionSet;
pub use walker::{StreamingOutput, TreeWalker, WalkSummary};
