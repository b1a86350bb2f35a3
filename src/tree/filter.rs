//! Directory exclusion by exact name

use std::collections::HashSet;
use std::ffi::OsStr;

use super::config::DEFAULT_EXCLUDED_DIRS;

/// Set of directory names skipped entirely during traversal.
///
/// Matching is by exact name; there is no globbing and no case folding.
/// The set only applies to directories, so a regular file called
/// `node_modules` is still listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// Build an exclusion set from any collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::<String>::into).collect())
    }

    /// An exclusion set that skips nothing.
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    /// Check whether a directory with this name should be skipped.
    ///
    /// Names that are not valid UTF-8 never match.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.0.contains(n))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS)
    }
}
