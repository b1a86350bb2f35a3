//! TreeWalker - depth-first listing that streams each entry to an output sink

use std::io;
use std::path::Path;

use crate::error::{Result, WalkError};

use super::config::WalkerConfig;
use super::entry::{EntryKind, read_sorted_entries};

/// Callback for streaming output - receives each visited entry in pre-order.
pub trait StreamingOutput {
    /// A listed entry. `indent` is the prefix for its nesting level.
    fn output_node(&mut self, name: &str, is_dir: bool, indent: &str) -> io::Result<()>;

    /// A directory whose contents could not be listed for lack of permission.
    fn permission_denied(&mut self, dir: &Path, indent: &str) -> io::Result<()>;
}

/// Counts gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Directories reported as permission denied
    pub denied: usize,
}

/// Recursive walker that prints directories before their children and skips
/// excluded directory names.
///
/// Symlinks to directories are followed. There is no cycle detection.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and stream every visited entry to `output`.
    ///
    /// The root itself is not printed; its entries start at an empty indent.
    pub fn walk<O: StreamingOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        self.walk_dir(root, "", output, &mut summary)?;
        log::debug!(
            "walked {}: {} directories, {} files, {} denied",
            root.display(),
            summary.directories,
            summary.files,
            summary.denied
        );
        Ok(summary)
    }

    fn walk_dir<O: StreamingOutput>(
        &self,
        dir: &Path,
        indent: &str,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        log::trace!("entering {}", dir.display());

        let entries = match read_sorted_entries(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                log::info!("permission denied: {}", dir.display());
                output.permission_denied(dir, indent)?;
                summary.denied += 1;
                return Ok(());
            }
            Err(source) => {
                return Err(WalkError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        let child_indent = format!("{}{}", indent, self.config.indent_unit);

        for entry in entries {
            let kind = entry.kind().map_err(|source| WalkError::Metadata {
                path: entry.path.clone(),
                source,
            })?;

            match kind {
                EntryKind::Directory => {
                    if self.config.exclusions.is_excluded(&entry.name) {
                        log::debug!("skipping excluded directory {}", entry.path.display());
                        continue;
                    }
                    output.output_node(&entry.display_name(), true, indent)?;
                    summary.directories += 1;
                    self.walk_dir(&entry.path, &child_indent, output, summary)?;
                }
                EntryKind::File => {
                    output.output_node(&entry.display_name(), false, indent)?;
                    summary.files += 1;
                }
            }
        }

        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
