//! Directory entries and their kinds

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a listed entry as seen through symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Anything that is not a directory: regular files, symlinks to files,
    /// dangling symlinks, devices, sockets, fifos
    File,
}

/// A single name found while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
}

impl Entry {
    pub fn new(parent: &Path, name: OsString) -> Self {
        let path = parent.join(&name);
        Self { name, path }
    }

    /// Name for display; invalid UTF-8 is replaced with U+FFFD.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Query the filesystem for this entry's kind.
    pub fn kind(&self) -> io::Result<EntryKind> {
        resolve_kind(&self.path)
    }
}

/// Resolve whether `path` is a directory, following symlinks.
///
/// A symlink whose target cannot be resolved (dangling, looping) counts as a
/// file, and so does an entry whose metadata we are not allowed to read.
/// Any other failure, such as the entry disappearing after it was listed, is
/// returned to the caller.
pub fn resolve_kind(path: &Path) -> io::Result<EntryKind> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(EntryKind::Directory),
        Ok(_) => Ok(EntryKind::File),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => Ok(EntryKind::File),
        Err(err) => match fs::symlink_metadata(path) {
            Ok(_) => Ok(EntryKind::File),
            Err(_) => Err(err),
        },
    }
}

/// List the immediate entries of `dir`, sorted by raw name bytes.
///
/// The whole listing is collected before returning so a failure part way
/// through is reported as a failure of the listing itself.
pub fn read_sorted_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = fs::read_dir(dir)?
        .map(|e| e.map(|e| Entry::new(dir, e.file_name())))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
