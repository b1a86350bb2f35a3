//! Tree formatting and display
//!
//! - `streaming` - plain-text formatter that writes each entry as it is visited

mod streaming;

use std::path::Path;

pub use streaming::StreamingFormatter;

use crate::error::Result;
use crate::tree::{TreeWalker, WalkSummary};

/// Render the complete listing for `root`, banner included, into a string.
pub fn format_listing(walker: &TreeWalker, root: &Path) -> Result<(String, WalkSummary)> {
    let mut formatter = StreamingFormatter::new(Vec::new());
    formatter.write_banner(root)?;
    let summary = walker.walk(root, &mut formatter)?;
    let text = String::from_utf8_lossy(&formatter.into_inner()).into_owned();
    Ok((text, summary))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir_all(dir.path().join("sub/inner")).unwrap();
        fs::write(dir.path().join("sub/inner/leaf.txt"), "").unwrap();
        fs::write(dir.path().join("sub/notes.md"), "").unwrap();
        fs::create_dir_all(dir.path().join("sub/node_modules/left-pad")).unwrap();
        fs::write(dir.path().join("sub/node_modules/left-pad/index.js"), "").unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();
        dir
    }

    #[test]
    fn test_full_listing_exact_output() {
        let dir = sample_tree();
        let (text, summary) = format_listing(&TreeWalker::default(), dir.path()).unwrap();

        let expected = format!(
            "Listing files and folders in: {}\n\
             \n\
             a.txt\n\
             b.txt\n\
             [DIR] sub\n\
             \x20   [DIR] inner\n\
             \x20       leaf.txt\n\
             \x20   notes.md\n",
            dir.path().display()
        );
        assert_eq!(text, expected);
        assert_eq!(summary.directories, 2);
        assert_eq!(summary.files, 4);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let dir = sample_tree();
        let walker = TreeWalker::default();
        let (first, _) = format_listing(&walker, dir.path()).unwrap();
        let (second, _) = format_listing(&walker, dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_entry_listed_once() {
        let dir = sample_tree();
        let (text, _) = format_listing(&TreeWalker::default(), dir.path()).unwrap();

        let lines: Vec<&str> = text.lines().skip(2).map(str::trim_start).collect();
        let unique: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(lines.len(), unique.len(), "duplicate lines: {text}");

        for dir_name in ["sub", "inner"] {
            assert!(lines.contains(&format!("[DIR] {dir_name}").as_str()));
        }
        for file_name in ["a.txt", "b.txt", "leaf.txt", "notes.md"] {
            assert!(lines.contains(&file_name));
        }
        for hidden in ["node_modules", "left-pad", "index.js", ".git", "HEAD"] {
            assert!(
                !lines.iter().any(|l| l.contains(hidden)),
                "{hidden} should be excluded: {text}"
            );
        }
    }
}
