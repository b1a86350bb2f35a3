//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each entry as a
//! plain indented line as soon as the walker reports it.

use std::io::{self, Write};
use std::path::Path;

use crate::tree::StreamingOutput;

const DIR_TAG: &str = "[DIR]";
const DENIED_TAG: &str = "[Permission Denied]";

/// Plain-text formatter over any writer.
///
/// Lines look like `<indent>[DIR] <name>` for directories, `<indent><name>`
/// for everything else, and `<indent>[Permission Denied] <path>` for
/// directories that could not be listed.
pub struct StreamingFormatter<W: Write> {
    out: W,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the banner line and the blank line that follows it.
    pub fn write_banner(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Listing files and folders in: {}", root.display())?;
        writeln!(self.out)
    }

    /// Flush buffered output.
    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_node(&mut self, name: &str, is_dir: bool, indent: &str) -> io::Result<()> {
        if is_dir {
            writeln!(self.out, "{}{} {}", indent, DIR_TAG, name)
        } else {
            writeln!(self.out, "{}{}", indent, name)
        }
    }

    fn permission_denied(&mut self, dir: &Path, indent: &str) -> io::Result<()> {
        writeln!(self.out, "{}{} {}", indent, DENIED_TAG, dir.display())
    }
}
