//! Rendering of the header and tree lines
//!
//! `TreeFormatter` owns the output sink and knows nothing about the
//! filesystem; the walker feeds it names and indent levels in display
//! order.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

/// One indentation unit; four columns per nesting level.
const INDENT_UNIT: &str = "│   ";

const SEPARATOR_WIDTH: usize = 40;

/// Formatter for tree output.
///
/// Directory lines always use the tee connector; file lines switch to
/// the elbow connector for the last file among their siblings.
pub struct TreeFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the header: the root's display name on its own line,
    /// followed by the fixed-width separator rule.
    pub fn header(&mut self, name: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", name)?;
        self.out.reset()?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))
    }

    /// Print a directory's own line at the given indent level.
    pub fn dir_entry(&mut self, name: &str, indent: usize) -> io::Result<()> {
        write!(self.out, "{}├── ", INDENT_UNIT.repeat(indent))?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", name)?;
        self.out.reset()?;
        writeln!(self.out, "/")
    }

    /// Print a file line at the given indent level.
    pub fn file_entry(&mut self, name: &str, indent: usize, is_last: bool) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };
        writeln!(self.out, "{}{}{}", INDENT_UNIT.repeat(indent), connector, name)
    }

    /// Consume the formatter and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
