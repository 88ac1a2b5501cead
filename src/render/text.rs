//! Plain text rendering with page banners.
//!
//! ```text
//! Total pages: 2
//!
//! ================================================================================
//! PAGE 1
//! ================================================================================
//!
//! <text of page 1>
//! ```

use std::io::{self, Write};

/// Width of the `=` separator lines around each page banner.
pub const SEPARATOR_WIDTH: usize = 80;

/// The separator line, without a trailing newline.
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Sequential writer for the banner format.
///
/// Pages must be written in ascending order after the header.
pub struct PageWriter<W: Write> {
    inner: W,
    separator: String,
}

impl<W: Write> PageWriter<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            separator: separator(),
        }
    }

    /// Write the `Total pages: N` header line.
    pub fn write_header(&mut self, page_count: u32) -> io::Result<()> {
        writeln!(self.inner, "Total pages: {}", page_count)
    }

    /// Write the banner for 1-based page `number` followed by its text verbatim.
    pub fn write_page(&mut self, number: u32, text: &str) -> io::Result<()> {
        write!(
            self.inner,
            "\n{sep}\nPAGE {number}\n{sep}\n\n",
            sep = self.separator
        )?;
        self.inner.write_all(text.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
