//! Framed sections on stdout

use std::fmt::Display;
use std::io::{self, Write};

const DIVIDER: &str = "=====================";

/// Write one framed section: a labelled header, one item per line, then the divider.
pub fn write_section<W, I>(out: &mut W, label: &str, items: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    writeln!(out, "====== {label} ======")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out, "{DIVIDER}")
}

/// Writes consecutive sections separated by two blank lines
pub struct SectionWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> SectionWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn section<I>(&mut self, label: &str, items: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if self.written > 0 {
            self.out.write_all(b"\n\n")?;
        }
        write_section(&mut self.out, label, items)?;
        self.written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
