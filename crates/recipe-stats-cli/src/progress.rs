use std::io::{self, Write};

use crate::IngestSummary;

/// Resets the cursor and clears the terminal.
pub const CONSOLE_CLEAR: &str = "\x1b[H\x1b[2J";

/// Observer notified after every decoded record.
pub trait Progress {
    /// # Errors
    /// Returns the I/O error of the underlying writer, if any.
    fn update(&mut self, summary: &IngestSummary) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _summary: &IngestSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Redraws the running counters in place.
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn update(&mut self, summary: &IngestSummary) -> io::Result<()> {
        write!(
            self.out,
            "{CONSOLE_CLEAR}Record: {}\nParsed: {}\nIgnored: {}",
            summary.records, summary.parsed, summary.ignored
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_progress_redraws_counters() {
        let mut buffer = Vec::new();
        let summary = IngestSummary { records: 3, parsed: 2, ignored: 1 };

        if let Err(err) = ConsoleProgress::new(&mut buffer).update(&summary) {
            panic!("writing to a Vec should not fail: {err}");
        }

        let written = String::from_utf8_lossy(&buffer).to_string();
        assert_eq!(written, "\x1b[H\x1b[2JRecord: 3\nParsed: 2\nIgnored: 1");
    }
}
