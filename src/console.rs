//! External terminal collaborators.
//!
//! The animation loop only needs two things from its environment: somewhere
//! to write text that can be flushed on demand, and (when finalizing a line)
//! the current terminal column count. Both are behind traits so tests can
//! substitute in-memory doubles and callers can redirect output.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{queue, style::Print};

/// Sink accepting raw text writes plus an explicit flush.
///
/// The visual effect of the animation depends on each write becoming
/// visible before the following frame delay, so implementations must not
/// batch writes across `flush` calls.
pub trait ConsoleSink: Send + 'static {
    /// Writes the text to the sink without flushing.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Makes all previously written text visible.
    fn flush(&mut self) -> io::Result<()>;
}

/// Query for the current terminal geometry, used when erasing a line for a
/// final message.
pub trait TerminalGeometry {
    /// Current column count, or `None` if the terminal size cannot be
    /// determined (e.g. output is not a tty).
    fn columns(&self) -> Option<u16>;
}

/// Production sink writing to the process stdout.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdoutSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Production geometry querying the real terminal via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermGeometry;

impl TerminalGeometry for CrosstermGeometry {
    fn columns(&self) -> Option<u16> {
        crossterm::terminal::size().ok().map(|(columns, _rows)| columns)
    }
}
