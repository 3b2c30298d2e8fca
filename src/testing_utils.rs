//! Test utilities for exercising animations without a real terminal.

use std::io;
use std::sync::{Arc, Mutex};

use crate::console::{ConsoleSink, TerminalGeometry};

/// In-memory console sink recording every write as a separate segment.
///
/// Inspection happens through a [`RecordedOutput`] handle obtained from
/// [`RecordingSink::handle`] before the sink is moved into a runner.
pub struct RecordingSink {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle observing everything written to this sink.
    pub fn handle(&self) -> RecordedOutput {
        RecordedOutput {
            writes: Arc::clone(&self.writes),
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for RecordingSink {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writes
            .lock()
            .expect("recording sink lock poisoned")
            .push(text.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Observer handle for a [`RecordingSink`].
#[derive(Clone)]
pub struct RecordedOutput {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordedOutput {
    /// All writes so far, one entry per `write_str` call.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .expect("recording sink lock poisoned")
            .clone()
    }

    /// Number of `write_str` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
            .lock()
            .expect("recording sink lock poisoned")
            .len()
    }

    /// All writes so far concatenated in order.
    pub fn combined(&self) -> String {
        self.writes
            .lock()
            .expect("recording sink lock poisoned")
            .concat()
    }
}

/// Geometry collaborator reporting a fixed column count.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeometry(pub u16);

impl TerminalGeometry for FixedGeometry {
    fn columns(&self) -> Option<u16> {
        Some(self.0)
    }
}

/// Geometry collaborator that never knows the terminal size, for testing
/// the fallback blank-width path.
#[derive(Debug, Clone, Copy)]
pub struct UnknownGeometry;

impl TerminalGeometry for UnknownGeometry {
    fn columns(&self) -> Option<u16> {
        None
    }
}
