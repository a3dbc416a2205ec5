//! Output seam for the message channels.

use parking_lot::Mutex;
use std::fmt::Debug;
use std::io::Write;

/// Line-oriented sink the senders write to.
pub trait Console: Debug + Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes to the process stdout, one unbuffered line per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write message line to stdout");
        }
    }
}

/// Keeps lines in memory so callers can inspect what was sent.
#[derive(Debug, Default)]
pub struct BufferedConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferedConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of written lines equal to `line`.
    #[must_use]
    pub fn count(&self, line: &str) -> usize {
        self.lines.lock().iter().filter(|l| l.as_str() == line).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Console for BufferedConsole {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}
