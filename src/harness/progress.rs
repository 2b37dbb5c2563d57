//! Progress reporting for interactive runs.
//!
//! Progress output is informational only; a failed write never affects
//! the outcome of a run.

use std::io::{self, Stdout, Write};

use log::warn;

/// Receives progress events from the runners.
pub trait Progress {
    /// A test group named `name` starts.
    fn begin(&mut self, name: &str);

    /// One unit of work was verified.
    fn tick(&mut self);

    /// One runner finished and the next one is about to start.
    fn pause(&mut self);

    /// The test group completed successfully.
    fn finish(&mut self);
}

/// Writes the classic dotted transcript:
///
/// ```text
/// Test x25519: .. .................... done.
/// ```
///
/// Every event is flushed immediately so dots appear as work proceeds.
pub struct ConsoleProgress<W: Write = Stdout> {
    out: W,
}

impl ConsoleProgress<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());

        if let Err(err) = result {
            warn!("progress output failed: {err}");
        }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, name: &str) {
        self.emit(&format!("Test {name}: "));
    }

    fn tick(&mut self) {
        self.emit(".");
    }

    fn pause(&mut self) {
        self.emit(" ");
    }

    fn finish(&mut self) {
        self.emit(" done.\n");
    }
}

/// Discards all progress events.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Progress for Silent {
    fn begin(&mut self, _name: &str) {}
    fn tick(&mut self) {}
    fn pause(&mut self) {}
    fn finish(&mut self) {}
}
