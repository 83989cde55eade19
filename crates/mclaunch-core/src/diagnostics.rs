//! Error reporting channels.
//!
//! Encoding failures are reported as narrow text, dispatch failures as wide
//! text. Sinks keep the two channels apart so callers can tell which was
//! used.

use std::cell::RefCell;
use std::io::Write;

/// Destination for human-readable error lines.
pub trait DiagnosticSink {
    fn narrow(&self, line: &str);
    fn wide(&self, line: &[u16]);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn narrow(&self, line: &str) {
        (**self).narrow(line)
    }

    fn wide(&self, line: &[u16]) {
        (**self).wide(line)
    }
}

/// Writes both channels to the process's standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn narrow(&self, line: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn wide(&self, line: &[u16]) {
        // stderr transcodes to the console's wide API on Windows.
        let text = String::from_utf16_lossy(line);
        let _ = writeln!(std::io::stderr().lock(), "{}", text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    Narrow(String),
    Wide(Vec<u16>),
}

impl Diagnostic {
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Wide(_))
    }

    pub fn text(&self) -> String {
        match self {
            Self::Narrow(line) => line.clone(),
            Self::Wide(units) => String::from_utf16_lossy(units),
        }
    }
}

/// Captures reported lines in order, for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Diagnostic> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn narrow(&self, line: &str) {
        self.lines
            .borrow_mut()
            .push(Diagnostic::Narrow(line.to_string()));
    }

    fn wide(&self, line: &[u16]) {
        self.lines.borrow_mut().push(Diagnostic::Wide(line.to_vec()));
    }
}
