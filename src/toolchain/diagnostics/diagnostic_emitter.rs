use std::fmt;
use std::io::Write;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Note,
    Warning,
    Error,
}

/// A complete diagnostic: the severity level, the structured kind, and the rendered
/// message body.
///
/// The recognizer's output contract is one line of plain text per violation, so the body
/// carries the full user-visible message and [fmt::Display] renders it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub body: String,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, kind: DiagnosticKind, body: String) -> Diagnostic {
        Diagnostic { level, kind, body }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are
/// emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic);
    fn flush(&mut self);
}

pub struct StreamDiagnosticConsumer<W: Write> {
    stream: std::io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream) }
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: Diagnostic) {
        let _ = writeln!(self.stream, "{}", diag);
    }

    fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

/// Builds a stream consumer over standard output, where the driver reports syntax
/// violations.
pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<impl Write> {
    StreamDiagnosticConsumer::new(std::io::stdout())
}

/// A consumer that discards every diagnostic.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: Diagnostic) {}
    fn flush(&mut self) {}
}

/// A consumer that collects diagnostics in order of emission, for inspection in tests.
#[derive(Default)]
pub struct VecDiagnosticConsumer {
    pub diagnostics: Vec<Diagnostic>,
}

impl VecDiagnosticConsumer {
    pub fn new() -> VecDiagnosticConsumer {
        VecDiagnosticConsumer { diagnostics: Vec::new() }
    }

    pub fn bodies(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.body.as_str()).collect()
    }
}

impl DiagnosticConsumer for VecDiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    fn flush(&mut self) {}
}
