//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! The recognizer emits diagnostic messages as structured [Diagnostic] values and hands
//! them to a [DiagnosticConsumer], which delivers them to the user. The console consumer
//! writes one line per diagnostic to standard output; alternative consumers discard or
//! collect diagnostics for tests.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticLevel;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_emitter::VecDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::SyntaxDiagnosticKind;
