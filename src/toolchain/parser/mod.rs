//! A recursive-descent recognizer for the MiniLang grammar.
//!
//! Each grammar rule maps to one handler function operating on a shared [context::Context]
//! that owns the parse cursor and the diagnostic sink. The recognizer validates grammatical
//! shape only, building no tree, and repairs errors locally: report one diagnostic,
//! consume one token, return to the calling rule. There is no synchronization to a safe
//! token, so diagnostics after the first may be spurious.

mod context;
mod grammar;

pub use grammar::recognize;
