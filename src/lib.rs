//! MiniLang language front end.
//!
//! MiniLang is a small imperative language with assignments, `if`/`else` conditionals,
//! `print` statements, and integer arithmetic. This crate contains a lexical scanner that
//! splits MiniLang source text into tokens, and a recursive-descent recognizer that checks
//! the token stream against the MiniLang grammar. The recognizer validates grammatical
//! shape only; it builds no syntax tree and reports violations as diagnostics while
//! recovering locally and continuing.
//!

pub mod toolchain;
