//! The MiniLang compilation front end: lexical scanning, grammar recognition, and
//! diagnostic plumbing shared between them.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
