//! Core of a tree-walking interpreter for a small expression-oriented language.
//!
//! Data flows linearly: source text is tokenized by [`lexer`], parsed into an
//! abstract syntax tree by [`parser`], and walked by [`eval`] against a
//! lexically scoped [`environment`] to produce a runtime [`object::Object`].
//! [`repl`] wires those pieces into the interactive driver.

pub mod ast;
pub mod environment;
pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
