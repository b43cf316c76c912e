//! Token kinds for the tsguard syntax classifier.
//!
//! This crate provides the lexical vocabulary shared by the AST and the
//! classifiers:
//! - `SyntaxKind` - Token and keyword kinds
//! - Token ranges (`SyntaxKind::FIRST_COMPOUND_ASSIGNMENT`, ...) used for
//!   contiguous range checks

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;
