//! Arena-backed AST for the tsguard syntax classifier.
//!
//! This crate provides the tree representation the classifiers consume:
//! - `NodeIndex`, `NodeList` - handles and ordered child lists
//! - `Node`, `NodeData`, `NodeKind` - node header plus tagged-union payload
//! - `NodeArena` - node storage with parent-recording builders
//! - `NodeView` - borrowed navigation wrapper
//!
//! Building trees from source text is the job of an external parser; the
//! `add_*` builders exist for that parser and for tests.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod flags;
pub use flags::node_flags;

pub mod node;
pub use node::{Keyword, Node, NodeData, NodeKind};

mod node_access;
pub use node_access::NodeView;

mod node_arena;
pub use node_arena::NodeArena;

pub use tsguard_scanner::SyntaxKind;

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod tests;
