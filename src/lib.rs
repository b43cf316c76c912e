//! tsguard: syntax-node shape classification for TypeScript code generators.
//!
//! The workspace is split the same way the tree flows:
//! - `scanner` - token kinds and token ranges (`tsguard-scanner`)
//! - `ast` - the arena-backed tree the classifiers read (`tsguard-ast`)
//! - `classify` - the classifiers themselves (`tsguard-classify`)
//!
//! This crate re-exports all three and hosts the `tsguard` command-line tool,
//! which classifies every node of a serialized `NodeArena`.

pub use tsguard_ast as ast;
pub use tsguard_classify as classify;
pub use tsguard_scanner as scanner;

pub use tsguard_ast::{Keyword, Node, NodeArena, NodeData, NodeIndex, NodeKind};
pub use tsguard_classify::{NodeShape, OperandCoercion};
pub use tsguard_scanner::SyntaxKind;

pub mod cli;
pub mod tracing_config;
