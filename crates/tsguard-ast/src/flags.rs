//! Node flag bits.
//!
//! Flags are opaque to the classifiers; they are carried so that consumers can
//! distinguish `let`/`const`/`var` lists and synthesized nodes.

pub mod node_flags {
    pub const NONE: u16 = 0;
    pub const LET: u16 = 1 << 0;
    pub const CONST: u16 = 1 << 1;
    pub const USING: u16 = 1 << 2;
    pub const AWAIT_USING: u16 = CONST | USING;
    pub const BLOCK_SCOPED: u16 = LET | CONST | USING;
    /// Node was created by a transform rather than parsed from source.
    pub const SYNTHESIZED: u16 = 1 << 4;
    pub const OPTIONAL_CHAIN: u16 = 1 << 6;
}
