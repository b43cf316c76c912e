//! Generic node-shape guard.
//!
//! Values arriving from outside the arena (a serialized tree, a JSON-RPC
//! payload) are checked here before anything dereferences their fields.

use serde_json::Value;
use tracing::trace;
use tsguard_ast::{NodeArena, NodeIndex};

/// Header fields every serialized node must carry.
pub const REQUIRED_NODE_FIELDS: [&str; 4] = ["kind", "flags", "pos", "end"];

/// True if `value` is an object with non-null `kind`, `flags`, `pos` and `end`.
///
/// Total over every JSON value: `null`, numbers, strings, arrays and empty
/// objects all yield `false`.
pub fn is_node(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        trace!(value_type = json_type_name(value), "is_node: not an object");
        return false;
    };

    for field in REQUIRED_NODE_FIELDS {
        match object.get(field) {
            Some(Value::Null) | None => {
                trace!(field, "is_node: required field missing");
                return false;
            }
            Some(_) => {}
        }
    }
    true
}

/// True if `idx` names a node stored in `arena`.
#[inline]
pub fn is_node_index(arena: &NodeArena, idx: NodeIndex) -> bool {
    arena.get(idx).is_some()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../tests/node_guard.rs"]
mod tests;
