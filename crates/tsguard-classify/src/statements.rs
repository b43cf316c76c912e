//! Statement-shape classifiers for for-of loop initializers.
//!
//! A for-of initializer takes one of four shapes:
//!
//! | source | shape |
//! |---|---|
//! | `for (let x of xs)` | simple declared initializer |
//! | `for (x of xs)` | identifier initializer |
//! | `for (let [a, b] of xs)` / `for (let {a} of xs)` | destructuring (neither) |
//! | `for (obj.x of xs)` / `for ([a, b] of xs)` | expression (neither) |
//!
//! A declaration list with more than one declaration is a syntax error in a
//! for-of head; it classifies as neither.

use crate::views::{ForOfWithIdentifierInitializer, ForOfWithSimpleInitializer};
use tsguard_ast::{NodeArena, NodeData, NodeIndex};

/// `for (let x of xs)`: the initializer is a declaration list holding exactly
/// one declaration.
pub fn as_for_of_with_simple_initializer(
    arena: &NodeArena,
    idx: NodeIndex,
) -> Option<ForOfWithSimpleInitializer<'_>> {
    let NodeData::ForOfStatement(for_of) = &arena.get(idx)?.data else {
        return None;
    };
    let list_node = arena.get(for_of.initializer)?;
    let list = arena.get_variable(list_node)?;
    let [declaration] = list.declarations.nodes.as_slice() else {
        return None;
    };
    let declaration = *declaration;
    let decl = arena.get_variable_declaration(arena.get(declaration)?)?;
    // A binding pattern is a destructuring form, not a simple binding.
    if !matches!(arena.get(decl.name)?.data, NodeData::Identifier(_)) {
        return None;
    }
    Some(ForOfWithSimpleInitializer {
        index: idx,
        for_of,
        declaration_list: for_of.initializer,
        declaration,
        list_flags: list_node.flags,
    })
}

pub fn is_for_of_with_simple_initializer(arena: &NodeArena, idx: NodeIndex) -> bool {
    as_for_of_with_simple_initializer(arena, idx).is_some()
}

/// `for (x of xs)`: the initializer is a bare identifier.
pub fn as_for_of_with_identifier_initializer(
    arena: &NodeArena,
    idx: NodeIndex,
) -> Option<ForOfWithIdentifierInitializer<'_>> {
    let NodeData::ForOfStatement(for_of) = &arena.get(idx)?.data else {
        return None;
    };
    let NodeData::Identifier(ident) = &arena.get(for_of.initializer)?.data else {
        return None;
    };
    Some(ForOfWithIdentifierInitializer {
        index: idx,
        for_of,
        identifier: for_of.initializer,
        name: &ident.escaped_text,
    })
}

pub fn is_for_of_with_identifier_initializer(arena: &NodeArena, idx: NodeIndex) -> bool {
    as_for_of_with_identifier_initializer(arena, idx).is_some()
}

#[cfg(test)]
#[path = "../tests/statements.rs"]
mod tests;
