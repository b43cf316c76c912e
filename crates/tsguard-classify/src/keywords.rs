//! Keyword and sentinel classifiers.

use tsguard_ast::{Keyword, NodeArena, NodeIndex};

#[inline]
fn keyword_at(arena: &NodeArena, idx: NodeIndex) -> Option<Keyword> {
    let node = arena.get(idx)?;
    arena.get_keyword(node)
}

/// The `this` keyword.
pub fn is_this_keyword(arena: &NodeArena, idx: NodeIndex) -> bool {
    keyword_at(arena, idx) == Some(Keyword::This)
}

/// `null`, `undefined`, or the `NaN` sentinel keyword.
pub fn is_null_or_undefined_or_nan(arena: &NodeArena, idx: NodeIndex) -> bool {
    matches!(
        keyword_at(arena, idx),
        Some(Keyword::Null | Keyword::Undefined | Keyword::NaN)
    )
}

#[cfg(test)]
#[path = "../tests/keywords.rs"]
mod tests;
