//! Expression-shape classifiers.
//!
//! All classifiers take the arena and an index and never look further than
//! the node's parent and direct children. An index that does not resolve to a
//! node classifies as `false`.

use crate::operators::is_compound_assignment;
use crate::views::{
    DeleteExpression, DeleteTarget, FunctionArgInMethodCall, MethodCallExpression,
};
use tsguard_ast::{Keyword, NodeArena, NodeData, NodeIndex};
use tsguard_scanner::SyntaxKind;

/// `a = b` (plain assignment, not a compound form).
pub fn is_equals_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    binary_operator(arena, idx) == Some(SyntaxKind::EqualsToken)
}

/// `a += b`, `a >>>= b`, ...
pub fn is_compound_assignment_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    binary_operator(arena, idx).is_some_and(is_compound_assignment)
}

#[inline]
fn binary_operator(arena: &NodeArena, idx: NodeIndex) -> Option<SyntaxKind> {
    let node = arena.get(idx)?;
    arena.get_binary_expr(node).map(|bin| bin.operator_token)
}

/// A call whose callee is a property access: `obj.method(args)`.
pub fn as_method_call(arena: &NodeArena, idx: NodeIndex) -> Option<MethodCallExpression<'_>> {
    let NodeData::CallExpression(call) = &arena.get(idx)?.data else {
        return None;
    };
    let NodeData::PropertyAccessExpression(property_access) = &arena.get(call.expression)?.data
    else {
        return None;
    };
    Some(MethodCallExpression {
        index: idx,
        call,
        callee: call.expression,
        property_access,
    })
}

pub fn is_method_call(arena: &NodeArena, idx: NodeIndex) -> bool {
    as_method_call(arena, idx).is_some()
}

/// A function expression passed as the first argument of a method call:
/// `items.forEach(function (item) { ... })`.
pub fn as_function_arg_in_method_call(
    arena: &NodeArena,
    idx: NodeIndex,
) -> Option<FunctionArgInMethodCall<'_>> {
    let node = arena.get(idx)?;
    let NodeData::FunctionExpression(function) = &node.data else {
        return None;
    };
    let parent = node.parent;
    let NodeData::CallExpression(call) = &arena.get(parent)?.data else {
        return None;
    };
    if call.arguments.first() != idx {
        return None;
    }
    let method_call = as_method_call(arena, parent)?;
    Some(FunctionArgInMethodCall {
        index: idx,
        function,
        method_call,
    })
}

pub fn is_function_arg_in_method_call(arena: &NodeArena, idx: NodeIndex) -> bool {
    as_function_arg_in_method_call(arena, idx).is_some()
}

/// True if `idx` is the callee of its parent call expression.
///
/// The same `a.b` / `a[b]` shape is a method-call receiver in that position
/// and a field access everywhere else.
pub fn is_callee_of_parent_call(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(parent) = arena.parent_node(idx) else {
        return false;
    };
    matches!(&parent.data, NodeData::CallExpression(call) if call.expression == idx)
}

/// `a[b]` read or written as a value, not invoked.
pub fn is_field_element_access(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    matches!(node.data, NodeData::ElementAccessExpression(_))
        && !is_callee_of_parent_call(arena, idx)
}

/// `a.b` read or written as a value, not invoked.
pub fn is_field_property_access(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    matches!(node.data, NodeData::PropertyAccessExpression(_))
        && !is_callee_of_parent_call(arena, idx)
}

/// Numeric, string or regular-expression literal, or `true`/`false`.
pub fn is_literal(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    match &node.data {
        NodeData::NumericLiteral(_)
        | NodeData::StringLiteral(_)
        | NodeData::RegularExpressionLiteral(_) => true,
        _ => matches!(
            arena.get_keyword(node),
            Some(Keyword::True | Keyword::False)
        ),
    }
}

/// Prefix or postfix unary expression (`-a`, `!a`, `++a`, `a--`).
pub fn is_unary_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    let Some(node) = arena.get(idx) else {
        return false;
    };
    arena.get_unary_expr(node).is_some()
}

/// `delete obj.prop` or `delete obj[key]`.
pub fn as_delete_expression(arena: &NodeArena, idx: NodeIndex) -> Option<DeleteExpression<'_>> {
    let NodeData::DeleteExpression(delete) = &arena.get(idx)?.data else {
        return None;
    };
    let operand = delete.expression;
    let (access, target) = match &arena.get(operand)?.data {
        NodeData::PropertyAccessExpression(access) => (access, DeleteTarget::Property),
        NodeData::ElementAccessExpression(access) => (access, DeleteTarget::Element),
        _ => return None,
    };
    Some(DeleteExpression {
        index: idx,
        operand,
        access,
        target,
    })
}

pub fn is_delete_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    as_delete_expression(arena, idx).is_some()
}

#[cfg(test)]
#[path = "../tests/expressions.rs"]
mod tests;
