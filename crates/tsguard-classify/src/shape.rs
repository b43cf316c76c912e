//! Aggregate classification: every shape a node matches.

use crate::expressions::*;
use crate::keywords::*;
use crate::operators::{OperandCoercion, binary_operand_coercion};
use crate::statements::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use tsguard_ast::{NodeArena, NodeIndex};

/// A named syntactic shape recognized by one of the classifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    EqualsExpression,
    CompoundAssignmentExpression,
    MethodCall,
    FunctionArgInMethodCall,
    FieldElementAccess,
    FieldPropertyAccess,
    Literal,
    UnaryExpression,
    DeleteExpression,
    ThisKeyword,
    #[serde(rename = "null-or-undefined-or-nan")]
    NullOrUndefinedOrNaN,
    ForOfWithSimpleInitializer,
    ForOfWithIdentifierInitializer,
    NumericCoercingOperator,
    IntegerCoercingOperator,
}

impl NodeShape {
    pub const ALL: [NodeShape; 15] = [
        NodeShape::EqualsExpression,
        NodeShape::CompoundAssignmentExpression,
        NodeShape::MethodCall,
        NodeShape::FunctionArgInMethodCall,
        NodeShape::FieldElementAccess,
        NodeShape::FieldPropertyAccess,
        NodeShape::Literal,
        NodeShape::UnaryExpression,
        NodeShape::DeleteExpression,
        NodeShape::ThisKeyword,
        NodeShape::NullOrUndefinedOrNaN,
        NodeShape::ForOfWithSimpleInitializer,
        NodeShape::ForOfWithIdentifierInitializer,
        NodeShape::NumericCoercingOperator,
        NodeShape::IntegerCoercingOperator,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NodeShape::EqualsExpression => "equals-expression",
            NodeShape::CompoundAssignmentExpression => "compound-assignment-expression",
            NodeShape::MethodCall => "method-call",
            NodeShape::FunctionArgInMethodCall => "function-arg-in-method-call",
            NodeShape::FieldElementAccess => "field-element-access",
            NodeShape::FieldPropertyAccess => "field-property-access",
            NodeShape::Literal => "literal",
            NodeShape::UnaryExpression => "unary-expression",
            NodeShape::DeleteExpression => "delete-expression",
            NodeShape::ThisKeyword => "this-keyword",
            NodeShape::NullOrUndefinedOrNaN => "null-or-undefined-or-nan",
            NodeShape::ForOfWithSimpleInitializer => "for-of-with-simple-initializer",
            NodeShape::ForOfWithIdentifierInitializer => "for-of-with-identifier-initializer",
            NodeShape::NumericCoercingOperator => "numeric-coercing-operator",
            NodeShape::IntegerCoercingOperator => "integer-coercing-operator",
        }
    }

    /// Run the classifier for this shape.
    pub fn matches(self, arena: &NodeArena, idx: NodeIndex) -> bool {
        match self {
            NodeShape::EqualsExpression => is_equals_expression(arena, idx),
            NodeShape::CompoundAssignmentExpression => {
                is_compound_assignment_expression(arena, idx)
            }
            NodeShape::MethodCall => is_method_call(arena, idx),
            NodeShape::FunctionArgInMethodCall => is_function_arg_in_method_call(arena, idx),
            NodeShape::FieldElementAccess => is_field_element_access(arena, idx),
            NodeShape::FieldPropertyAccess => is_field_property_access(arena, idx),
            NodeShape::Literal => is_literal(arena, idx),
            NodeShape::UnaryExpression => is_unary_expression(arena, idx),
            NodeShape::DeleteExpression => is_delete_expression(arena, idx),
            NodeShape::ThisKeyword => is_this_keyword(arena, idx),
            NodeShape::NullOrUndefinedOrNaN => is_null_or_undefined_or_nan(arena, idx),
            NodeShape::ForOfWithSimpleInitializer => is_for_of_with_simple_initializer(arena, idx),
            NodeShape::ForOfWithIdentifierInitializer => {
                is_for_of_with_identifier_initializer(arena, idx)
            }
            NodeShape::NumericCoercingOperator => {
                binary_operand_coercion(arena, idx) == Some(OperandCoercion::Numeric)
            }
            NodeShape::IntegerCoercingOperator => {
                binary_operand_coercion(arena, idx) == Some(OperandCoercion::Integer)
            }
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| format!("unknown shape '{s}'"))
    }
}

/// Every shape `idx` matches, in `NodeShape::ALL` order.
pub fn classify(arena: &NodeArena, idx: NodeIndex) -> SmallVec<[NodeShape; 4]> {
    NodeShape::ALL
        .into_iter()
        .filter(|shape| shape.matches(arena, idx))
        .collect()
}

#[cfg(test)]
#[path = "../tests/shape.rs"]
mod tests;
