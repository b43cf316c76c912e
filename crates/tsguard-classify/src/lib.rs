//! Syntax-shape classifiers for the tsguard AST.
//!
//! Every classifier is a pure predicate over a `NodeArena` and a `NodeIndex`:
//! it reads the node, at most its parent and direct children, and returns a
//! `bool` (or, for the `as_*` forms, a borrowed view of the refined shape).
//! Classifiers never mutate the tree and never panic on malformed input.
//! Code generators call them during their own tree walk.
//!
//! - `node_guard` - raw-value guard for nodes of unknown provenance
//! - `expressions` - call, access, literal, unary and delete shapes
//! - `statements` - for-of initializer shapes
//! - `keywords` - `this`, `null`/`undefined`/`NaN`
//! - `operators` - compound assignment and operand-coercion tables
//! - `shape` - `NodeShape` and `classify` over all of the above

pub mod expressions;
pub mod keywords;
pub mod node_guard;
pub mod operators;
pub mod shape;
pub mod statements;
pub mod views;

pub use expressions::{
    as_delete_expression, as_function_arg_in_method_call, as_method_call,
    is_callee_of_parent_call, is_compound_assignment_expression, is_delete_expression,
    is_equals_expression, is_field_element_access, is_field_property_access,
    is_function_arg_in_method_call, is_literal, is_method_call, is_unary_expression,
};
pub use keywords::{is_null_or_undefined_or_nan, is_this_keyword};
pub use node_guard::{is_node, is_node_index};
pub use operators::{
    OperandCoercion, binary_operand_coercion, compound_assignment_base, is_compound_assignment,
    is_integer_op, is_number_op, operand_coercion,
};
pub use shape::{NodeShape, classify};
pub use statements::{
    as_for_of_with_identifier_initializer, as_for_of_with_simple_initializer,
    is_for_of_with_identifier_initializer, is_for_of_with_simple_initializer,
};
pub use views::{
    DeleteExpression, DeleteTarget, ForOfWithIdentifierInitializer, ForOfWithSimpleInitializer,
    FunctionArgInMethodCall, MethodCallExpression,
};
