//! Narrowed views returned by the `as_*` classifiers.
//!
//! Each view borrows the data of a node that has already been checked to
//! have the refined shape, so consumers can reach the interesting children
//! without re-matching.

use tsguard_ast::node::{AccessExprData, CallExprData, ForInOfData, FunctionData};
use tsguard_ast::NodeIndex;

/// `receiver.name(arguments)`
#[derive(Clone, Copy, Debug)]
pub struct MethodCallExpression<'a> {
    pub index: NodeIndex,
    pub call: &'a CallExprData,
    /// The property access serving as callee.
    pub callee: NodeIndex,
    pub property_access: &'a AccessExprData,
}

impl<'a> MethodCallExpression<'a> {
    #[inline]
    pub fn receiver(&self) -> NodeIndex {
        self.property_access.expression
    }

    #[inline]
    pub fn name(&self) -> NodeIndex {
        self.property_access.name_or_argument
    }

    #[inline]
    pub fn arguments(&self) -> &'a [NodeIndex] {
        &self.call.arguments.nodes
    }
}

/// `receiver.name(function () { ... }, ...)`
#[derive(Clone, Copy, Debug)]
pub struct FunctionArgInMethodCall<'a> {
    pub index: NodeIndex,
    pub function: &'a FunctionData,
    pub method_call: MethodCallExpression<'a>,
}

/// `for (let x of xs)`: a declaration list with one declaration.
#[derive(Clone, Copy, Debug)]
pub struct ForOfWithSimpleInitializer<'a> {
    pub index: NodeIndex,
    pub for_of: &'a ForInOfData,
    pub declaration_list: NodeIndex,
    pub declaration: NodeIndex,
    /// Flags of the declaration list (`node_flags::LET`, `CONST`, ...).
    pub list_flags: u16,
}

/// `for (x of xs)`: an already-declared loop variable.
#[derive(Clone, Copy, Debug)]
pub struct ForOfWithIdentifierInitializer<'a> {
    pub index: NodeIndex,
    pub for_of: &'a ForInOfData,
    pub identifier: NodeIndex,
    pub name: &'a str,
}

/// Operand shape of a `delete` the generator can rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Property,
    Element,
}

/// `delete obj.prop` or `delete obj[key]`
#[derive(Clone, Copy, Debug)]
pub struct DeleteExpression<'a> {
    pub index: NodeIndex,
    pub operand: NodeIndex,
    pub access: &'a AccessExprData,
    pub target: DeleteTarget,
}
