//! NodeArena creation methods (add_* methods).
//!
//! Every builder records the new node as the parent of the children it owns,
//! so trees built through the arena always satisfy the parent/child invariant.

use super::base::{NodeIndex, NodeList};
use super::node::*;
use serde::{Deserialize, Serialize};
use tsguard_scanner::SyntaxKind;

/// Arena owning every node of one tree. Nodes refer to each other by
/// `NodeIndex`; parent links are lookups, never ownership.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity.min(Self::MAX_NODE_PREALLOC)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices of every node, in allocation order.
    pub fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len() as u32).map(NodeIndex)
    }

    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_none() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(child.0 as usize) {
            node.parent = parent;
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node and adopt all of its children.
    pub fn add_node(&mut self, pos: u32, end: u32, data: NodeData) -> NodeIndex {
        self.add_node_with_flags(pos, end, 0, data)
    }

    pub fn add_node_with_flags(
        &mut self,
        pos: u32,
        end: u32,
        flags: u16,
        data: NodeData,
    ) -> NodeIndex {
        let children = data.children();
        let index = NodeIndex(self.nodes.len() as u32);
        let mut node = Node::new(pos, end, data);
        node.flags = flags;
        self.nodes.push(node);

        for child in children {
            self.set_parent(child, index);
        }

        index
    }

    /// Add an identifier node
    pub fn add_identifier(&mut self, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::Identifier(IdentifierData {
                escaped_text: text.to_string(),
            }),
        )
    }

    /// Add a numeric literal; the value is parsed from `text` when possible.
    pub fn add_numeric_literal(&mut self, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::NumericLiteral(LiteralData {
                text: text.to_string(),
                value: text.parse::<f64>().ok(),
            }),
        )
    }

    pub fn add_string_literal(&mut self, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::StringLiteral(LiteralData {
                text: text.to_string(),
                value: None,
            }),
        )
    }

    pub fn add_regex_literal(&mut self, pos: u32, end: u32, text: &str) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::RegularExpressionLiteral(LiteralData {
                text: text.to_string(),
                value: None,
            }),
        )
    }

    pub fn add_keyword(&mut self, pos: u32, keyword: Keyword) -> NodeIndex {
        let end = pos.saturating_add(keyword.text().len() as u32);
        self.add_node(pos, end, NodeData::Keyword(KeywordData { keyword }))
    }

    /// Add a bare token node (no additional data)
    pub fn add_token(&mut self, pos: u32, end: u32, token: SyntaxKind) -> NodeIndex {
        self.add_node(pos, end, NodeData::Token(TokenData { token }))
    }

    /// Add a binary expression spanning both operands.
    pub fn add_binary_expr(
        &mut self,
        left: NodeIndex,
        operator_token: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let (pos, end) = self.span_between(left, right);
        self.add_node(
            pos,
            end,
            NodeData::BinaryExpression(BinaryExprData {
                left,
                operator_token,
                right,
            }),
        )
    }

    pub fn add_prefix_unary(
        &mut self,
        pos: u32,
        operator: SyntaxKind,
        operand: NodeIndex,
    ) -> NodeIndex {
        let end = self.end_of(operand);
        self.add_node(
            pos,
            end,
            NodeData::PrefixUnaryExpression(UnaryExprData { operator, operand }),
        )
    }

    pub fn add_postfix_unary(
        &mut self,
        operand: NodeIndex,
        operator: SyntaxKind,
        end: u32,
    ) -> NodeIndex {
        let pos = self.pos_of(operand);
        self.add_node(
            pos,
            end,
            NodeData::PostfixUnaryExpression(UnaryExprData { operator, operand }),
        )
    }

    /// Add a call expression
    pub fn add_call_expr(
        &mut self,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
        end: u32,
    ) -> NodeIndex {
        let pos = self.pos_of(expression);
        self.add_node(
            pos,
            end,
            NodeData::CallExpression(CallExprData {
                expression,
                arguments: NodeList::with_nodes(arguments),
            }),
        )
    }

    pub fn add_new_expr(
        &mut self,
        pos: u32,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
        end: u32,
    ) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::NewExpression(CallExprData {
                expression,
                arguments: NodeList::with_nodes(arguments),
            }),
        )
    }

    /// Add `expression.name`
    pub fn add_property_access(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        let (pos, end) = self.span_between(expression, name);
        self.add_node(
            pos,
            end,
            NodeData::PropertyAccessExpression(AccessExprData {
                expression,
                name_or_argument: name,
                question_dot_token: false,
            }),
        )
    }

    /// Add `expression[argument]`
    pub fn add_element_access(
        &mut self,
        expression: NodeIndex,
        argument: NodeIndex,
        end: u32,
    ) -> NodeIndex {
        let pos = self.pos_of(expression);
        self.add_node(
            pos,
            end,
            NodeData::ElementAccessExpression(AccessExprData {
                expression,
                name_or_argument: argument,
                question_dot_token: false,
            }),
        )
    }

    /// Add a function node
    pub fn add_function(&mut self, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        self.add_node(pos, end, NodeData::FunctionExpression(data))
    }

    pub fn add_arrow_function(&mut self, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        self.add_node(pos, end, NodeData::ArrowFunction(data))
    }

    pub fn add_delete_expr(&mut self, pos: u32, expression: NodeIndex) -> NodeIndex {
        let end = self.end_of(expression);
        self.add_node(
            pos,
            end,
            NodeData::DeleteExpression(UnaryExprDataEx { expression }),
        )
    }

    pub fn add_parenthesized(&mut self, pos: u32, expression: NodeIndex, end: u32) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::ParenthesizedExpression(ParenthesizedData { expression }),
        )
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex, end: u32) -> NodeIndex {
        let pos = self.pos_of(expression);
        self.add_node(
            pos,
            end,
            NodeData::ExpressionStatement(ExprStatementData { expression }),
        )
    }

    pub fn add_block(&mut self, pos: u32, end: u32, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::Block(BlockData {
                statements: NodeList::with_nodes(statements),
            }),
        )
    }

    pub fn add_variable_declaration(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let pos = self.pos_of(name);
        let end = if initializer.is_some() {
            self.end_of(initializer)
        } else {
            self.end_of(name)
        };
        self.add_node(
            pos,
            end,
            NodeData::VariableDeclaration(VariableDeclarationData { name, initializer }),
        )
    }

    /// Add a declaration list; `flags` carries `node_flags::LET`/`CONST`.
    pub fn add_variable_declaration_list(
        &mut self,
        pos: u32,
        end: u32,
        flags: u16,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node_with_flags(
            pos,
            end,
            flags,
            NodeData::VariableDeclarationList(VariableData {
                declarations: NodeList::with_nodes(declarations),
            }),
        )
    }

    pub fn add_variable_statement(&mut self, declaration_list: NodeIndex, end: u32) -> NodeIndex {
        let pos = self.pos_of(declaration_list);
        self.add_node(
            pos,
            end,
            NodeData::VariableStatement(VariableStatementData { declaration_list }),
        )
    }

    pub fn add_object_binding_pattern(
        &mut self,
        pos: u32,
        end: u32,
        elements: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::ObjectBindingPattern(BindingPatternData {
                elements: NodeList::with_nodes(elements),
            }),
        )
    }

    pub fn add_array_binding_pattern(
        &mut self,
        pos: u32,
        end: u32,
        elements: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            pos,
            end,
            NodeData::ArrayBindingPattern(BindingPatternData {
                elements: NodeList::with_nodes(elements),
            }),
        )
    }

    pub fn add_binding_element(&mut self, name: NodeIndex) -> NodeIndex {
        let (pos, end) = (self.pos_of(name), self.end_of(name));
        self.add_node(
            pos,
            end,
            NodeData::BindingElement(BindingElementData {
                dot_dot_dot_token: false,
                property_name: NodeIndex::NONE,
                name,
                initializer: NodeIndex::NONE,
            }),
        )
    }

    pub fn add_parameter(&mut self, name: NodeIndex) -> NodeIndex {
        let (pos, end) = (self.pos_of(name), self.end_of(name));
        self.add_node(
            pos,
            end,
            NodeData::Parameter(ParameterData {
                dot_dot_dot_token: false,
                name,
                initializer: NodeIndex::NONE,
            }),
        )
    }

    /// Add `for (initializer of expression) statement`
    pub fn add_for_of(
        &mut self,
        pos: u32,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let end = self.end_of(statement);
        self.add_node(
            pos,
            end,
            NodeData::ForOfStatement(ForInOfData {
                await_modifier: false,
                initializer,
                expression,
                statement,
            }),
        )
    }

    /// Add `for (initializer in expression) statement`
    pub fn add_for_in(
        &mut self,
        pos: u32,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let end = self.end_of(statement);
        self.add_node(
            pos,
            end,
            NodeData::ForInStatement(ForInOfData {
                await_modifier: false,
                initializer,
                expression,
                statement,
            }),
        )
    }

    pub fn add_source_file(
        &mut self,
        file_name: &str,
        end: u32,
        statements: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(
            0,
            end,
            NodeData::SourceFile(SourceFileData {
                file_name: file_name.to_string(),
                statements: NodeList::with_nodes(statements),
            }),
        )
    }

    fn pos_of(&self, idx: NodeIndex) -> u32 {
        self.get(idx).map_or(0, |node| node.pos)
    }

    fn end_of(&self, idx: NodeIndex) -> u32 {
        self.get(idx).map_or(0, |node| node.end)
    }

    fn span_between(&self, first: NodeIndex, last: NodeIndex) -> (u32, u32) {
        (self.pos_of(first), self.end_of(last))
    }
}
