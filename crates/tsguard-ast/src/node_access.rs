//! NodeArena access methods and the NodeView wrapper.
//!
//! Typed accessors take a `&Node` and return `None` when the node is not of
//! the requested kind, mirroring how consumers chain lookups with `?`.

use super::base::NodeIndex;
use super::node::*;
use super::node_arena::NodeArena;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Parent index of a node (`NONE` for the root or an unknown index).
    #[inline]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    /// Parent node, if the node has one that exists in this arena.
    #[inline]
    pub fn parent_node(&self, index: NodeIndex) -> Option<&Node> {
        self.get(self.get_parent(index))
    }

    /// Owned children of a node, in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        self.get(index)
            .map(|node| node.data.children())
            .unwrap_or_default()
    }

    /// Get identifier data for a node.
    #[inline]
    pub fn get_identifier<'a>(&self, node: &'a Node) -> Option<&'a IdentifierData> {
        match &node.data {
            NodeData::Identifier(data) | NodeData::PrivateIdentifier(data) => Some(data),
            _ => None,
        }
    }

    /// Get literal data for numeric, bigint, string, regex or template literals.
    #[inline]
    pub fn get_literal<'a>(&self, node: &'a Node) -> Option<&'a LiteralData> {
        match &node.data {
            NodeData::NumericLiteral(data)
            | NodeData::BigIntLiteral(data)
            | NodeData::StringLiteral(data)
            | NodeData::RegularExpressionLiteral(data)
            | NodeData::NoSubstitutionTemplateLiteral(data) => Some(data),
            _ => None,
        }
    }

    /// Keyword of a `Keyword` node, or of a `Token` node whose token is a
    /// keyword with an expression form (`null`, `this`, `true`, ...).
    #[inline]
    pub fn get_keyword(&self, node: &Node) -> Option<Keyword> {
        match &node.data {
            NodeData::Keyword(data) => Some(data.keyword),
            NodeData::Token(data) => Keyword::from_syntax_kind(data.token),
            _ => None,
        }
    }

    /// Get binary expression data.
    #[inline]
    pub fn get_binary_expr<'a>(&self, node: &'a Node) -> Option<&'a BinaryExprData> {
        match &node.data {
            NodeData::BinaryExpression(data) => Some(data),
            _ => None,
        }
    }

    /// Get prefix or postfix unary expression data.
    #[inline]
    pub fn get_unary_expr<'a>(&self, node: &'a Node) -> Option<&'a UnaryExprData> {
        match &node.data {
            NodeData::PrefixUnaryExpression(data) | NodeData::PostfixUnaryExpression(data) => {
                Some(data)
            }
            _ => None,
        }
    }

    /// Get call expression data. Returns data for `new` expressions too.
    #[inline]
    pub fn get_call_expr<'a>(&self, node: &'a Node) -> Option<&'a CallExprData> {
        match &node.data {
            NodeData::CallExpression(data) | NodeData::NewExpression(data) => Some(data),
            _ => None,
        }
    }

    /// Get function data for function expressions and arrows.
    #[inline]
    pub fn get_function<'a>(&self, node: &'a Node) -> Option<&'a FunctionData> {
        match &node.data {
            NodeData::FunctionExpression(data) | NodeData::ArrowFunction(data) => Some(data),
            _ => None,
        }
    }

    /// Get variable declaration list data.
    #[inline]
    pub fn get_variable<'a>(&self, node: &'a Node) -> Option<&'a VariableData> {
        match &node.data {
            NodeData::VariableDeclarationList(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_variable_declaration<'a>(
        &self,
        node: &'a Node,
    ) -> Option<&'a VariableDeclarationData> {
        match &node.data {
            NodeData::VariableDeclaration(data) => Some(data),
            _ => None,
        }
    }

    #[inline]
    pub fn get_source_file<'a>(&self, node: &'a Node) -> Option<&'a SourceFileData> {
        match &node.data {
            NodeData::SourceFile(data) => Some(data),
            _ => None,
        }
    }

    /// Source file data at an index.
    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        let node = self.get(index)?;
        self.get_source_file(node)
    }

    /// Escaped text of an identifier at an index.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node)
            .map(|data| data.escaped_text.as_str())
    }
}

// =============================================================================
// NodeView
// =============================================================================

/// A borrowed node together with its arena and index.
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    pub node: &'a Node,
    pub arena: &'a NodeArena,
    pub index: NodeIndex,
}

impl<'a> NodeView<'a> {
    /// Create a new NodeView
    #[inline]
    pub fn new(arena: &'a NodeArena, index: NodeIndex) -> Option<NodeView<'a>> {
        arena.get(index).map(|node| NodeView { node, arena, index })
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    #[inline]
    pub fn data(&self) -> &'a NodeData {
        &self.node.data
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.node.pos
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.node.end
    }

    #[inline]
    pub fn flags(&self) -> u16 {
        self.node.flags
    }

    /// Get parent node index
    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.node.parent
    }

    /// Get the parent as a NodeView
    #[inline]
    pub fn parent_view(&self) -> Option<NodeView<'a>> {
        NodeView::new(self.arena, self.node.parent)
    }

    /// Get a child node as a NodeView
    #[inline]
    pub fn child(&self, index: NodeIndex) -> Option<NodeView<'a>> {
        NodeView::new(self.arena, index)
    }

    pub fn children(&self) -> Vec<NodeIndex> {
        self.node.data.children()
    }
}
