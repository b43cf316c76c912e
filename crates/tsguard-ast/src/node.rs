//! Node representation for the classifier's AST.
//!
//! Every node carries the same header (`flags`, `pos`, `end`, `parent`) and a
//! `NodeData` payload. `NodeData` is a tagged union with one variant per
//! syntactic kind, so code that needs a call's callee or a loop's initializer
//! matches on the variant instead of probing for fields.
//!
//! Serialized form (JSON) flattens the payload into the header, with the
//! variant name stored under `kind`:
//!
//! ```json
//! { "kind": "CallExpression", "flags": 0, "pos": 0, "end": 11, "parent": 4294967295,
//!   "expression": 3, "arguments": { "nodes": [4] } }
//! ```

use super::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};
use tsguard_scanner::SyntaxKind;

/// A single AST node: shared header plus kind-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Packed `node_flags`
    #[serde(default)]
    pub flags: u16,
    /// Start position in source (character index)
    pub pos: u32,
    /// End position in source (character index)
    pub end: u32,
    /// Enclosing node (`NodeIndex::NONE` at the root)
    #[serde(default)]
    pub parent: NodeIndex,
    #[serde(flatten)]
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn new(pos: u32, end: u32, data: NodeData) -> Node {
        Node {
            flags: 0,
            pos,
            end,
            parent: NodeIndex::NONE,
            data,
        }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    #[inline]
    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }
}

// =============================================================================
// Keywords
// =============================================================================

/// Keywords that appear as standalone expression nodes.
///
/// `NaN` has no token of its own; it is a keyword here so that consumers
/// treat it exactly like `null` and `undefined`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    True,
    False,
    Null,
    Undefined,
    NaN,
    This,
    Super,
}

impl Keyword {
    /// Scanner token for this keyword. `NaN` has none.
    pub const fn syntax_kind(self) -> Option<SyntaxKind> {
        match self {
            Keyword::True => Some(SyntaxKind::TrueKeyword),
            Keyword::False => Some(SyntaxKind::FalseKeyword),
            Keyword::Null => Some(SyntaxKind::NullKeyword),
            Keyword::Undefined => Some(SyntaxKind::UndefinedKeyword),
            Keyword::NaN => None,
            Keyword::This => Some(SyntaxKind::ThisKeyword),
            Keyword::Super => Some(SyntaxKind::SuperKeyword),
        }
    }

    pub const fn from_syntax_kind(kind: SyntaxKind) -> Option<Keyword> {
        match kind {
            SyntaxKind::TrueKeyword => Some(Keyword::True),
            SyntaxKind::FalseKeyword => Some(Keyword::False),
            SyntaxKind::NullKeyword => Some(Keyword::Null),
            SyntaxKind::UndefinedKeyword => Some(Keyword::Undefined),
            SyntaxKind::ThisKeyword => Some(Keyword::This),
            SyntaxKind::SuperKeyword => Some(Keyword::Super),
            _ => None,
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Keyword::NaN => "NaN",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Null => "null",
            Keyword::Undefined => "undefined",
            Keyword::This => "this",
            Keyword::Super => "super",
        }
    }
}

// =============================================================================
// Typed Data
// =============================================================================

/// Data for identifier nodes (Identifier, PrivateIdentifier)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for numeric/string/regex/template literals
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
    /// For numeric literals only
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordData {
    pub keyword: Keyword,
}

/// Data for bare token nodes (operator tokens kept as nodes)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenData {
    pub token: SyntaxKind,
}

/// Data for binary expressions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

/// Data for prefix/postfix unary expressions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

/// Data for keyword-operator expressions (`delete`, `typeof`, `void`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnaryExprDataEx {
    pub expression: NodeIndex,
}

/// Data for call/new expressions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    #[serde(default)]
    pub arguments: NodeList,
}

/// Data for property/element access
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
    #[serde(default)]
    pub question_dot_token: bool,
}

/// Data for function expressions and arrows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionData {
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub asterisk_token: bool,
    #[serde(default)]
    pub name: NodeIndex,
    #[serde(default)]
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterData {
    #[serde(default)]
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    #[serde(default)]
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    #[serde(default)]
    pub statements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableStatementData {
    pub declaration_list: NodeIndex,
}

/// Data for variable declaration lists (`let a, b`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableData {
    #[serde(default)]
    pub declarations: NodeList,
}

/// Data for a single variable declaration (`a = 1`, `{ a } = obj`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    #[serde(default)]
    pub initializer: NodeIndex,
}

/// Data for object/array binding patterns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingPatternData {
    #[serde(default)]
    pub elements: NodeList,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingElementData {
    #[serde(default)]
    pub dot_dot_dot_token: bool,
    #[serde(default)]
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    #[serde(default)]
    pub initializer: NodeIndex,
}

/// Data for for-in/for-of statements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForInOfData {
    #[serde(default)]
    pub await_modifier: bool,
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    #[serde(default)]
    pub statements: NodeList,
}

// =============================================================================
// Node Data
// =============================================================================

/// Kind-specific payload of a node. The variant is the node's kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeData {
    // Names
    Identifier(IdentifierData),
    PrivateIdentifier(IdentifierData),

    // Literals
    NumericLiteral(LiteralData),
    BigIntLiteral(LiteralData),
    StringLiteral(LiteralData),
    RegularExpressionLiteral(LiteralData),
    NoSubstitutionTemplateLiteral(LiteralData),

    // Tokens
    Keyword(KeywordData),
    Token(TokenData),

    // Expressions
    BinaryExpression(BinaryExprData),
    PrefixUnaryExpression(UnaryExprData),
    PostfixUnaryExpression(UnaryExprData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    PropertyAccessExpression(AccessExprData),
    ElementAccessExpression(AccessExprData),
    FunctionExpression(FunctionData),
    ArrowFunction(FunctionData),
    DeleteExpression(UnaryExprDataEx),
    TypeOfExpression(UnaryExprDataEx),
    VoidExpression(UnaryExprDataEx),
    ParenthesizedExpression(ParenthesizedData),

    // Statements
    ExpressionStatement(ExprStatementData),
    Block(BlockData),
    VariableStatement(VariableStatementData),
    ForOfStatement(ForInOfData),
    ForInStatement(ForInOfData),

    // Declarations
    VariableDeclarationList(VariableData),
    VariableDeclaration(VariableDeclarationData),
    ObjectBindingPattern(BindingPatternData),
    ArrayBindingPattern(BindingPatternData),
    BindingElement(BindingElementData),
    Parameter(ParameterData),

    SourceFile(SourceFileData),
}

/// Fieldless discriminant of `NodeData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Identifier,
    PrivateIdentifier,
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    Keyword,
    Token,
    BinaryExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    FunctionExpression,
    ArrowFunction,
    DeleteExpression,
    TypeOfExpression,
    VoidExpression,
    ParenthesizedExpression,
    ExpressionStatement,
    Block,
    VariableStatement,
    ForOfStatement,
    ForInStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,
    Parameter,
    SourceFile,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Identifier(_) => NodeKind::Identifier,
            NodeData::PrivateIdentifier(_) => NodeKind::PrivateIdentifier,
            NodeData::NumericLiteral(_) => NodeKind::NumericLiteral,
            NodeData::BigIntLiteral(_) => NodeKind::BigIntLiteral,
            NodeData::StringLiteral(_) => NodeKind::StringLiteral,
            NodeData::RegularExpressionLiteral(_) => NodeKind::RegularExpressionLiteral,
            NodeData::NoSubstitutionTemplateLiteral(_) => NodeKind::NoSubstitutionTemplateLiteral,
            NodeData::Keyword(_) => NodeKind::Keyword,
            NodeData::Token(_) => NodeKind::Token,
            NodeData::BinaryExpression(_) => NodeKind::BinaryExpression,
            NodeData::PrefixUnaryExpression(_) => NodeKind::PrefixUnaryExpression,
            NodeData::PostfixUnaryExpression(_) => NodeKind::PostfixUnaryExpression,
            NodeData::CallExpression(_) => NodeKind::CallExpression,
            NodeData::NewExpression(_) => NodeKind::NewExpression,
            NodeData::PropertyAccessExpression(_) => NodeKind::PropertyAccessExpression,
            NodeData::ElementAccessExpression(_) => NodeKind::ElementAccessExpression,
            NodeData::FunctionExpression(_) => NodeKind::FunctionExpression,
            NodeData::ArrowFunction(_) => NodeKind::ArrowFunction,
            NodeData::DeleteExpression(_) => NodeKind::DeleteExpression,
            NodeData::TypeOfExpression(_) => NodeKind::TypeOfExpression,
            NodeData::VoidExpression(_) => NodeKind::VoidExpression,
            NodeData::ParenthesizedExpression(_) => NodeKind::ParenthesizedExpression,
            NodeData::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            NodeData::Block(_) => NodeKind::Block,
            NodeData::VariableStatement(_) => NodeKind::VariableStatement,
            NodeData::ForOfStatement(_) => NodeKind::ForOfStatement,
            NodeData::ForInStatement(_) => NodeKind::ForInStatement,
            NodeData::VariableDeclarationList(_) => NodeKind::VariableDeclarationList,
            NodeData::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            NodeData::ObjectBindingPattern(_) => NodeKind::ObjectBindingPattern,
            NodeData::ArrayBindingPattern(_) => NodeKind::ArrayBindingPattern,
            NodeData::BindingElement(_) => NodeKind::BindingElement,
            NodeData::Parameter(_) => NodeKind::Parameter,
            NodeData::SourceFile(_) => NodeKind::SourceFile,
        }
    }

    /// Owned children in source order. Absent (`NONE`) slots are skipped.
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        let mut push = |idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };

        match self {
            NodeData::Identifier(_)
            | NodeData::PrivateIdentifier(_)
            | NodeData::NumericLiteral(_)
            | NodeData::BigIntLiteral(_)
            | NodeData::StringLiteral(_)
            | NodeData::RegularExpressionLiteral(_)
            | NodeData::NoSubstitutionTemplateLiteral(_)
            | NodeData::Keyword(_)
            | NodeData::Token(_) => {}
            NodeData::BinaryExpression(bin) => {
                push(bin.left);
                push(bin.right);
            }
            NodeData::PrefixUnaryExpression(unary) | NodeData::PostfixUnaryExpression(unary) => {
                push(unary.operand);
            }
            NodeData::CallExpression(call) | NodeData::NewExpression(call) => {
                push(call.expression);
                call.arguments.nodes.iter().copied().for_each(&mut push);
            }
            NodeData::PropertyAccessExpression(access)
            | NodeData::ElementAccessExpression(access) => {
                push(access.expression);
                push(access.name_or_argument);
            }
            NodeData::FunctionExpression(func) | NodeData::ArrowFunction(func) => {
                push(func.name);
                func.parameters.nodes.iter().copied().for_each(&mut push);
                push(func.body);
            }
            NodeData::DeleteExpression(unary)
            | NodeData::TypeOfExpression(unary)
            | NodeData::VoidExpression(unary) => push(unary.expression),
            NodeData::ParenthesizedExpression(paren) => push(paren.expression),
            NodeData::ExpressionStatement(stmt) => push(stmt.expression),
            NodeData::Block(block) => block.statements.nodes.iter().copied().for_each(&mut push),
            NodeData::VariableStatement(stmt) => push(stmt.declaration_list),
            NodeData::ForOfStatement(for_data) | NodeData::ForInStatement(for_data) => {
                push(for_data.initializer);
                push(for_data.expression);
                push(for_data.statement);
            }
            NodeData::VariableDeclarationList(list) => {
                list.declarations.nodes.iter().copied().for_each(&mut push);
            }
            NodeData::VariableDeclaration(decl) => {
                push(decl.name);
                push(decl.initializer);
            }
            NodeData::ObjectBindingPattern(pattern) | NodeData::ArrayBindingPattern(pattern) => {
                pattern.elements.nodes.iter().copied().for_each(&mut push);
            }
            NodeData::BindingElement(elem) => {
                push(elem.property_name);
                push(elem.name);
                push(elem.initializer);
            }
            NodeData::Parameter(param) => {
                push(param.name);
                push(param.initializer);
            }
            NodeData::SourceFile(sf) => sf.statements.nodes.iter().copied().for_each(&mut push),
        }

        children
    }
}
