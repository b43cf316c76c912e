//! `SyntaxKind` - the token vocabulary.
//!
//! Discriminants are contiguous and start at zero. Several families are
//! declared in one block so that membership can be answered with a two-sided
//! range check instead of a list:
//!
//! - assignment operators: `EqualsToken ..= CaretEqualsToken`
//! - compound assignments: `PlusEqualsToken ..= CaretEqualsToken`
//! - arithmetic and bitwise binary operators: `PlusToken ..= CaretToken`
//!
//! New tokens must be inserted inside the family they belong to.

use serde::{Deserialize, Serialize};

macro_rules! syntax_kinds {
    ($($(#[$meta:meta])* $name:ident => $text:expr,)+) => {
        /// Token kind produced by the scanner.
        #[repr(u16)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum SyntaxKind {
            $($(#[$meta])* $name,)+
        }

        impl SyntaxKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$name,)+];

            /// Source text of fixed-text tokens (punctuation and keywords).
            pub const fn text(self) -> Option<&'static str> {
                match self {
                    $(SyntaxKind::$name => $text,)+
                }
            }
        }
    };
}

syntax_kinds! {
    Unknown => None,
    EndOfFileToken => None,

    // Literals
    NumericLiteral => None,
    BigIntLiteral => None,
    StringLiteral => None,
    RegularExpressionLiteral => None,
    NoSubstitutionTemplateLiteral => None,

    // Punctuation
    OpenBraceToken => Some("{"),
    CloseBraceToken => Some("}"),
    OpenParenToken => Some("("),
    CloseParenToken => Some(")"),
    OpenBracketToken => Some("["),
    CloseBracketToken => Some("]"),
    DotToken => Some("."),
    DotDotDotToken => Some("..."),
    SemicolonToken => Some(";"),
    CommaToken => Some(","),
    QuestionDotToken => Some("?."),
    LessThanToken => Some("<"),
    GreaterThanToken => Some(">"),
    LessThanEqualsToken => Some("<="),
    GreaterThanEqualsToken => Some(">="),
    EqualsEqualsToken => Some("=="),
    ExclamationEqualsToken => Some("!="),
    EqualsEqualsEqualsToken => Some("==="),
    ExclamationEqualsEqualsToken => Some("!=="),
    EqualsGreaterThanToken => Some("=>"),

    // Arithmetic and bitwise operators
    PlusToken => Some("+"),
    MinusToken => Some("-"),
    AsteriskToken => Some("*"),
    AsteriskAsteriskToken => Some("**"),
    SlashToken => Some("/"),
    PercentToken => Some("%"),
    PlusPlusToken => Some("++"),
    MinusMinusToken => Some("--"),
    LessThanLessThanToken => Some("<<"),
    GreaterThanGreaterThanToken => Some(">>"),
    GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
    AmpersandToken => Some("&"),
    BarToken => Some("|"),
    CaretToken => Some("^"),

    ExclamationToken => Some("!"),
    TildeToken => Some("~"),
    AmpersandAmpersandToken => Some("&&"),
    BarBarToken => Some("||"),
    QuestionToken => Some("?"),
    ColonToken => Some(":"),
    QuestionQuestionToken => Some("??"),

    // Assignments
    EqualsToken => Some("="),
    PlusEqualsToken => Some("+="),
    MinusEqualsToken => Some("-="),
    AsteriskEqualsToken => Some("*="),
    AsteriskAsteriskEqualsToken => Some("**="),
    SlashEqualsToken => Some("/="),
    PercentEqualsToken => Some("%="),
    LessThanLessThanEqualsToken => Some("<<="),
    GreaterThanGreaterThanEqualsToken => Some(">>="),
    GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
    AmpersandEqualsToken => Some("&="),
    BarEqualsToken => Some("|="),
    BarBarEqualsToken => Some("||="),
    AmpersandAmpersandEqualsToken => Some("&&="),
    QuestionQuestionEqualsToken => Some("??="),
    CaretEqualsToken => Some("^="),

    // Identifiers
    Identifier => None,
    PrivateIdentifier => None,

    // Keywords
    BreakKeyword => Some("break"),
    ConstKeyword => Some("const"),
    DeleteKeyword => Some("delete"),
    FalseKeyword => Some("false"),
    ForKeyword => Some("for"),
    FunctionKeyword => Some("function"),
    InKeyword => Some("in"),
    LetKeyword => Some("let"),
    NewKeyword => Some("new"),
    NullKeyword => Some("null"),
    OfKeyword => Some("of"),
    SuperKeyword => Some("super"),
    ThisKeyword => Some("this"),
    TrueKeyword => Some("true"),
    TypeOfKeyword => Some("typeof"),
    UndefinedKeyword => Some("undefined"),
    VarKeyword => Some("var"),
    VoidKeyword => Some("void"),
}

impl SyntaxKind {
    pub const FIRST_LITERAL: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_ARITHMETIC_OR_BITWISE_OPERATOR: SyntaxKind = SyntaxKind::PlusToken;
    pub const LAST_ARITHMETIC_OR_BITWISE_OPERATOR: SyntaxKind = SyntaxKind::CaretToken;
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::CaretEqualsToken;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::VoidKeyword;

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Look up a kind by discriminant.
    #[inline]
    pub const fn from_u16(value: u16) -> Option<SyntaxKind> {
        let index = value as usize;
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Inclusive discriminant range check.
    #[inline]
    pub const fn is_between(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        self as u16 >= first as u16 && self as u16 <= last as u16
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        self.is_between(Self::FIRST_LITERAL, Self::LAST_LITERAL)
    }

    #[inline]
    pub const fn is_punctuation(self) -> bool {
        self.is_between(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.is_between(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    /// `=` and every compound assignment.
    #[inline]
    pub const fn is_assignment_operator(self) -> bool {
        self.is_between(Self::FIRST_ASSIGNMENT, Self::LAST_ASSIGNMENT)
    }

    /// Binary arithmetic/bitwise operator family, including `++`/`--`.
    #[inline]
    pub const fn is_arithmetic_or_bitwise_operator(self) -> bool {
        self.is_between(
            Self::FIRST_ARITHMETIC_OR_BITWISE_OPERATOR,
            Self::LAST_ARITHMETIC_OR_BITWISE_OPERATOR,
        )
    }
}

// `from_u16` indexes `ALL` directly, so discriminants must match positions.
const _: () = {
    let mut i = 0;
    while i < SyntaxKind::ALL.len() {
        assert!(SyntaxKind::ALL[i] as usize == i);
        i += 1;
    }
};

#[cfg(test)]
#[path = "../tests/syntax_kind.rs"]
mod tests;
