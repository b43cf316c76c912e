//! Operator-membership classifiers.
//!
//! The coercion table encodes JavaScript's operand conversion rules: `-`,
//! `*`, `/`, `%` convert both operands with ToNumber, while shifts, `|` and
//! `&` convert them with ToInt32/ToUint32. `+` (string concatenation), `**`
//! and `^` are in neither set.
//!
//! The table has to be re-checked whenever the token set changes; the const
//! block at the bottom of this file refuses to compile until every
//! arithmetic, bitwise and compound-assignment token has been placed in
//! exactly one bucket.

use serde::Serialize;
use tsguard_ast::{NodeArena, NodeIndex};
use tsguard_scanner::SyntaxKind;

/// How an operator converts its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OperandCoercion {
    /// ToNumber: `-`, `*`, `/`, `%` and their compound forms.
    Numeric,
    /// ToInt32/ToUint32: `<<`, `>>`, `>>>`, `|`, `&` and their compound forms.
    Integer,
}

/// True for tokens in the contiguous compound-assignment range (`+=` .. `^=`).
#[inline]
pub const fn is_compound_assignment(op: SyntaxKind) -> bool {
    op.as_u16() >= SyntaxKind::FIRST_COMPOUND_ASSIGNMENT.as_u16()
        && op.as_u16() <= SyntaxKind::LAST_COMPOUND_ASSIGNMENT.as_u16()
}

/// Operand coercion forced by `op`, if it is one of the coercing operators.
pub const fn operand_coercion(op: SyntaxKind) -> Option<OperandCoercion> {
    match op {
        SyntaxKind::MinusToken
        | SyntaxKind::MinusEqualsToken
        | SyntaxKind::AsteriskToken
        | SyntaxKind::AsteriskEqualsToken
        | SyntaxKind::SlashToken
        | SyntaxKind::SlashEqualsToken
        | SyntaxKind::PercentToken
        | SyntaxKind::PercentEqualsToken => Some(OperandCoercion::Numeric),

        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::LessThanLessThanEqualsToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanEqualsToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        | SyntaxKind::BarToken
        | SyntaxKind::BarEqualsToken
        | SyntaxKind::AmpersandToken
        | SyntaxKind::AmpersandEqualsToken => Some(OperandCoercion::Integer),

        _ => None,
    }
}

/// Operators that force numeric coercion of their operands.
#[inline]
pub const fn is_number_op(op: SyntaxKind) -> bool {
    matches!(operand_coercion(op), Some(OperandCoercion::Numeric))
}

/// Operators that force 32-bit integer coercion of their operands.
#[inline]
pub const fn is_integer_op(op: SyntaxKind) -> bool {
    matches!(operand_coercion(op), Some(OperandCoercion::Integer))
}

/// Binary operator a compound assignment applies (`-=` -> `-`).
pub const fn compound_assignment_base(op: SyntaxKind) -> Option<SyntaxKind> {
    let base = match op {
        SyntaxKind::PlusEqualsToken => SyntaxKind::PlusToken,
        SyntaxKind::MinusEqualsToken => SyntaxKind::MinusToken,
        SyntaxKind::AsteriskEqualsToken => SyntaxKind::AsteriskToken,
        SyntaxKind::AsteriskAsteriskEqualsToken => SyntaxKind::AsteriskAsteriskToken,
        SyntaxKind::SlashEqualsToken => SyntaxKind::SlashToken,
        SyntaxKind::PercentEqualsToken => SyntaxKind::PercentToken,
        SyntaxKind::LessThanLessThanEqualsToken => SyntaxKind::LessThanLessThanToken,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => {
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken
        }
        SyntaxKind::AmpersandEqualsToken => SyntaxKind::AmpersandToken,
        SyntaxKind::BarEqualsToken => SyntaxKind::BarToken,
        SyntaxKind::BarBarEqualsToken => SyntaxKind::BarBarToken,
        SyntaxKind::AmpersandAmpersandEqualsToken => SyntaxKind::AmpersandAmpersandToken,
        SyntaxKind::QuestionQuestionEqualsToken => SyntaxKind::QuestionQuestionToken,
        SyntaxKind::CaretEqualsToken => SyntaxKind::CaretToken,
        _ => return None,
    };
    Some(base)
}

/// Coercion forced by a binary expression's operator.
pub fn binary_operand_coercion(arena: &NodeArena, idx: NodeIndex) -> Option<OperandCoercion> {
    let node = arena.get(idx)?;
    operand_coercion(arena.get_binary_expr(node)?.operator_token)
}

/// Arithmetic, bitwise and compound-assignment tokens outside both sets.
const fn is_uncoerced_operator(op: SyntaxKind) -> bool {
    matches!(
        op,
        SyntaxKind::PlusToken
            | SyntaxKind::PlusEqualsToken
            | SyntaxKind::AsteriskAsteriskToken
            | SyntaxKind::AsteriskAsteriskEqualsToken
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::CaretToken
            | SyntaxKind::CaretEqualsToken
            | SyntaxKind::BarBarEqualsToken
            | SyntaxKind::AmpersandAmpersandEqualsToken
            | SyntaxKind::QuestionQuestionEqualsToken
    )
}

const _: () = {
    let mut i = 0;
    while i < SyntaxKind::ALL.len() {
        let op = SyntaxKind::ALL[i];
        let numeric = is_number_op(op) as u8;
        let integer = is_integer_op(op) as u8;
        let uncoerced = is_uncoerced_operator(op) as u8;
        if op.is_arithmetic_or_bitwise_operator() || is_compound_assignment(op) {
            assert!(
                numeric + integer + uncoerced == 1,
                "operator token is missing from (or duplicated in) the coercion table"
            );
        } else {
            assert!(
                numeric + integer + uncoerced == 0,
                "coercion table lists a token outside the operator families"
            );
        }
        i += 1;
    }
};

#[cfg(test)]
#[path = "../tests/operators.rs"]
mod tests;
