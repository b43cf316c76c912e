use super::*;

#[test]
fn compound_assignment_matches_exactly_the_declared_range() {
    let first = SyntaxKind::FIRST_COMPOUND_ASSIGNMENT.as_u16();
    let last = SyntaxKind::LAST_COMPOUND_ASSIGNMENT.as_u16();
    for &op in SyntaxKind::ALL {
        let in_range = op.as_u16() >= first && op.as_u16() <= last;
        assert_eq!(is_compound_assignment(op), in_range, "{op:?}");
    }
}

#[test]
fn plain_assignment_is_not_compound() {
    assert!(!is_compound_assignment(SyntaxKind::EqualsToken));
    assert!(!is_compound_assignment(SyntaxKind::EqualsEqualsToken));
    assert!(is_compound_assignment(SyntaxKind::PlusEqualsToken));
    assert!(is_compound_assignment(SyntaxKind::CaretEqualsToken));
}

#[test]
fn coercion_sets_are_disjoint() {
    for &op in SyntaxKind::ALL {
        if is_number_op(op) {
            assert!(!is_integer_op(op), "{op:?} is in both sets");
        }
        if is_integer_op(op) {
            assert!(!is_number_op(op), "{op:?} is in both sets");
        }
    }
}

#[test]
fn numeric_set_is_subtraction_multiplication_division_remainder() {
    let numeric: Vec<SyntaxKind> = SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|&op| is_number_op(op))
        .collect();
    assert_eq!(
        numeric,
        vec![
            SyntaxKind::MinusToken,
            SyntaxKind::AsteriskToken,
            SyntaxKind::SlashToken,
            SyntaxKind::PercentToken,
            SyntaxKind::MinusEqualsToken,
            SyntaxKind::AsteriskEqualsToken,
            SyntaxKind::SlashEqualsToken,
            SyntaxKind::PercentEqualsToken,
        ]
    );
}

#[test]
fn integer_set_is_shifts_and_bitwise_or_and() {
    let integer: Vec<SyntaxKind> = SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|&op| is_integer_op(op))
        .collect();
    assert_eq!(integer.len(), 10);
    for op in [
        SyntaxKind::LessThanLessThanToken,
        SyntaxKind::GreaterThanGreaterThanToken,
        SyntaxKind::GreaterThanGreaterThanGreaterThanToken,
        SyntaxKind::BarToken,
        SyntaxKind::AmpersandToken,
    ] {
        assert!(integer.contains(&op), "{op:?}");
    }
    assert!(!is_integer_op(SyntaxKind::CaretToken));
    assert!(!is_integer_op(SyntaxKind::TildeToken));
}

#[test]
fn compound_forms_share_the_coercion_of_their_base() {
    for &op in SyntaxKind::ALL {
        if let Some(base) = compound_assignment_base(op) {
            assert!(is_compound_assignment(op), "{op:?}");
            assert_eq!(operand_coercion(op), operand_coercion(base), "{op:?}");
        }
    }
    assert_eq!(compound_assignment_base(SyntaxKind::EqualsToken), None);
    assert_eq!(compound_assignment_base(SyntaxKind::MinusToken), None);
}

#[test]
fn every_compound_assignment_has_a_base() {
    for &op in SyntaxKind::ALL {
        if is_compound_assignment(op) {
            assert!(compound_assignment_base(op).is_some(), "{op:?}");
        }
    }
}

#[test]
fn scenario_operator_tokens() {
    // `>>=`
    let op = SyntaxKind::GreaterThanGreaterThanEqualsToken;
    assert!(is_compound_assignment(op));
    assert!(is_integer_op(op));
    assert!(!is_number_op(op));

    // `-=`
    let op = SyntaxKind::MinusEqualsToken;
    assert!(is_compound_assignment(op));
    assert!(is_number_op(op));
    assert!(!is_integer_op(op));

    // `=`
    let op = SyntaxKind::EqualsToken;
    assert!(!is_compound_assignment(op));
    assert!(!is_number_op(op));
    assert!(!is_integer_op(op));
}

#[test]
fn binary_operand_coercion_reads_the_operator_token() {
    let mut arena = NodeArena::new();
    let a = arena.add_identifier(0, 1, "a");
    let b = arena.add_identifier(4, 5, "b");
    let shift = arena.add_binary_expr(a, SyntaxKind::LessThanLessThanToken, b);
    let c = arena.add_identifier(6, 7, "c");
    let d = arena.add_identifier(10, 11, "d");
    let concat = arena.add_binary_expr(c, SyntaxKind::PlusToken, d);

    assert_eq!(
        binary_operand_coercion(&arena, shift),
        Some(OperandCoercion::Integer)
    );
    assert_eq!(binary_operand_coercion(&arena, concat), None);
    assert_eq!(binary_operand_coercion(&arena, a), None);
    assert_eq!(binary_operand_coercion(&arena, NodeIndex::NONE), None);
}
