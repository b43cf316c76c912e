use super::*;
use tsguard_scanner::SyntaxKind;

#[test]
fn this_keyword_is_identified_by_keyword_not_name() {
    let mut arena = NodeArena::new();
    let this = arena.add_keyword(0, Keyword::This);
    let super_kw = arena.add_keyword(5, Keyword::Super);
    // An identifier spelled `this` only comes from malformed trees.
    let ident = arena.add_identifier(11, 15, "this");

    assert!(is_this_keyword(&arena, this));
    assert!(!is_this_keyword(&arena, super_kw));
    assert!(!is_this_keyword(&arena, ident));
    assert!(!is_this_keyword(&arena, NodeIndex::NONE));
}

#[test]
fn null_undefined_and_nan_share_one_category() {
    let mut arena = NodeArena::new();
    for keyword in [Keyword::Null, Keyword::Undefined, Keyword::NaN] {
        let idx = arena.add_keyword(0, keyword);
        assert!(is_null_or_undefined_or_nan(&arena, idx), "{keyword:?}");
    }
    for keyword in [Keyword::True, Keyword::False, Keyword::This, Keyword::Super] {
        let idx = arena.add_keyword(0, keyword);
        assert!(!is_null_or_undefined_or_nan(&arena, idx), "{keyword:?}");
    }
}

#[test]
fn identifiers_named_like_sentinels_are_not_keywords() {
    let mut arena = NodeArena::new();
    let nan = arena.add_identifier(0, 3, "NaN");
    let undefined = arena.add_identifier(4, 13, "undefined");
    let zero = arena.add_numeric_literal(14, 15, "0");

    assert!(!is_null_or_undefined_or_nan(&arena, nan));
    assert!(!is_null_or_undefined_or_nan(&arena, undefined));
    assert!(!is_null_or_undefined_or_nan(&arena, zero));
}

#[test]
fn keyword_tokens_classify_like_keyword_nodes() {
    let mut arena = NodeArena::new();
    let null = arena.add_token(0, 4, SyntaxKind::NullKeyword);
    let undefined = arena.add_token(5, 14, SyntaxKind::UndefinedKeyword);
    let this = arena.add_token(15, 19, SyntaxKind::ThisKeyword);
    let var = arena.add_token(20, 23, SyntaxKind::VarKeyword);

    assert!(is_null_or_undefined_or_nan(&arena, null));
    assert!(is_null_or_undefined_or_nan(&arena, undefined));
    assert!(!is_null_or_undefined_or_nan(&arena, this));
    assert!(is_this_keyword(&arena, this));
    assert!(!is_this_keyword(&arena, null));
    assert!(!is_this_keyword(&arena, var));
    assert!(!is_null_or_undefined_or_nan(&arena, var));
}
