use serde_json::json;

use super::report::{ReportOptions, build_report, load_arena, render_json, render_text};
use tsguard_ast::{Keyword, NodeArena, NodeIndex, NodeKind};
use tsguard_classify::NodeShape;
use tsguard_scanner::SyntaxKind;

/// `obj.push(x); null;`
fn sample_arena() -> NodeArena {
    let mut arena = NodeArena::new();
    let obj = arena.add_identifier(0, 3, "obj");
    let push = arena.add_identifier(4, 8, "push");
    let callee = arena.add_property_access(obj, push);
    let x = arena.add_identifier(9, 10, "x");
    let call = arena.add_call_expr(callee, vec![x], 11);
    let stmt1 = arena.add_expression_statement(call, 12);
    let null = arena.add_keyword(13, Keyword::Null);
    let stmt2 = arena.add_expression_statement(null, 18);
    arena.add_source_file("sample.ts", 18, vec![stmt1, stmt2]);
    arena
}

#[test]
fn serialized_arena_loads_back_unchanged() {
    let arena = sample_arena();
    let value = serde_json::to_value(&arena).unwrap();

    let loaded = load_arena(value).unwrap();
    assert!(loaded.malformed.is_empty());
    assert_eq!(loaded.arena, arena);
}

#[test]
fn bare_node_array_is_accepted() {
    let arena = sample_arena();
    let value = serde_json::to_value(&arena.nodes).unwrap();

    let loaded = load_arena(value).unwrap();
    assert_eq!(loaded.arena.len(), arena.len());
}

#[test]
fn non_arena_input_is_an_error() {
    assert!(load_arena(json!(42)).is_err());
    assert!(load_arena(json!({ "nodes": "nope" })).is_err());
    assert!(load_arena(json!({ "items": [] })).is_err());
}

#[test]
fn malformed_nodes_keep_indices_aligned() {
    let value = json!([
        { "kind": "Identifier", "flags": 0, "pos": 0, "end": 1, "escaped_text": "a" },
        { "kind": "Identifier", "pos": 2, "end": 3 },
        { "kind": "NoSuchKind", "flags": 0, "pos": 4, "end": 5 },
        { "kind": "Keyword", "flags": 0, "pos": 6, "end": 9, "keyword": "NaN" },
    ]);

    let loaded = load_arena(value).unwrap();
    assert_eq!(loaded.arena.len(), 4);
    let bad: Vec<u32> = loaded.malformed.iter().map(|m| m.index).collect();
    assert_eq!(bad, vec![1, 2]);

    let report = build_report(&loaded, &ReportOptions::default());
    let reported: Vec<u32> = report.nodes.iter().map(|n| n.index).collect();
    assert_eq!(reported, vec![3]);
    assert_eq!(report.nodes[0].shapes, vec![NodeShape::NullOrUndefinedOrNaN]);
    assert_eq!(report.malformed.len(), 2);
}

#[test]
fn report_lists_matching_nodes_only_by_default() {
    let loaded = load_arena(serde_json::to_value(sample_arena()).unwrap()).unwrap();
    let report = build_report(&loaded, &ReportOptions::default());

    let kinds: Vec<NodeKind> = report.nodes.iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NodeKind::CallExpression, NodeKind::Keyword]);
    assert!(report.nodes.iter().all(|n| !n.shapes.is_empty()));
}

#[test]
fn include_unmatched_lists_every_node() {
    let loaded = load_arena(serde_json::to_value(sample_arena()).unwrap()).unwrap();
    let options = ReportOptions {
        only: Vec::new(),
        include_unmatched: true,
    };
    let report = build_report(&loaded, &options);
    assert_eq!(report.nodes.len(), loaded.arena.len());
}

#[test]
fn only_filter_narrows_report() {
    let loaded = load_arena(serde_json::to_value(sample_arena()).unwrap()).unwrap();
    let options = ReportOptions {
        only: vec![NodeShape::NullOrUndefinedOrNaN],
        include_unmatched: false,
    };
    let report = build_report(&loaded, &options);

    assert_eq!(report.nodes.len(), 1);
    assert_eq!(report.nodes[0].kind, NodeKind::Keyword);
    assert_eq!(report.nodes[0].index, 6);
    // Summary still counts the whole arena.
    assert_eq!(report.summary.len(), 2);
}

#[test]
fn summary_follows_shape_order() {
    let loaded = load_arena(serde_json::to_value(sample_arena()).unwrap()).unwrap();
    let report = build_report(&loaded, &ReportOptions::default());

    let shapes: Vec<NodeShape> = report.summary.iter().map(|c| c.shape).collect();
    assert_eq!(
        shapes,
        vec![NodeShape::MethodCall, NodeShape::NullOrUndefinedOrNaN]
    );
    assert!(report.summary.iter().all(|c| c.count == 1));
}

#[test]
fn text_and_json_rendering() {
    colored::control::set_override(false);
    let loaded = load_arena(serde_json::to_value(sample_arena()).unwrap()).unwrap();
    let report = build_report(&loaded, &ReportOptions::default());

    let mut text = Vec::new();
    render_text(&report, &mut text, true).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("CallExpression"));
    assert!(text.contains("method-call"));
    assert!(text.contains("null-or-undefined-or-nan"));

    let mut json_out = Vec::new();
    render_json(&report, &mut json_out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
    assert_eq!(value["nodes"][0]["shapes"][0], "method-call");
    assert_eq!(value["nodes"][0]["kind"], "CallExpression");
    assert!(value["malformed"].as_array().unwrap().is_empty());
}

#[test]
fn placeholder_index_is_never_reported() {
    let loaded = load_arena(json!([{ "pos": 0 }])).unwrap();
    let options = ReportOptions {
        only: Vec::new(),
        include_unmatched: true,
    };
    let report = build_report(&loaded, &options);
    assert!(report.nodes.is_empty());
    assert_eq!(report.malformed[0].index, NodeIndex(0).0);
}

#[test]
fn serialized_keyword_tokens_are_classified() {
    let mut arena = NodeArena::new();
    arena.add_token(0, 4, SyntaxKind::NullKeyword);
    arena.add_token(5, 9, SyntaxKind::ThisKeyword);
    arena.add_token(10, 14, SyntaxKind::TrueKeyword);
    let value = serde_json::to_value(&arena).unwrap();
    assert_eq!(value["nodes"][0]["kind"], "Token");

    let loaded = load_arena(value).unwrap();
    let report = build_report(&loaded, &ReportOptions::default());
    let shapes: Vec<Vec<NodeShape>> = report.nodes.iter().map(|n| n.shapes.clone()).collect();
    assert_eq!(
        shapes,
        vec![
            vec![NodeShape::NullOrUndefinedOrNaN],
            vec![NodeShape::ThisKeyword],
            vec![NodeShape::Literal],
        ]
    );
}

#[test]
fn many_malformed_nodes_are_all_skipped() {
    let mut raw = Vec::new();
    for i in 0..2_000u32 {
        if i % 2 == 0 {
            raw.push(json!({ "pos": i }));
        } else {
            raw.push(json!({ "kind": "Keyword", "flags": 0, "pos": i, "end": i, "keyword": "Null" }));
        }
    }

    let loaded = load_arena(serde_json::Value::Array(raw)).unwrap();
    assert_eq!(loaded.malformed.len(), 1_000);

    let report = build_report(&loaded, &ReportOptions::default());
    assert_eq!(report.nodes.len(), 1_000);
    assert!(report.nodes.iter().all(|n| n.index % 2 == 1));
    assert_eq!(report.summary[0].count, 1_000);
}
