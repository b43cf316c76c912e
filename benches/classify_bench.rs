//! Classification benchmarks.
//!
//! Measures full-arena classification, a single hot predicate, and loading a
//! serialized arena through the node guard.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tsguard::ast::node::FunctionData;
use tsguard::ast::{NodeList, node_flags};
use tsguard::classify::{classify, is_method_call};
use tsguard::cli::report::{ReportOptions, build_report, load_arena};
use tsguard::{Keyword, NodeArena, NodeIndex, SyntaxKind};

/// Build a source file with `n` repetitions of
/// `obj.push(function () {}); a >>= 1; delete o.p; for (const v of xs) {} null;`
fn build_arena(n: u32) -> NodeArena {
    let mut arena = NodeArena::new();
    let mut statements = Vec::new();

    for i in 0..n {
        let base = i * 80;

        let obj = arena.add_identifier(base, base + 3, "obj");
        let push = arena.add_identifier(base + 4, base + 8, "push");
        let callee = arena.add_property_access(obj, push);
        let body = arena.add_block(base + 21, base + 23, Vec::new());
        let func = arena.add_function(
            base + 9,
            base + 23,
            FunctionData {
                is_async: false,
                asterisk_token: false,
                name: NodeIndex::NONE,
                parameters: NodeList::default(),
                body,
            },
        );
        let call = arena.add_call_expr(callee, vec![func], base + 24);
        statements.push(arena.add_expression_statement(call, base + 25));

        let a = arena.add_identifier(base + 26, base + 27, "a");
        let one = arena.add_numeric_literal(base + 32, base + 33, "1");
        let shift = arena.add_binary_expr(a, SyntaxKind::GreaterThanGreaterThanEqualsToken, one);
        statements.push(arena.add_expression_statement(shift, base + 34));

        let o = arena.add_identifier(base + 42, base + 43, "o");
        let p = arena.add_identifier(base + 44, base + 45, "p");
        let access = arena.add_property_access(o, p);
        let delete = arena.add_delete_expr(base + 35, access);
        statements.push(arena.add_expression_statement(delete, base + 46));

        let v = arena.add_identifier(base + 58, base + 59, "v");
        let decl = arena.add_variable_declaration(v, NodeIndex::NONE);
        let list =
            arena.add_variable_declaration_list(base + 52, base + 59, node_flags::CONST, vec![decl]);
        let xs = arena.add_identifier(base + 63, base + 65, "xs");
        let loop_body = arena.add_block(base + 67, base + 69, Vec::new());
        statements.push(arena.add_for_of(base + 47, list, xs, loop_body));

        let null = arena.add_keyword(base + 70, Keyword::Null);
        statements.push(arena.add_expression_statement(null, base + 75));
    }

    arena.add_source_file("bench.ts", n * 80, statements);
    arena
}

fn bench_classify_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_all");

    for n in [10u32, 100, 1_000] {
        let arena = build_arena(n);
        group.bench_with_input(BenchmarkId::new("statements", n * 5), &arena, |b, arena| {
            b.iter(|| {
                let mut matched = 0usize;
                for idx in arena.indices() {
                    matched += classify(arena, idx).len();
                }
                black_box(matched)
            })
        });
    }

    group.finish();
}

fn bench_single_predicate(c: &mut Criterion) {
    let arena = build_arena(1_000);
    c.bench_function("is_method_call/all_nodes", |b| {
        b.iter(|| {
            let count = arena
                .indices()
                .filter(|&idx| is_method_call(&arena, idx))
                .count();
            black_box(count)
        })
    });
}

fn bench_load_serialized(c: &mut Criterion) {
    let arena = build_arena(1_000);
    let json = serde_json::to_string(&arena).expect("arena serializes");

    c.bench_function("load_and_report/5000_statements", |b| {
        b.iter(|| {
            let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
            let loaded = load_arena(value).expect("arena loads");
            let report = build_report(&loaded, &ReportOptions::default());
            black_box(report.nodes.len())
        })
    });
}

criterion_group!(
    classify_benches,
    bench_classify_all,
    bench_single_predicate,
    bench_load_serialized
);
criterion_main!(classify_benches);
