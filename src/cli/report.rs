//! Classification report over a serialized node arena.
//!
//! Raw nodes go through the generic node guard before they are deserialized.
//! A node that fails either step is recorded as malformed and replaced by an
//! `Unknown` token so that the indices of the remaining nodes stay valid.

use anyhow::{Result, bail};
use colored::Colorize;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

use tsguard_ast::node::TokenData;
use tsguard_ast::{Node, NodeArena, NodeData, NodeKind};
use tsguard_classify::{NodeShape, classify, is_node};
use tsguard_scanner::SyntaxKind;

/// A raw node that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedNode {
    pub index: u32,
    pub reason: String,
}

/// Arena rebuilt from JSON plus the nodes that had to be replaced.
#[derive(Debug, Default)]
pub struct LoadedArena {
    pub arena: NodeArena,
    pub malformed: Vec<MalformedNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub index: u32,
    pub kind: NodeKind,
    pub pos: u32,
    pub end: u32,
    pub shapes: Vec<NodeShape>,
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub nodes: Vec<NodeReport>,
    pub malformed: Vec<MalformedNode>,
    pub summary: Vec<ShapeCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeCount {
    pub shape: NodeShape,
    pub count: usize,
}

/// Which nodes end up in the report.
#[derive(Debug, Default, Clone)]
pub struct ReportOptions {
    /// Keep only nodes matching one of these shapes (empty = no filter).
    pub only: Vec<NodeShape>,
    /// Keep nodes that match no shape at all.
    pub include_unmatched: bool,
}

/// Rebuild an arena from a serialized `NodeArena` (`{"nodes": [...]}`) or a
/// bare array of nodes.
pub fn load_arena(value: Value) -> Result<LoadedArena> {
    let raw_nodes = match value {
        Value::Array(nodes) => nodes,
        Value::Object(mut map) => match map.remove("nodes") {
            Some(Value::Array(nodes)) => nodes,
            Some(_) => bail!("`nodes` must be an array"),
            None => bail!("expected an object with a `nodes` array"),
        },
        _ => bail!("expected a node arena (object or array)"),
    };

    let mut loaded = LoadedArena {
        arena: NodeArena::with_capacity(raw_nodes.len()),
        malformed: Vec::new(),
    };

    for (i, raw) in raw_nodes.into_iter().enumerate() {
        let index = i as u32;
        let node = if is_node(&raw) {
            match serde_json::from_value::<Node>(raw) {
                Ok(node) => Some(node),
                Err(err) => {
                    loaded.malformed.push(MalformedNode {
                        index,
                        reason: err.to_string(),
                    });
                    None
                }
            }
        } else {
            loaded.malformed.push(MalformedNode {
                index,
                reason: "missing one of kind, flags, pos, end".to_string(),
            });
            None
        };

        let node = node.unwrap_or_else(|| {
            warn!(index, "replacing malformed node with an Unknown token");
            Node::new(
                0,
                0,
                NodeData::Token(TokenData {
                    token: SyntaxKind::Unknown,
                }),
            )
        });
        loaded.arena.nodes.push(node);
    }

    debug!(
        nodes = loaded.arena.len(),
        malformed = loaded.malformed.len(),
        "arena loaded"
    );
    Ok(loaded)
}

/// Classify every usable node of a loaded arena.
pub fn build_report(loaded: &LoadedArena, options: &ReportOptions) -> Report {
    let arena = &loaded.arena;
    let mut counts: FxHashMap<NodeShape, usize> = FxHashMap::default();
    let only: FxHashSet<NodeShape> = options.only.iter().copied().collect();
    let malformed: FxHashSet<u32> = loaded.malformed.iter().map(|m| m.index).collect();
    let mut nodes = Vec::new();

    for idx in arena.indices() {
        if malformed.contains(&idx.0) {
            continue;
        }
        let Some(node) = arena.get(idx) else {
            continue;
        };
        let shapes = classify(arena, idx);
        for &shape in &shapes {
            *counts.entry(shape).or_default() += 1;
        }

        let keep = if only.is_empty() {
            options.include_unmatched || !shapes.is_empty()
        } else {
            shapes.iter().any(|shape| only.contains(shape))
        };
        if keep {
            nodes.push(NodeReport {
                index: idx.0,
                kind: node.kind(),
                pos: node.pos,
                end: node.end,
                shapes: shapes.into_vec(),
            });
        }
    }

    let summary = NodeShape::ALL
        .into_iter()
        .filter_map(|shape| {
            counts
                .get(&shape)
                .map(|&count| ShapeCount { shape, count })
        })
        .collect();

    Report {
        nodes,
        malformed: loaded.malformed.clone(),
        summary,
    }
}

/// Human-readable report.
pub fn render_text(report: &Report, out: &mut impl Write, with_summary: bool) -> Result<()> {
    for entry in &report.nodes {
        let shapes = entry
            .shapes
            .iter()
            .map(|shape| shape.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "#{:<5} {:<28} [{}..{}] {}",
            entry.index,
            format!("{:?}", entry.kind),
            entry.pos,
            entry.end,
            shapes.green()
        )?;
    }

    for malformed in &report.malformed {
        writeln!(
            out,
            "{} node #{}: {}",
            "malformed".yellow().bold(),
            malformed.index,
            malformed.reason
        )?;
    }

    if with_summary && !report.summary.is_empty() {
        writeln!(out)?;
        for entry in &report.summary {
            writeln!(out, "{:>6}  {}", entry.count, entry.shape)?;
        }
    }
    Ok(())
}

pub fn render_json(report: &Report, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
