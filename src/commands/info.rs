//! `waypath info` command - graph summary
use serde_json::json;

use waypath_core::error::Result;

use crate::commands::dispatch::Context;
use crate::commands::helpers::{print_json, records_header};

/// Execute the info command
pub fn execute(ctx: &Context) -> Result<()> {
    let graph = &ctx.graph;
    let node_count = graph.distinct_node_count();
    let weighted = graph
        .nodes()
        .flat_map(|node| graph.neighbors(node))
        .filter(|edge| edge.weight.is_some())
        .count();
    let negative = graph
        .find_negative_edge()
        .map(|(from, edge)| (from.clone(), edge.to.clone(), edge.weight));

    crate::output_by_format!(ctx.format,
        json => {
            let negative_json = negative.as_ref().map(|(from, to, weight)| {
                json!({ "from": from, "to": to, "weight": weight.map(|w| w.value()) })
            });
            print_json(&json!({
                "nodes": node_count,
                "declared_nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "weighted_edges": weighted,
                "weights_valid": negative.is_none(),
                "negative_edge": negative_json,
            }))?;
        },
        human => {
            println!("nodes: {}", node_count);
            println!("edges: {}", graph.edge_count());
            println!("weighted edges: {}", weighted);
            match &negative {
                Some((from, to, Some(weight))) => {
                    println!("weights: negative ({} -> {}: {})", from, to, weight)
                }
                _ => println!("weights: ok"),
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "info",
                    &[
                        ("nodes", node_count.to_string()),
                        ("declared", graph.node_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                        ("weighted", weighted.to_string()),
                        ("weights_valid", negative.is_none().to_string()),
                    ]
                )
            );
        }
    );

    Ok(())
}
