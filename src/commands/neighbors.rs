//! `waypath neighbors` command
use serde_json::json;

use waypath_core::error::Result;

use crate::commands::dispatch::Context;
use crate::commands::helpers::{escape_quotes, print_json, records_header};

/// Execute the neighbors command
pub fn execute(ctx: &Context, node: &str) -> Result<()> {
    let node_id = node.to_string();
    let edges = ctx.graph.neighbors(&node_id);

    crate::output_by_format!(ctx.format,
        json => {
            let neighbors: Vec<_> = edges
                .iter()
                .map(|edge| json!({ "to": edge.to, "weight": edge.weight.map(|w| w.value()) }))
                .collect();
            print_json(&json!({
                "node": node,
                "declared": ctx.graph.contains(&node_id),
                "neighbors": neighbors,
            }))?;
        },
        human => {
            if edges.is_empty() && !ctx.quiet {
                eprintln!("{} has no outgoing edges", node);
            }
            for edge in edges {
                match edge.weight {
                    Some(weight) => println!("{}  ({})", edge.to, weight),
                    None => println!("{}", edge.to),
                }
            }
        },
        records => {
            println!("{}", records_header("neighbors", &[("node", node.to_string())]));
            for edge in edges {
                match edge.weight {
                    Some(weight) => println!(
                        "E \"{}\" \"{}\" weight={}",
                        escape_quotes(node),
                        escape_quotes(&edge.to),
                        weight
                    ),
                    None => println!("E \"{}\" \"{}\"", escape_quotes(node), escape_quotes(&edge.to)),
                }
            }
        }
    );

    Ok(())
}
