//! `waypath shortest` command - weighted shortest paths
use serde::Serialize;
use serde_json::json;

use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{checked_dijkstra, dijkstra, ShortestPaths};

use crate::commands::dispatch::Context;
use crate::commands::helpers::{escape_quotes, print_json, records_header};

/// One reached node in the cost table
#[derive(Debug, Serialize)]
struct CostEntry<'a> {
    id: &'a str,
    cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a str>,
}

/// Execute the shortest command
pub fn execute(ctx: &Context, start: &str, to: Option<&str>) -> Result<()> {
    let start_id = start.to_string();

    let result = if ctx.config.graph.validate_weights {
        checked_dijkstra(&ctx.graph, &start_id)?
    } else {
        tracing::debug!("weight validation disabled");
        dijkstra(&ctx.graph, &start_id)
    };

    match to {
        Some(to) => output_path(ctx, &result, to),
        None => output_table(ctx, &result),
    }
}

fn cost_entries(result: &ShortestPaths<String>) -> Vec<CostEntry<'_>> {
    result
        .settled_order()
        .iter()
        .map(|node| CostEntry {
            id: node,
            cost: result.cost(node).map(|c| c.value()).unwrap_or_default(),
            parent: result.parent(node).map(String::as_str),
        })
        .collect()
}

fn output_table(ctx: &Context, result: &ShortestPaths<String>) -> Result<()> {
    let entries = cost_entries(result);

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&json!({
                "start": result.start(),
                "nodes": entries,
            }))?;
        },
        human => {
            for entry in &entries {
                match entry.parent {
                    Some(parent) => println!("{}  {}  (via {})", entry.id, entry.cost, parent),
                    None => println!("{}  {}", entry.id, entry.cost),
                }
            }
        },
        records => {
            println!(
                "{}",
                records_header("shortest", &[("start", result.start().clone())])
            );
            for entry in &entries {
                match entry.parent {
                    Some(parent) => println!(
                        "N id=\"{}\" cost={} parent=\"{}\"",
                        escape_quotes(entry.id),
                        entry.cost,
                        escape_quotes(parent)
                    ),
                    None => println!("N id=\"{}\" cost={}", escape_quotes(entry.id), entry.cost),
                }
            }
        }
    );

    Ok(())
}

fn output_path(ctx: &Context, result: &ShortestPaths<String>, to: &str) -> Result<()> {
    let to_id = to.to_string();
    let (Some(path), Some(cost)) = (result.path_to(&to_id), result.cost(&to_id)) else {
        return Err(WaypathError::not_found(
            "path",
            format!("{} -> {}", result.start(), to),
        ));
    };

    crate::output_by_format!(ctx.format,
        json => {
            print_json(&json!({
                "start": result.start(),
                "to": to,
                "cost": cost.value(),
                "path": path,
            }))?;
        },
        human => {
            println!("{}  (cost {})", path.join(" -> "), cost);
        },
        records => {
            println!(
                "{}",
                records_header(
                    "shortest",
                    &[("start", result.start().clone()), ("to", to.to_string())]
                )
            );
            for node in &path {
                let node_cost = result.cost(node).map(|c| c.value()).unwrap_or_default();
                println!("N id=\"{}\" cost={}", escape_quotes(node), node_cost);
            }
        }
    );

    Ok(())
}
