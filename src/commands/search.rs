//! `waypath search` command - nearest node by breadth-first search
use serde_json::json;

use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{bfs_find_path, breadth_first_search};

use crate::commands::dispatch::Context;
use crate::commands::helpers::{escape_quotes, print_json, records_header};

/// Execute the search command
pub fn execute(ctx: &Context, start: &str, target: &str, with_path: bool) -> Result<()> {
    let start_id = start.to_string();
    if !ctx.graph.contains(&start_id) {
        tracing::warn!(start, "start node is not declared in the graph");
    }

    let is_target = |node: &String| node == target;

    let (found, path) = if with_path {
        match bfs_find_path(&ctx.graph, &start_id, is_target) {
            Some(path) => (path.last().cloned(), Some(path)),
            None => (None, None),
        }
    } else {
        (breadth_first_search(&ctx.graph, &start_id, is_target), None)
    };

    let Some(found) = found else {
        return Err(WaypathError::not_found("target", target));
    };

    crate::output_by_format!(ctx.format,
        json => {
            let mut output = json!({
                "start": start,
                "target": target,
                "found": found,
            });
            if let Some(path) = &path {
                output["hops"] = json!(path.len() - 1);
                output["path"] = json!(path);
            }
            print_json(&output)?;
        },
        human => {
            match &path {
                Some(path) => println!("{}", path.join(" -> ")),
                None => println!("{}", found),
            }
        },
        records => {
            println!(
                "{}",
                records_header(
                    "search",
                    &[("start", start.to_string()), ("target", target.to_string())]
                )
            );
            match &path {
                Some(path) => {
                    for (hop, node) in path.iter().enumerate() {
                        println!("N id=\"{}\" hop={}", escape_quotes(node), hop);
                    }
                }
                None => println!("N id=\"{}\"", escape_quotes(&found)),
            }
        }
    );

    Ok(())
}
