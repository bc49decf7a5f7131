//! Rate, unrate, and edge command implementations.

use crate::cli::{PairArgs, RateArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rivalry_domain::RivalryStore;
use rivalry_store::{RivalryGraph, StoreError};
use std::path::Path;
use tracing::info;

/// Execute the rate command.
pub fn execute_rate(
    args: RateArgs,
    graph: &mut RivalryGraph,
    data_path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    if !args.strength.is_finite() {
        return Err(CliError::InvalidInput(format!(
            "Strength must be a number, got {}",
            args.strength
        )));
    }
    ensure_writable(data_path)?;

    graph.update_edge(&args.from, &args.to, args.strength)?;
    save(graph, data_path)?;

    let edge = graph.edge(&args.from, &args.to)?;
    formatter.format_edge(edge)
}

/// Execute the unrate command.
pub fn execute_unrate(
    args: PairArgs,
    graph: &mut RivalryGraph,
    data_path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    ensure_writable(data_path)?;

    let removed = graph.delete_edge(&args.from, &args.to);
    if removed == 0 {
        return Err(StoreError::EdgeNotFound {
            from: args.from,
            to: args.to,
        }
        .into());
    }
    save(graph, data_path)?;

    Ok(formatter.success(&format!(
        "Removed rivalry {} -> {}",
        args.from, args.to
    )))
}

/// Execute the edge command.
pub fn execute_edge(args: PairArgs, graph: &RivalryGraph, formatter: &Formatter) -> Result<String> {
    let edge = graph.edge(&args.from, &args.to)?;
    formatter.format_edge(edge)
}

/// Only JSON data files can take a snapshot back.
fn ensure_writable(data_path: &Path) -> Result<()> {
    match data_path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(()),
        _ => Err(CliError::InvalidInput(format!(
            "{} is not a JSON data file; changes are saved as a JSON snapshot",
            data_path.display()
        ))),
    }
}

fn save(graph: &RivalryGraph, data_path: &Path) -> Result<()> {
    graph.snapshot().save(data_path)?;
    info!(path = %data_path.display(), edges = graph.edge_count(), "Saved snapshot");
    Ok(())
}
