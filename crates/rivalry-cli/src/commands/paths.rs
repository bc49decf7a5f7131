//! Path and paths command implementations.

use crate::cli::{PairArgs, SourceArgs};
use crate::error::Result;
use crate::output::Formatter;
use rivalry_search::{parity_paths, path_between, SearchError};
use rivalry_store::RivalryGraph;

/// Execute the path command.
pub fn execute_path(args: PairArgs, graph: &RivalryGraph, formatter: &Formatter) -> Result<String> {
    let report = path_between(graph, &args.from, &args.to)?.ok_or(SearchError::NoPath {
        from: args.from,
        to: args.to,
    })?;
    formatter.format_path_report(&report)
}

/// Execute the paths command.
pub fn execute_paths(args: SourceArgs, graph: &RivalryGraph, formatter: &Formatter) -> Result<String> {
    let paths = parity_paths(graph, &args.from)?;
    formatter.format_parity_paths(&paths)
}
