//! Root-for and reason command implementations.

use crate::cli::{ReasonArgs, RootForArgs};
use crate::error::Result;
use crate::output::Formatter;
use rivalry_search::{rooting_choice, stance};
use rivalry_store::RivalryGraph;

/// Execute the root-for command.
pub fn execute_root_for(
    args: RootForArgs,
    graph: &RivalryGraph,
    formatter: &Formatter,
) -> Result<String> {
    let advice = rooting_choice(graph, &args.fan, &args.team_a, &args.team_b)?;
    formatter.format_advice(&advice)
}

/// Execute the reason command.
pub fn execute_reason(args: ReasonArgs, graph: &RivalryGraph, formatter: &Formatter) -> Result<String> {
    let found = stance(graph, &args.fan, &args.target, args.opinion.into())?;
    formatter.format_stance(&args.target, found.as_ref())
}
