//! Teams command implementation.

use crate::cli::TeamsArgs;
use crate::error::Result;
use crate::output::Formatter;
use rivalry_domain::Vertex;
use rivalry_store::RivalryGraph;

/// Execute the teams command.
pub fn execute_teams(args: TeamsArgs, graph: &RivalryGraph, formatter: &Formatter) -> Result<String> {
    let teams: Vec<&Vertex> = match &args.conference {
        Some(conference) => graph.find_conference(conference),
        None => graph.vertices().collect(),
    };
    formatter.format_teams(&teams)
}
