//! Command implementations.

pub mod advice;
pub mod paths;
pub mod rate;
pub mod teams;
pub mod tree;

pub use self::advice::{execute_reason, execute_root_for};
pub use self::paths::{execute_path, execute_paths};
pub use self::rate::{execute_edge, execute_rate, execute_unrate};
pub use self::teams::execute_teams;
pub use self::tree::{execute_layout, execute_tree};

use crate::cli::Command;
use crate::error::Result;
use crate::output::Formatter;
use rivalry_layout::LayoutConfig;
use rivalry_store::RivalryGraph;
use std::path::Path;

/// Run one command against a loaded graph and return its rendered output.
///
/// Mutating commands write the graph back to `data_path`.
pub fn execute(
    command: Command,
    graph: &mut RivalryGraph,
    data_path: &Path,
    layout: &LayoutConfig,
    formatter: &Formatter,
) -> Result<String> {
    match command {
        Command::Teams(args) => execute_teams(args, graph, formatter),
        Command::Path(args) => execute_path(args, graph, formatter),
        Command::Paths(args) => execute_paths(args, graph, formatter),
        Command::Tree(args) => execute_tree(args, graph, layout, formatter),
        Command::Layout(args) => execute_layout(args, graph, layout, formatter),
        Command::RootFor(args) => execute_root_for(args, graph, formatter),
        Command::Reason(args) => execute_reason(args, graph, formatter),
        Command::Rate(args) => execute_rate(args, graph, data_path, formatter),
        Command::Unrate(args) => execute_unrate(args, graph, data_path, formatter),
        Command::Edge(args) => execute_edge(args, graph, formatter),
    }
}
