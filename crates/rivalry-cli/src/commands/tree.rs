//! Tree and layout command implementations.

use crate::cli::{LayoutArgs, SourceArgs};
use crate::error::Result;
use crate::output::Formatter;
use rivalry_layout::{build_tree, layout, layout_all, LayoutConfig, LayoutScale};
use rivalry_store::RivalryGraph;

/// Execute the tree command.
pub fn execute_tree(
    args: SourceArgs,
    graph: &RivalryGraph,
    config: &LayoutConfig,
    formatter: &Formatter,
) -> Result<String> {
    let tree = build_tree(graph, &args.from, config.branch_exponent)?;
    formatter.format_tree(&tree)
}

/// Execute the layout command.
pub fn execute_layout(
    args: LayoutArgs,
    graph: &RivalryGraph,
    config: &LayoutConfig,
    formatter: &Formatter,
) -> Result<String> {
    let scale = if args.overview {
        LayoutScale::Overview
    } else {
        LayoutScale::Detail
    };

    let placements = if args.all {
        layout_all(graph, &args.from, config, scale)?
    } else {
        layout(graph, &args.from, config, scale)?
    };
    formatter.format_layout(&placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use rivalry_domain::RivalryStore;

    fn graph() -> RivalryGraph {
        let mut graph = RivalryGraph::new();
        graph.add_conference("X", &["A", "B", "C"]).unwrap();
        graph.update_edge("A", "B", 5.0).unwrap();
        graph
    }

    #[test]
    fn test_tree_quiet_lists_parents() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = execute_tree(
            SourceArgs { from: "A".into() },
            &graph(),
            &LayoutConfig::default(),
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "A -\nB A");
    }

    #[test]
    fn test_layout_all_includes_unreachable() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = |all| LayoutArgs {
            from: "A".into(),
            overview: true,
            all,
        };

        let reachable = execute_layout(args(false), &graph(), &LayoutConfig::default(), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&reachable).unwrap();
        assert!(value.get("C").is_none());

        let everything = execute_layout(args(true), &graph(), &LayoutConfig::default(), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&everything).unwrap();
        assert!(value["C"]["x"].as_f64().unwrap() > value["B"]["x"].as_f64().unwrap());
    }
}
