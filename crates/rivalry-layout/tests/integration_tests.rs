//! Integration tests for rivalry-layout

use proptest::prelude::*;
use rivalry_domain::RivalryStore;
use rivalry_layout::{build_tree, canyon_order, layout, layout_all, LayoutConfig, LayoutScale};
use std::f64::consts::PI;
use rivalry_search::shortest_paths;
use rivalry_store::RivalryGraph;

/// A small web with a hub (H), a branch with depth, and a few leaves
fn web() -> RivalryGraph {
    let mut graph = RivalryGraph::new();
    graph
        .add_conference("North", &["H", "A", "B", "C", "D", "E", "F"])
        .unwrap();
    for (from, to, strength) in [
        ("H", "A", 9.0),
        ("H", "B", 6.0),
        ("H", "C", 3.0),
        ("A", "D", 8.0),
        ("A", "E", 7.5),
        ("D", "F", 10.0),
        ("B", "A", 2.0),
    ] {
        graph.update_edge(from, to, strength).unwrap();
    }
    graph
}

#[test]
fn test_sibling_shares_sum_to_one() {
    let tree = build_tree(&web(), "H", 0.66).unwrap();

    for node in tree.nodes.values() {
        if node.children.is_empty() {
            continue;
        }
        let sum: f64 = node.children.iter().map(|c| tree.nodes[c].share).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_tree_parents_follow_shortest_paths() {
    let graph = web();
    let tree = build_tree(&graph, "H", 0.66).unwrap();
    let paths = shortest_paths(&graph, "H").unwrap();

    assert_eq!(tree.len(), paths.len());
    for (name, path) in &paths {
        let node = &tree.nodes[name];
        assert_eq!(node.parent.as_deref(), path.predecessor());
        assert_eq!(node.length, path.weight());
    }
    assert_eq!(tree.nodes["H"].total_descendants, 6);
    assert_eq!(tree.nodes["A"].total_descendants, 3);
}

#[test]
fn test_root_at_origin_and_distance_matches_weight() {
    let graph = web();
    let config = LayoutConfig::default();
    let placed = layout(&graph, "H", &config, LayoutScale::Detail).unwrap();
    let tree = build_tree(&graph, "H", config.branch_exponent).unwrap();

    assert_eq!(placed["H"].x, 0.0);
    assert_eq!(placed["H"].y, 0.0);
    for (name, placement) in &placed {
        let radius = placement.x.hypot(placement.y);
        assert!((radius - tree.nodes[name].length * 35.0).abs() < 1e-9);
    }
}

#[test]
fn test_overview_is_a_scaled_detail() {
    let graph = web();
    let config = LayoutConfig::default();
    let detail = layout(&graph, "H", &config, LayoutScale::Detail).unwrap();
    let overview = layout(&graph, "H", &config, LayoutScale::Overview).unwrap();

    for (name, d) in &detail {
        let o = &overview[name];
        assert!((o.x - d.x * 25.0 / 35.0).abs() < 1e-9);
        assert!((o.y - d.y * 25.0 / 35.0).abs() < 1e-9);
        assert_eq!(o.children, d.children);
    }
}

#[test]
fn test_children_match_tree() {
    let graph = web();
    let placed = layout(&graph, "H", &LayoutConfig::default(), LayoutScale::Detail).unwrap();
    let tree = build_tree(&graph, "H", 0.66).unwrap();

    for (name, placement) in &placed {
        let mut children = placement.children.clone();
        children.sort();
        assert_eq!(children, tree.nodes[name].children);
    }
}

#[test]
fn test_hub_children_fill_the_circle_in_canyon_order() {
    let mut graph = RivalryGraph::new();
    graph
        .add_conference("X", &["R", "A", "B", "C", "A1", "A2", "A3", "B1"])
        .unwrap();
    for (from, to) in [
        ("R", "A"),
        ("R", "B"),
        ("R", "C"),
        ("A", "A1"),
        ("A", "A2"),
        ("A", "A3"),
        ("B", "B1"),
    ] {
        graph.update_edge(from, to, 6.0).unwrap();
    }

    let config = LayoutConfig::default();
    let tree = build_tree(&graph, "R", config.branch_exponent).unwrap();
    let placed = layout(&graph, "R", &config, LayoutScale::Detail).unwrap();

    // Descendants: A=3, B=1, C=0; the heaviest branch sits next to the lightest
    let expected: Vec<String> = canyon_order(&tree, &tree.nodes["R"].children).into();
    assert_eq!(expected, ["A", "C", "B"]);
    assert_eq!(placed["R"].children, expected);

    let mut used = -PI;
    for name in &expected {
        let share = tree.nodes[name].share;
        let angle = placed[name].y.atan2(placed[name].x);
        assert!((angle - (used + share * PI)).abs() < 1e-9, "{} at {}", name, angle);
        used += share * 2.0 * PI;
    }
    assert!((used - PI).abs() < 1e-9);
}

#[test]
fn test_unreachable_vertices_are_omitted() {
    let mut graph = web();
    graph.add_vertex_by_name("Z", "South").unwrap();

    let placed = layout(&graph, "H", &LayoutConfig::default(), LayoutScale::Detail).unwrap();
    assert_eq!(placed.len(), 7);
    assert!(!placed.contains_key("Z"));
}

#[test]
fn test_layout_all_places_components_to_the_right() {
    let mut graph = RivalryGraph::new();
    graph.add_conference("X", &["A", "B", "C", "D"]).unwrap();
    graph.update_edge("A", "B", 5.0).unwrap();
    graph.update_edge("C", "D", 5.0).unwrap();

    let config = LayoutConfig::default();
    let placed = layout_all(&graph, "A", &config, LayoutScale::Detail).unwrap();
    assert_eq!(placed.len(), 4);

    let first_max = placed["A"].x.max(placed["B"].x);
    assert!((placed["C"].x - (first_max + config.component_gap)).abs() < 1e-9);
    assert!(placed["D"].x > placed["C"].x);
    assert_eq!(placed["C"].children, ["D"]);
}

#[test]
fn test_layout_all_drops_already_placed_children() {
    let mut graph = RivalryGraph::new();
    graph.add_conference("X", &["A", "B", "C"]).unwrap();
    graph.update_edge("A", "B", 5.0).unwrap();
    graph.update_edge("C", "A", 5.0).unwrap();

    let placed = layout_all(&graph, "A", &LayoutConfig::default(), LayoutScale::Overview).unwrap();
    assert_eq!(placed.len(), 3);
    assert!(placed["C"].children.is_empty());
    assert_eq!(placed["A"].children, ["B"]);
    assert_eq!(placed["A"].x, 0.0);
}

fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2usize..=8).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 4u32..=40).prop_filter_map("no self loops", |(s, d, q)| {
            (s != d).then_some((s, d, f64::from(q) / 4.0))
        });
        (Just(n), proptest::collection::vec(edge, 0..16))
    })
}

fn build(n: usize, edges: &[(usize, usize, f64)]) -> RivalryGraph {
    let mut graph = RivalryGraph::new();
    let names: Vec<String> = (0..n).map(|i| format!("T{}", i)).collect();
    graph.add_conference("X", &names).unwrap();
    for &(s, d, strength) in edges {
        graph.update_edge(&names[s], &names[d], strength).unwrap();
    }
    graph
}

proptest! {
    /// Property: layout_all places every vertex exactly once with finite
    /// coordinates, and every child edge points at a placed vertex
    #[test]
    fn test_layout_all_is_total((n, edges) in random_graph()) {
        let graph = build(n, &edges);
        let placed = layout_all(&graph, "T0", &LayoutConfig::default(), LayoutScale::Detail).unwrap();

        prop_assert_eq!(placed.len(), n);
        let mut seen_as_child = std::collections::HashSet::new();
        for placement in placed.values() {
            prop_assert!(placement.x.is_finite() && placement.y.is_finite());
            for child in &placement.children {
                prop_assert!(placed.contains_key(child));
                prop_assert!(seen_as_child.insert(child.clone()));
            }
        }
    }

    /// Property: sibling shares always sum to one
    #[test]
    fn test_shares_normalized((n, edges) in random_graph(), exponent in 0.1f64..2.0) {
        let graph = build(n, &edges);
        let tree = build_tree(&graph, "T0", exponent).unwrap();

        for node in tree.nodes.values() {
            if !node.children.is_empty() {
                let sum: f64 = node.children.iter().map(|c| tree.nodes[c].share).sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
            }
        }
    }
}
