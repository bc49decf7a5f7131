//! Integration tests for rivalry-search
//!
//! Scenario tests on a small hand-built web, plus property tests that check
//! Dijkstra against brute-force enumeration on random small graphs.

use proptest::prelude::*;
use rivalry_domain::{calculate_weight, Parity, RivalryStore};
use rivalry_search::{
    parity_paths, path_between, rooting_choice, shortest_paths, stance, Opinion, SearchError,
};
use rivalry_store::RivalryGraph;

/// A→B(8), B→C(8), A→C(2), C→D(5)
fn scenario_graph() -> RivalryGraph {
    let mut graph = RivalryGraph::new();
    graph.add_conference("X", &["A", "B", "C", "D"]).unwrap();
    graph.update_edge("A", "B", 8.0).unwrap();
    graph.update_edge("B", "C", 8.0).unwrap();
    graph.update_edge("A", "C", 2.0).unwrap();
    graph.update_edge("C", "D", 5.0).unwrap();
    graph
}

#[test]
fn test_source_maps_to_itself() {
    let graph = scenario_graph();
    let paths = shortest_paths(&graph, "A").unwrap();

    assert_eq!(paths["A"].weight(), 0.0);
    assert_eq!(paths["A"].vertices(), ["A"]);
}

#[test]
fn test_scenario_shortest_path() {
    let graph = scenario_graph();
    let paths = shortest_paths(&graph, "A").unwrap();

    // A→B→C is two strong edges, but A→C alone is lighter
    assert_eq!(paths["C"].vertices(), ["A", "C"]);
    assert_eq!(paths["D"].vertices(), ["A", "C", "D"]);
    assert!(
        (paths["D"].weight() - (calculate_weight(2.0) + calculate_weight(5.0))).abs() < 1e-12
    );
}

#[test]
fn test_scenario_parity_paths() {
    let graph = scenario_graph();
    let split = parity_paths(&graph, "A").unwrap();

    assert_eq!(split.even["D"].vertices(), ["A", "C", "D"]);
    assert_eq!(split.odd["D"].vertices(), ["A", "B", "C", "D"]);
    assert_eq!(split.even["C"].vertices(), ["A", "B", "C"]);
    assert_eq!(split.odd["C"].vertices(), ["A", "C"]);
    assert!(!split.even.contains_key("B"));
}

#[test]
fn test_scenario_after_deletion() {
    let mut graph = scenario_graph();
    graph.delete_edge("A", "C");

    let paths = shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths["D"].vertices(), ["A", "B", "C", "D"]);

    let split = parity_paths(&graph, "A").unwrap();
    assert!(!split.even.contains_key("D"));
    assert_eq!(split.odd["D"].parity(), Parity::Odd);
}

#[test]
fn test_unreachable_vertices_absent() {
    let graph = scenario_graph();
    let paths = shortest_paths(&graph, "D").unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths.contains_key("D"));
}

#[test]
fn test_path_between() {
    let mut graph = scenario_graph();

    let report = path_between(&graph, "A", "D").unwrap().unwrap();
    assert_eq!(report.forward.vertices(), ["A", "C", "D"]);
    assert!(report.reverse.is_none());
    assert!(!report.symmetric);

    graph.update_edge("D", "C", 5.0).unwrap();
    graph.update_edge("C", "A", 2.0).unwrap();
    let report = path_between(&graph, "A", "D").unwrap().unwrap();
    assert_eq!(report.reverse.as_ref().unwrap().vertices(), ["D", "C", "A"]);
    assert!(report.symmetric);

    assert!(path_between(&graph, "D", "B").unwrap().is_some());
    assert_eq!(
        path_between(&graph, "A", "Z"),
        Err(SearchError::VertexNotFound("Z".into()))
    );
}

#[test]
fn test_path_between_unreachable() {
    let graph = scenario_graph();
    assert_eq!(path_between(&graph, "D", "A").unwrap(), None);
}

#[test]
fn test_rooting_choice() {
    let graph = scenario_graph();

    // B is closer than D and one hop away (odd), so root for D
    let advice = rooting_choice(&graph, "A", "B", "D").unwrap();
    assert_eq!(advice.root_for, "D");
    assert_eq!(advice.path.vertices(), ["A", "B"]);

    // C is closer than D and one hop away, so root for D again
    let advice = rooting_choice(&graph, "A", "D", "C").unwrap();
    assert_eq!(advice.root_for, "D");
    assert_eq!(advice.path.target(), "C");
}

#[test]
fn test_rooting_choice_with_one_side_unreachable() {
    let mut graph = scenario_graph();
    graph.add_vertex_by_name("E", "Y").unwrap();

    // Only D is reachable and its path is even, so root for D
    let advice = rooting_choice(&graph, "A", "E", "D").unwrap();
    assert_eq!(advice.root_for, "D");

    let none = rooting_choice(&graph, "D", "A", "E");
    assert!(matches!(none, Err(SearchError::NoPath { .. })));
}

#[test]
fn test_stance() {
    let graph = scenario_graph();

    let support = stance(&graph, "A", "D", Opinion::RootFor).unwrap().unwrap();
    assert!(support.supportive);
    assert_eq!(support.path.vertices(), ["A", "C", "D"]);

    let against = stance(&graph, "A", "D", Opinion::RootAgainst).unwrap().unwrap();
    assert!(!against.supportive);
    assert_eq!(against.path.hops(), 3);

    // Even path to D is lighter
    let care = stance(&graph, "A", "D", Opinion::CareAbout).unwrap().unwrap();
    assert!(care.supportive);

    // B has no even path from A
    assert!(stance(&graph, "A", "B", Opinion::RootFor).unwrap().is_none());
    let care_b = stance(&graph, "A", "B", Opinion::CareAbout).unwrap().unwrap();
    assert!(!care_b.supportive);
}

/// Minimum weight over all simple paths, by exhaustive DFS
fn brute_force(n: usize, edges: &[(usize, usize, f64)], source: usize) -> Vec<Option<f64>> {
    fn walk(
        at: usize,
        weight: f64,
        visited: &mut [bool],
        adj: &[Vec<(usize, f64)>],
        best: &mut [Option<f64>],
    ) {
        if best[at].is_none_or(|b| weight < b) {
            best[at] = Some(weight);
        }
        for &(next, w) in &adj[at] {
            if !visited[next] {
                visited[next] = true;
                walk(next, weight + w, visited, adj, best);
                visited[next] = false;
            }
        }
    }

    let mut adj = vec![Vec::new(); n];
    for &(s, d, strength) in edges {
        adj[s].push((d, calculate_weight(strength)));
    }
    let mut best = vec![None; n];
    let mut visited = vec![false; n];
    visited[source] = true;
    walk(source, 0.0, &mut visited, &adj, &mut best);
    best
}

fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    (2usize..=7).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u32..=40).prop_filter_map("no self loops", |(s, d, q)| {
            (s != d).then_some((s, d, f64::from(q) / 4.0))
        });
        (Just(n), proptest::collection::vec(edge, 0..18))
    })
}

fn build(n: usize, edges: &[(usize, usize, f64)]) -> (RivalryGraph, Vec<(usize, usize, f64)>) {
    let mut graph = RivalryGraph::new();
    let names: Vec<String> = (0..n).map(|i| format!("T{}", i)).collect();
    graph.add_conference("X", &names).unwrap();

    // update_edge keeps the last strength per pair; mirror that for brute force
    let mut unique: Vec<(usize, usize, f64)> = Vec::new();
    for &(s, d, strength) in edges {
        graph.update_edge(&names[s], &names[d], strength).unwrap();
        match unique.iter_mut().find(|(us, ud, _)| *us == s && *ud == d) {
            Some(entry) => entry.2 = strength,
            None => unique.push((s, d, strength)),
        }
    }
    (graph, unique)
}

proptest! {
    /// Property: Dijkstra matches the minimum over all simple paths
    #[test]
    fn test_dijkstra_matches_brute_force((n, edges) in random_graph()) {
        let (graph, unique) = build(n, &edges);
        let expected = brute_force(n, &unique, 0);
        let paths = shortest_paths(&graph, "T0").unwrap();

        for (i, best) in expected.iter().enumerate() {
            let name = format!("T{}", i);
            match best {
                Some(w) => {
                    let path = paths.get(&name);
                    prop_assert!(path.is_some(), "{} should be reachable", name);
                    prop_assert!((path.unwrap().weight() - w).abs() < 1e-9);
                }
                None => prop_assert!(!paths.contains_key(&name)),
            }
        }
    }

    /// Property: parity maps hold the right hop parity and agree with the
    /// unconstrained search on the overall minimum
    #[test]
    fn test_parity_invariants((n, edges) in random_graph()) {
        let (graph, _) = build(n, &edges);
        let plain = shortest_paths(&graph, "T0").unwrap();
        let split = parity_paths(&graph, "T0").unwrap();

        for path in split.even.values() {
            prop_assert_eq!(path.hops() % 2, 0);
        }
        for path in split.odd.values() {
            prop_assert_eq!(path.hops() % 2, 1);
        }

        for (name, path) in &plain {
            let lightest = split.lightest(name);
            prop_assert!(lightest.is_some());
            prop_assert!((lightest.unwrap().weight() - path.weight()).abs() < 1e-9);
        }
        for name in split.even.keys().chain(split.odd.keys()) {
            prop_assert!(plain.contains_key(name));
        }
    }

    /// Property: every path is a real walk whose weight is the sum of its edges
    #[test]
    fn test_paths_are_consistent((n, edges) in random_graph()) {
        let (graph, _) = build(n, &edges);
        let paths = shortest_paths(&graph, "T0").unwrap();

        for (name, path) in &paths {
            prop_assert_eq!(path.target(), name.as_str());
            prop_assert_eq!(path.edges().len(), path.vertices().len() - 1);
            let sum: f64 = path.edges().iter().map(|e| e.weight()).sum();
            prop_assert!((sum - path.weight()).abs() < 1e-9);
            for (i, edge) in path.edges().iter().enumerate() {
                prop_assert!(edge.connects(&path.vertices()[i], &path.vertices()[i + 1]));
                prop_assert!(graph.find_edge(edge.source(), edge.dest()).is_some());
            }
        }
    }
}
