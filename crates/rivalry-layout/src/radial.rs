//! Radial layout of a dominance tree
//!
//! The root sits at the origin and owns the full circle. Nodes are placed
//! breadth-first; each takes a slice of its parent's remaining arc sized by
//! its branch share, and lands on the middle of that slice at a distance
//! proportional to its path weight.

use crate::config::{LayoutConfig, LayoutScale};
use crate::error::LayoutError;
use crate::tree::{build_tree, DominanceTree};
use rivalry_domain::GraphView;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::f64::consts::PI;
use tracing::{debug, info};

/// Where one vertex is drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePlacement {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Tree children in placement order
    pub children: Vec<String>,
}

/// Placements keyed by vertex name
pub type Layout = BTreeMap<String, NodePlacement>;

/// Angular budget of a placed node: `[start, end)` with `used` marking how
/// far its children have consumed it
#[derive(Debug, Clone, Copy)]
struct Dial {
    start: f64,
    used: f64,
    end: f64,
}

/// Order siblings so the largest subtrees sit at both ends.
///
/// Siblings are sorted ascending by descendant count; even sort positions
/// go to the front of the result and odd ones to the back. The sort is
/// stable, so equal counts keep their incoming order.
pub fn canyon_order(tree: &DominanceTree, siblings: &[String]) -> VecDeque<String> {
    let mut sorted: Vec<&String> = siblings.iter().collect();
    sorted.sort_by_key(|name| tree.get(name).map_or(0, |n| n.total_descendants));

    let mut ordered = VecDeque::with_capacity(sorted.len());
    for (i, name) in sorted.into_iter().enumerate() {
        if i % 2 == 0 {
            ordered.push_front(name.clone());
        } else {
            ordered.push_back(name.clone());
        }
    }
    ordered
}

/// Place every node of `tree`, with distances multiplied by `k`.
pub fn place_tree(tree: &DominanceTree, k: f64) -> Layout {
    let mut placements = Layout::new();
    let Some(root) = tree.root_node() else {
        return placements;
    };

    let mut dials = HashMap::new();
    dials.insert(
        tree.root.clone(),
        Dial {
            start: -PI,
            used: -PI,
            end: PI,
        },
    );
    placements.insert(
        tree.root.clone(),
        NodePlacement {
            x: 0.0,
            y: 0.0,
            children: Vec::new(),
        },
    );

    let mut queue = canyon_order(tree, &root.children);
    while let Some(name) = queue.pop_front() {
        let Some(node) = tree.get(&name) else {
            continue;
        };
        let Some(parent) = node.parent.as_deref() else {
            continue;
        };
        let Some(parent_dial) = dials.get_mut(parent) else {
            continue;
        };

        let left = parent_dial.used;
        let right = left + (parent_dial.end - parent_dial.start) * node.share;
        parent_dial.used = right;
        dials.insert(
            name.clone(),
            Dial {
                start: left,
                used: left,
                end: right,
            },
        );

        let mid = (left + right) / 2.0;
        placements.insert(
            name.clone(),
            NodePlacement {
                x: mid.cos() * node.length * k,
                y: mid.sin() * node.length * k,
                children: Vec::new(),
            },
        );
        if let Some(parent_placement) = placements.get_mut(parent) {
            parent_placement.children.push(name.clone());
        }

        queue.extend(canyon_order(tree, &node.children));
    }

    placements
}

/// Lay out everything reachable from `source` around it.
///
/// Vertices not reachable from `source` are left out; see [`layout_all`].
///
/// # Errors
///
/// `LayoutError::Config` for an invalid configuration, `LayoutError::Search`
/// if `source` names no vertex.
pub fn layout<G: GraphView>(
    graph: &G,
    source: &str,
    config: &LayoutConfig,
    scale: LayoutScale,
) -> Result<Layout, LayoutError> {
    config.validate()?;
    let tree = build_tree(graph, source, config.branch_exponent)?;
    let placements = place_tree(&tree, config.scale(scale));
    debug!(source, placed = placements.len(), ?scale, "Laid out tree");
    Ok(placements)
}

/// Lay out every vertex in the graph.
///
/// Starts with `source`, then repeatedly roots a new layout at the first
/// unplaced vertex (in insertion order) and shifts the vertices it newly
/// places so they start `component_gap` to the right of everything placed
/// so far.
pub fn layout_all<G: GraphView>(
    graph: &G,
    source: &str,
    config: &LayoutConfig,
    scale: LayoutScale,
) -> Result<Layout, LayoutError> {
    let mut placements = layout(graph, source, config, scale)?;
    let mut components = 1;

    loop {
        let next = graph
            .vertex_ids()
            .into_iter()
            .filter_map(|id| graph.vertex(id))
            .find(|v| !placements.contains_key(&v.name));
        let Some(next) = next else {
            break;
        };

        let mut fresh: Layout = layout(graph, &next.name, config, scale)?
            .into_iter()
            .filter(|(name, _)| !placements.contains_key(name))
            .collect();
        let kept: Vec<String> = fresh.keys().cloned().collect();
        for placement in fresh.values_mut() {
            placement.children.retain(|child| kept.contains(child));
        }

        let right_edge = placements.values().map(|p| p.x).fold(f64::MIN, f64::max);
        let left_edge = fresh.values().map(|p| p.x).fold(f64::MAX, f64::min);
        let shift = right_edge + config.component_gap - left_edge;
        for placement in fresh.values_mut() {
            placement.x += shift;
        }

        placements.extend(fresh);
        components += 1;
    }

    info!(
        source,
        placed = placements.len(),
        components,
        "Laid out all components"
    );
    Ok(placements)
}
