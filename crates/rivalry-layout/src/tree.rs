//! Dominance tree over a shortest-path result
//!
//! The last edge of every shortest path links a parent to a child. Because
//! Dijkstra's predecessor links never form a cycle, these links make a tree
//! rooted at the search source.

use crate::error::LayoutError;
use rivalry_domain::GraphView;
use rivalry_search::{shortest_paths, PathMap};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One vertex of a [`DominanceTree`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Number of other vertices whose shortest path runs through this one
    pub total_descendants: usize,
    /// Direct children, in name order
    pub children: Vec<String>,
    /// Parent name; `None` for the root
    pub parent: Option<String>,
    /// Shortest-path weight from the root
    pub length: f64,
    /// Fraction of the parent's angular budget; siblings sum to 1.0
    pub share: f64,
}

/// Shortest-path tree annotated with subtree sizes and branch shares
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominanceTree {
    /// Name of the search source
    pub root: String,
    /// Every reachable vertex, keyed by name
    pub nodes: BTreeMap<String, TreeNode>,
}

impl DominanceTree {
    /// Build the tree from a set of shortest paths out of `root`.
    ///
    /// Each sibling group gets shares proportional to
    /// `(total_descendants + 1) ^ exponent`.
    pub fn from_paths(root: &str, paths: &PathMap, exponent: f64) -> Self {
        let mut nodes: BTreeMap<String, TreeNode> = paths
            .iter()
            .map(|(name, path)| {
                let node = TreeNode {
                    total_descendants: 0,
                    children: Vec::new(),
                    parent: path.predecessor().map(str::to_string),
                    length: path.weight(),
                    share: 1.0,
                };
                (name.clone(), node)
            })
            .collect();

        for (name, path) in paths {
            // Every vertex before the target has the target below it
            let ancestors = &path.vertices()[..path.vertices().len() - 1];
            for ancestor in ancestors {
                if let Some(node) = nodes.get_mut(ancestor) {
                    node.total_descendants += 1;
                }
            }
            if let Some(parent) = path.predecessor() {
                if let Some(node) = nodes.get_mut(parent) {
                    node.children.push(name.clone());
                }
            }
        }

        let groups: Vec<Vec<String>> = nodes.values().map(|n| n.children.clone()).collect();
        for siblings in groups {
            let raw: Vec<f64> = siblings
                .iter()
                .map(|child| (nodes[child].total_descendants as f64 + 1.0).powf(exponent))
                .collect();
            let sum: f64 = raw.iter().sum();
            for (child, value) in siblings.iter().zip(raw) {
                if let Some(node) = nodes.get_mut(child) {
                    node.share = value / sum;
                }
            }
        }

        Self {
            root: root.to_string(),
            nodes,
        }
    }

    /// Look up a node by name
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.nodes.get(name)
    }

    /// The root node
    pub fn root_node(&self) -> Option<&TreeNode> {
        self.nodes.get(&self.root)
    }

    /// Number of vertices in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no vertices
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Run the unconstrained search from `source` and reduce it to a
/// [`DominanceTree`].
///
/// # Errors
///
/// `LayoutError::Search` if `source` names no vertex.
pub fn build_tree<G: GraphView>(
    graph: &G,
    source: &str,
    exponent: f64,
) -> Result<DominanceTree, LayoutError> {
    let paths = shortest_paths(graph, source)?;
    let tree = DominanceTree::from_paths(source, &paths, exponent);
    debug!(source, nodes = tree.len(), "Built dominance tree");
    Ok(tree)
}
