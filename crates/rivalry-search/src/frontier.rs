//! Min-priority frontier and the shared Dijkstra loop
//!
//! Both searches run the same loop; they differ only in what a search state
//! is. The plain search walks vertices, the parity search walks
//! (vertex, parity) pairs of the two-layer graph.

use rivalry_domain::{Edge, Path};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

/// Heap entry ordered by weight, then by insertion sequence
#[derive(Debug, Clone, Copy)]
struct Entry<S> {
    weight: f64,
    seq: u64,
    state: S,
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the lightest entry,
        // earliest pushed on exact ties
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> {}

/// Binary min-heap of tentative search states
#[derive(Debug)]
pub(crate) struct Frontier<S> {
    heap: BinaryHeap<Entry<S>>,
    next_seq: u64,
}

impl<S> Frontier<S> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, state: S, weight: f64) {
        self.heap.push(Entry {
            weight,
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(S, f64)> {
        self.heap.pop().map(|e| (e.state, e.weight))
    }
}

/// Settled states of one search with their predecessor links
#[derive(Debug)]
pub(crate) struct Exploration<'g, S> {
    start: S,
    pred: HashMap<S, (S, &'g Edge)>,
    order: Vec<S>,
}

impl<'g, S: Copy + Eq + Hash> Exploration<'g, S> {
    /// Settled states in the order they were popped
    pub(crate) fn settled(&self) -> &[S] {
        &self.order
    }

    /// Rebuild the path to `target` by walking predecessor links
    pub(crate) fn path_to(&self, target: S, source_name: &str) -> Option<Path> {
        let mut chain = Vec::new();
        let mut cursor = target;
        while cursor != self.start {
            let (prev, edge) = self.pred.get(&cursor)?;
            chain.push(*edge);
            cursor = *prev;
        }

        let mut path = Path::new(source_name);
        for edge in chain.into_iter().rev() {
            path.push(edge.dest(), edge.clone());
        }
        Some(path)
    }
}

/// Run Dijkstra from `start`
///
/// `expand` yields the successor states of a state together with the edge
/// that reaches them. Edge weights must be positive. A successor is only
/// replaced on a strictly lighter candidate, so the first path found wins
/// exact ties.
pub(crate) fn explore<'g, S, F>(start: S, mut expand: F) -> Exploration<'g, S>
where
    S: Copy + Eq + Hash,
    F: FnMut(S) -> Vec<(S, &'g Edge)>,
{
    let mut best = HashMap::from([(start, 0.0)]);
    let mut pred = HashMap::new();
    let mut settled = HashSet::new();
    let mut order = Vec::new();
    let mut frontier = Frontier::new();
    frontier.push(start, 0.0);

    while let Some((state, weight)) = frontier.pop() {
        if !settled.insert(state) {
            continue;
        }
        order.push(state);

        for (next, edge) in expand(state) {
            if settled.contains(&next) {
                continue;
            }
            let candidate = weight + edge.weight();
            let improves = best.get(&next).is_none_or(|&current| candidate < current);
            if improves {
                best.insert(next, candidate);
                pred.insert(next, (state, edge));
                frontier.push(next, candidate);
            }
        }
    }

    Exploration {
        start,
        pred,
        order,
    }
}
