//! Edge module - a directed rivalry between two teams

use crate::strength::calculate_weight;
use serde::Serialize;

/// A directed rivalry
///
/// Identity is the ordered (source, dest) pair. An A→B rivalry is
/// independent of B→A. The weight is always derived from the strength and
/// cannot be set on its own. There is no `Deserialize` impl; stores rebuild
/// edges from (source, dest, strength) records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    source: String,
    dest: String,
    strength: f64,
    weight: f64,
}

impl Edge {
    /// Create a rivalry, deriving its weight
    ///
    /// # Examples
    ///
    /// ```
    /// use rivalry_domain::{calculate_weight, Edge};
    ///
    /// let e = Edge::new("Auburn", "Alabama", 10.0);
    /// assert_eq!(e.weight(), calculate_weight(10.0));
    /// ```
    pub fn new(source: impl Into<String>, dest: impl Into<String>, strength: f64) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            strength,
            weight: calculate_weight(strength),
        }
    }

    /// Source team name
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destination team name
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// Raw rivalry strength
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Derived path weight
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Change the strength, recomputing the weight
    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength;
        self.weight = calculate_weight(strength);
    }

    /// Check whether this edge connects `source` to `dest`
    pub fn connects(&self, source: &str, dest: &str) -> bool {
        self.source == source && self.dest == dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_strength_recomputes_weight() {
        let mut e = Edge::new("Army", "Navy", 2.0);
        let before = e.weight();

        e.set_strength(9.5);
        assert_eq!(e.strength(), 9.5);
        assert_eq!(e.weight(), calculate_weight(9.5));
        assert!(e.weight() < before);
    }

    #[test]
    fn test_connects_is_directed() {
        let e = Edge::new("Army", "Navy", 8.0);
        assert!(e.connects("Army", "Navy"));
        assert!(!e.connects("Navy", "Army"));
    }
}
