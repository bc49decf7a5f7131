//! Seed datasets
//!
//! A seed is the startup dataset: conference rosters plus one raw rating
//! table per team. Ratings are rescaled with the batch normalization before
//! they become edges.
//!
//! ```toml
//! [[conferences]]
//! name = "B10"
//! teams = ["Michigan", "Ohio State", "Michigan State"]
//!
//! [[ratings]]
//! team = "Michigan"
//! rivals = ["Ohio State", "Michigan State"]
//! scores = [100.0, 55.0]
//! ```

use crate::{RivalryGraph, StoreError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A conference roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceSeed {
    /// Conference label
    pub name: String,
    /// Team names
    pub teams: Vec<String>,
}

/// Raw ratings of one team's rivals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSeed {
    /// Rating team
    pub team: String,
    /// Rated rivals
    pub rivals: Vec<String>,
    /// Raw scores, parallel to `rivals`
    pub scores: Vec<f64>,
}

/// Startup dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedDataset {
    /// Conference rosters
    #[serde(default)]
    pub conferences: Vec<ConferenceSeed>,

    /// Rating tables
    #[serde(default)]
    pub ratings: Vec<RatingSeed>,
}

impl SeedDataset {
    /// Parse a TOML dataset
    pub fn from_toml_str(contents: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse a JSON dataset
    pub fn from_json_str(contents: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Build a graph from this dataset
    pub fn build(&self) -> Result<RivalryGraph, StoreError> {
        let mut graph = RivalryGraph::new();

        for conference in &self.conferences {
            graph.add_conference(&conference.name, &conference.teams)?;
        }
        for rating in &self.ratings {
            graph.batch_edges_from_weights(&rating.team, &rating.rivals, &rating.scores)?;
        }

        info!(
            conferences = self.conferences.len(),
            edges = graph.edge_count(),
            "Built graph from seed dataset"
        );
        Ok(graph)
    }
}
