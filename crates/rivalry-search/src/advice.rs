//! Path-based answers for a fan
//!
//! These are the questions the rivalry web exists to answer: how two teams
//! are connected, which of two teams a fan should pull for, and why a fan
//! should (or should not) care about a third team.

use crate::error::SearchError;
use crate::parity::parity_paths;
use crate::shortest::shortest_paths;
use rivalry_domain::{GraphView, Path};
use serde::Serialize;
use tracing::debug;

/// Connection between two named teams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// Lightest path from the source to the destination
    pub forward: Path,
    /// Lightest path back, if the source is reachable from the destination
    pub reverse: Option<Path>,
    /// Whether the way back retraces the forward path exactly
    pub symmetric: bool,
}

/// Which of two teams a fan should root for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootingAdvice {
    /// Team to root for
    pub root_for: String,
    /// The path the decision was based on
    pub path: Path,
}

/// How a fan relates to a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Opinion {
    /// Looking for a reason to support the team
    RootFor,
    /// Looking for a reason to oppose the team
    RootAgainst,
    /// Whichever reason is stronger
    CareAbout,
}

/// A reason for a fan's stance toward a team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stance {
    /// The chain of rivalries behind the stance
    pub path: Path,
    /// True for an even ("ally") path, false for an odd ("rival") one
    pub supportive: bool,
}

fn require<G: GraphView>(graph: &G, name: &str) -> Result<(), SearchError> {
    graph
        .vertex_id(name)
        .map(|_| ())
        .ok_or_else(|| SearchError::VertexNotFound(name.to_string()))
}

/// Report the lightest path between two teams and whether it is mirrored
/// on the way back.
///
/// Returns `Ok(None)` when `dest` is unreachable from `source`.
pub fn path_between<G: GraphView>(
    graph: &G,
    source: &str,
    dest: &str,
) -> Result<Option<PathReport>, SearchError> {
    require(graph, dest)?;
    let Some(forward) = shortest_paths(graph, source)?.remove(dest) else {
        return Ok(None);
    };
    let reverse = shortest_paths(graph, dest)?.remove(source);

    let symmetric = reverse.as_ref().is_some_and(|back| {
        back.vertices().iter().rev().eq(forward.vertices().iter())
    });

    Ok(Some(PathReport {
        forward,
        reverse,
        symmetric,
    }))
}

/// Decide which of `team_a` and `team_b` a fan of `fan` should root for.
///
/// The closer team decides: strictly lighter picks `team_a`, otherwise
/// `team_b`. If the closer team's path is even the fan roots for it,
/// otherwise for the other team. When only one team is reachable, that
/// team decides.
///
/// # Errors
///
/// `VertexNotFound` for an unknown name, `NoPath` if neither team is
/// reachable from `fan`.
pub fn rooting_choice<G: GraphView>(
    graph: &G,
    fan: &str,
    team_a: &str,
    team_b: &str,
) -> Result<RootingAdvice, SearchError> {
    require(graph, team_a)?;
    require(graph, team_b)?;
    let mut paths = shortest_paths(graph, fan)?;

    let (closer, other, path) = match (paths.remove(team_a), paths.remove(team_b)) {
        (Some(a), Some(b)) if a.weight() < b.weight() => (team_a, team_b, a),
        (_, Some(b)) => (team_b, team_a, b),
        (Some(a), None) => (team_a, team_b, a),
        (None, None) => {
            return Err(SearchError::NoPath {
                from: fan.to_string(),
                to: format!("{} or {}", team_a, team_b),
            })
        }
    };

    let root_for = if path.is_even() { closer } else { other };
    debug!(fan, closer, root_for, "Chose rooting side");
    Ok(RootingAdvice {
        root_for: root_for.to_string(),
        path,
    })
}

/// Find the chain of rivalries behind a fan's opinion of `target`.
///
/// `RootFor` looks for an even path, `RootAgainst` for an odd one, and
/// `CareAbout` takes the lighter of the two (even on a tie). Returns
/// `Ok(None)` when no path of the wanted parity exists.
pub fn stance<G: GraphView>(
    graph: &G,
    fan: &str,
    target: &str,
    opinion: Opinion,
) -> Result<Option<Stance>, SearchError> {
    require(graph, target)?;
    let mut paths = parity_paths(graph, fan)?;

    let even = paths.even.remove(target);
    let odd = paths.odd.remove(target);
    let chosen = match opinion {
        Opinion::RootFor => even,
        Opinion::RootAgainst => odd,
        Opinion::CareAbout => match (even, odd) {
            (Some(e), Some(o)) => Some(if e.weight() <= o.weight() { e } else { o }),
            (e, o) => e.or(o),
        },
    };

    Ok(chosen.map(|path| Stance {
        supportive: path.is_even(),
        path,
    }))
}
