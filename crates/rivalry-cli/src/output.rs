//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rivalry_domain::{Edge, Path, Vertex};
use rivalry_layout::{DominanceTree, Layout};
use rivalry_search::{ParityPaths, PathReport, RootingAdvice, Stance};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of teams.
    pub fn format_teams(&self, teams: &[&Vertex]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(teams)?),
            OutputFormat::Quiet => Ok(teams
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if teams.is_empty() {
                    return Ok(self.colorize("No teams found.", "yellow"));
                }
                let rows = teams.iter().map(|t| {
                    vec![
                        t.name.clone(),
                        t.conference.clone(),
                        t.display_name.clone(),
                    ]
                });
                Ok(table(["Team", "Conference", "Display Name"], rows))
            }
        }
    }

    /// Format a path between two teams and the way back.
    pub fn format_path_report(&self, report: &PathReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.forward.to_string()),
            OutputFormat::Table => {
                let mut lines = vec![self.path_line(&report.forward)];
                match &report.reverse {
                    Some(back) if report.symmetric => {
                        lines.push(self.info(&format!("Same path back ({:.3})", back.weight())))
                    }
                    Some(back) => lines.push(self.path_line(back)),
                    None => lines.push(self.warning(&format!(
                        "No path back from {} to {}",
                        report.forward.target(),
                        report.forward.source()
                    ))),
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format the even and odd path sets from one source.
    pub fn format_parity_paths(&self, paths: &ParityPaths) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(paths)?),
            OutputFormat::Quiet => Ok(paths
                .even
                .values()
                .chain(paths.odd.values())
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if paths.even.len() + paths.odd.len() <= 1 {
                    return Ok(self.colorize("No other team is reachable.", "yellow"));
                }
                let mut rows = Vec::new();
                for (label, map) in [("even", &paths.even), ("odd", &paths.odd)] {
                    for (team, path) in map {
                        if path.hops() == 0 {
                            continue;
                        }
                        rows.push(vec![
                            team.clone(),
                            label.to_string(),
                            path.hops().to_string(),
                            format!("{:.3}", path.weight()),
                            path.to_string(),
                        ]);
                    }
                }
                Ok(table(["Team", "Parity", "Hops", "Weight", "Path"], rows))
            }
        }
    }

    /// Format a dominance tree.
    pub fn format_tree(&self, tree: &DominanceTree) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
            OutputFormat::Quiet => Ok(tree
                .nodes
                .iter()
                .map(|(name, node)| format!("{} {}", name, node.parent.as_deref().unwrap_or("-")))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let rows = tree.nodes.iter().map(|(name, node)| {
                    vec![
                        name.clone(),
                        node.parent.clone().unwrap_or_default(),
                        node.total_descendants.to_string(),
                        format!("{:.1}%", node.share * 100.0),
                        format!("{:.3}", node.length),
                    ]
                });
                Ok(table(["Team", "Parent", "Descendants", "Share", "Length"], rows))
            }
        }
    }

    /// Format node placements.
    pub fn format_layout(&self, layout: &Layout) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(layout)?),
            OutputFormat::Quiet => Ok(layout
                .iter()
                .map(|(name, p)| format!("{} {:.3} {:.3}", name, p.x, p.y))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let rows = layout.iter().map(|(name, p)| {
                    vec![
                        name.clone(),
                        format!("{:.2}", p.x),
                        format!("{:.2}", p.y),
                        p.children.join(", "),
                    ]
                });
                Ok(table(["Team", "X", "Y", "Children"], rows))
            }
        }
    }

    /// Format rooting advice.
    pub fn format_advice(&self, advice: &RootingAdvice) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(advice)?),
            OutputFormat::Quiet => Ok(advice.root_for.clone()),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.success(&format!("Root for {}", advice.root_for)),
                self.path_line(&advice.path)
            )),
        }
    }

    /// Format the reason behind a stance, if one was found.
    pub fn format_stance(&self, target: &str, stance: Option<&Stance>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&stance)?),
            OutputFormat::Quiet => Ok(stance.map(|s| s.path.to_string()).unwrap_or_default()),
            OutputFormat::Table => Ok(match stance {
                Some(s) if s.supportive => format!(
                    "{}\n{}",
                    self.success(&format!("Reason to root for {}", target)),
                    self.path_line(&s.path)
                ),
                Some(s) => format!(
                    "{}\n{}",
                    self.error(&format!("Reason to root against {}", target)),
                    self.path_line(&s.path)
                ),
                None => self.warning(&format!("No such reason involving {}", target)),
            }),
        }
    }

    /// Format a single rivalry.
    pub fn format_edge(&self, edge: &Edge) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(edge)?),
            OutputFormat::Quiet => Ok(edge.strength().to_string()),
            OutputFormat::Table => Ok(table(
                ["From", "To", "Strength", "Weight"],
                [vec![
                    edge.source().to_string(),
                    edge.dest().to_string(),
                    edge.strength().to_string(),
                    format!("{:.4}", edge.weight()),
                ]],
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// A path with its hop count, colored by parity.
    fn path_line(&self, path: &Path) -> String {
        let color = if path.is_even() { "green" } else { "red" };
        let line = format!(
            "{} ({} hops, {}, {:.3})",
            path,
            path.hops(),
            path.parity(),
            path.weight()
        );
        self.colorize(&line, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn table<const N: usize>(
    header: [&str; N],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
