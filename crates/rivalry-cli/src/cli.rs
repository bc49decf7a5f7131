//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use rivalry_search::Opinion;
use std::path::PathBuf;

/// Rivalry CLI - Explore who to root for through a web of rivalries.
#[derive(Debug, Parser)]
#[command(name = "rivalry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data file (JSON snapshot, or TOML/JSON seed dataset)
    #[arg(short, long, global = true, env = "RIVALRY_DATA")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List teams
    Teams(TeamsArgs),

    /// Show the shortest path between two teams and the way back
    Path(PairArgs),

    /// Show even and odd shortest paths from a team to every other team
    Paths(SourceArgs),

    /// Show the dominance tree rooted at a team
    Tree(SourceArgs),

    /// Compute radial positions around a team
    Layout(LayoutArgs),

    /// Decide which of two teams a fan should root for
    RootFor(RootForArgs),

    /// Find the rivalry chain behind a fan's opinion of a team
    Reason(ReasonArgs),

    /// Set the strength of a rivalry, creating it if needed
    Rate(RateArgs),

    /// Remove a rivalry
    Unrate(PairArgs),

    /// Show one rivalry
    Edge(PairArgs),
}

/// Arguments for the teams command.
#[derive(Debug, Parser)]
pub struct TeamsArgs {
    /// Only list teams in this conference
    #[arg(long)]
    pub conference: Option<String>,
}

/// Two teams, in order.
#[derive(Debug, Parser)]
pub struct PairArgs {
    /// Source team
    pub from: String,

    /// Destination team
    pub to: String,
}

/// A single source team.
#[derive(Debug, Parser)]
pub struct SourceArgs {
    /// Team to search from
    pub from: String,
}

/// Arguments for the layout command.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// Team at the center
    pub from: String,

    /// Use the overview scale instead of the detail scale
    #[arg(long)]
    pub overview: bool,

    /// Also place teams that cannot be reached from the center
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the root-for command.
#[derive(Debug, Parser)]
pub struct RootForArgs {
    /// The fan's team
    pub fan: String,

    /// First candidate
    pub team_a: String,

    /// Second candidate
    pub team_b: String,
}

/// Arguments for the reason command.
#[derive(Debug, Parser)]
pub struct ReasonArgs {
    /// The fan's team
    pub fan: String,

    /// Team the opinion is about
    pub target: String,

    /// What the fan wants a reason for
    #[arg(short, long, value_enum, default_value = "care-about")]
    pub opinion: OpinionArg,
}

/// Arguments for the rate command.
#[derive(Debug, Parser)]
pub struct RateArgs {
    /// Source team
    pub from: String,

    /// Destination team
    pub to: String,

    /// Rivalry strength, conventionally 1-10 in steps of 0.25
    pub strength: f64,
}

/// Opinion argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OpinionArg {
    /// Find a reason to root for the team
    RootFor,
    /// Find a reason to root against the team
    RootAgainst,
    /// Whichever reason is stronger
    CareAbout,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<OpinionArg> for Opinion {
    fn from(opinion: OpinionArg) -> Self {
        match opinion {
            OpinionArg::RootFor => Opinion::RootFor,
            OpinionArg::RootAgainst => Opinion::RootAgainst,
            OpinionArg::CareAbout => Opinion::CareAbout,
        }
    }
}
