use clap::{Args, Parser, Subcommand, ValueEnum};
use facetnav_core::EmptyNodeBehaviour;
use facetnav_stats::{Statistics, StopAt};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "facetnav",
    about = "Browse a category hierarchy with item counts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (defaults to ./facetnav.toml or ./facetnav.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the levels below a node, or below the roots when no node is given
    Children {
        /// Node to descend from
        node: Option<u32>,

        /// Return the node itself as the single top level
        #[arg(long, requires = "node")]
        include_start: bool,

        /// Order every level by label
        #[arg(long)]
        sort_by_label: bool,

        #[command(flatten)]
        nav: NavArgs,
    },

    /// Show a node next to its siblings
    Siblings {
        /// Node whose siblings to list
        node: u32,

        #[command(flatten)]
        nav: NavArgs,
    },

    /// Show the breadcrumb from the roots down to a node
    Parents {
        /// Node at the end of the breadcrumb
        node: u32,

        /// Expand every breadcrumb level to all of its siblings
        #[arg(long)]
        fan_out: bool,

        /// Expand breadcrumb levels to siblings whose label contains TEXT
        /// (case-insensitive); implies --fan-out
        #[arg(long, value_name = "TEXT")]
        siblings_matching: Option<String>,

        #[command(flatten)]
        nav: NavArgs,
    },

    /// Summarize a snapshot
    Info {
        #[command(flatten)]
        nav: NavArgs,
    },
}

/// Options shared by every command that reads a snapshot.
#[derive(Args, Debug, Clone, Default)]
pub struct NavArgs {
    /// Snapshot file (JSON)
    #[arg(long, short = 's', env = "FACETNAV_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', env = "FACETNAV_FORMAT", value_enum)]
    pub format: Option<OutputFormat>,

    /// Counts attached to each level
    #[arg(long, value_enum)]
    pub statistics: Option<StatisticsMode>,

    /// Treatment of nodes without any assigned items
    #[arg(long, value_enum)]
    pub empty: Option<EmptyMode>,

    /// Stop at this level (roots are level 1)
    #[arg(long, value_name = "LEVEL", conflicts_with = "stop_at_distance")]
    pub stop_at_level: Option<u32>,

    /// Stop this many levels away from the node navigated from
    #[arg(long, value_name = "LEVELS")]
    pub stop_at_distance: Option<u32>,
}

impl NavArgs {
    /// Depth bound requested on the command line.
    pub fn stop_at(&self) -> Option<StopAt> {
        match (self.stop_at_level, self.stop_at_distance) {
            (Some(level), _) => Some(StopAt::Level(level)),
            (None, Some(distance)) => Some(StopAt::Distance(distance)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree, one node per line
    #[default]
    Tree,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatisticsMode {
    /// Item count and visible children count
    #[default]
    All,
    /// Item count only
    Cardinality,
    /// Visible children count only
    ChildrenCount,
    /// No counts
    None,
}

impl From<StatisticsMode> for Statistics {
    fn from(mode: StatisticsMode) -> Self {
        match mode {
            StatisticsMode::All => Statistics::all(),
            StatisticsMode::Cardinality => Statistics::cardinality_only(),
            StatisticsMode::ChildrenCount => Statistics {
                cardinality: false,
                children_count: true,
            },
            StatisticsMode::None => Statistics::none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyMode {
    /// Keep nodes without items, showing zero counts
    LeaveEmpty,
    /// Hide nodes without items
    RemoveEmpty,
}

impl From<EmptyMode> for EmptyNodeBehaviour {
    fn from(mode: EmptyMode) -> Self {
        match mode {
            EmptyMode::LeaveEmpty => EmptyNodeBehaviour::LeaveEmpty,
            EmptyMode::RemoveEmpty => EmptyNodeBehaviour::RemoveEmpty,
        }
    }
}
