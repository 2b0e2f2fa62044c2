use crate::config_file::ConfigFileError;
use colored::Colorize;
use facetnav_stats::NavigationError;
use std::convert::Infallible;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Malformed hierarchy or snapshot.
    Core(facetnav_core::Error),
    /// Config file issues.
    Config(String),
    /// Unreadable snapshot file.
    Input(String),
    /// Requested node is not in the snapshot.
    NotFound(String),
    /// No snapshot path from flags, environment or config file.
    NoSnapshot,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Config(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::NotFound(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::NoSnapshot => write!(
                f,
                "{} no snapshot file given\n  {} pass --snapshot <FILE> or set FACETNAV_SNAPSHOT",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<facetnav_core::Error> for CliError {
    fn from(e: facetnav_core::Error) -> Self {
        match e {
            facetnav_core::Error::NodeNotFound(id) => {
                CliError::NotFound(format!("node {} not found in snapshot", id.as_u32()))
            }
            other => CliError::Core(other),
        }
    }
}

impl From<NavigationError<Infallible>> for CliError {
    fn from(e: NavigationError<Infallible>) -> Self {
        match e {
            NavigationError::NodeNotFound(id) => {
                CliError::NotFound(format!("node {} not found in snapshot", id.as_u32()))
            }
            NavigationError::Resolve(never) => match never {},
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::NoSnapshot => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
