//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use borderdist::border::{BorderError, IngestError};
use borderdist::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// No border file given and none configured
    NoBorder,
    /// Failed to load or save a border file
    Border(IngestError),
    /// A query could not be answered
    Query(BorderError),
    /// Bad command-line or input-file value
    InvalidInput(String),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::NoBorder => {
                eprintln!();
                eprintln!("Pass a border file with --border, or set a default:");
                eprintln!("  1. Run: borderdist config init");
                eprintln!("  2. Set [border] path in the file shown by: borderdist config path");
            }
            CliError::Border(IngestError::UnsupportedGeometry(_)) => {
                eprintln!();
                eprintln!("Border files must contain Polygon or MultiPolygon geometry,");
                eprintln!("or be a segment list written by: borderdist build");
            }
            CliError::Query(BorderError::EmptyBorder) => {
                eprintln!();
                eprintln!("The border file loaded but contains no segments.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::NoBorder => write!(f, "No border file specified"),
            CliError::Border(e) => write!(f, "Failed to load border: {}", e),
            CliError::Query(e) => write!(f, "Query failed: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Border(e) => Some(e),
            CliError::Query(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<IngestError> for CliError {
    fn from(e: IngestError) -> Self {
        CliError::Border(e)
    }
}

impl From<BorderError> for CliError {
    fn from(e: BorderError) -> Self {
        CliError::Query(e)
    }
}
