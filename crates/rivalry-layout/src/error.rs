//! Error types for layout operations

use rivalry_search::SearchError;
use thiserror::Error;

/// Errors that can occur while building a tree or a layout
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The underlying shortest-path search failed
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
