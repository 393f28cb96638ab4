use std::path::PathBuf;

use thiserror::Error;

/// Errors from the collaborator layer (network, filesystem, configuration).
///
/// Extraction and rendering themselves never fail: missing markup
/// fragments degrade to empty recipe fields instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the recipe page
    #[error("failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to write the rendered recipe
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// No output directory configured and $HOME is unset
    #[error("cannot locate the recipes directory: $HOME is not set")]
    MissingHomeDir,
}
