//! Errors raised at the edges of the game: configuration, input scripts and
//! asset loading. The simulation itself has no failure modes.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("failed to load config file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("failed to save config file {path:?}: {source}")]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read input script {path:?}: {source}")]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid input script: {0}")]
    ScriptParse(#[from] serde_json::Error),
    #[error("failed to load asset {path:?}: {message}")]
    Asset { path: PathBuf, message: String },
}
