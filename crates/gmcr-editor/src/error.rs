//! Editor error types.

use std::path::PathBuf;

use gmcr_model::ModelError;
use thiserror::Error;

/// Errors surfaced by editor operations.
///
/// Guarded list operations (move, delete) pre-check their bounds, so a
/// [`EditorError::Model`] coming out of one of them means the host's model
/// broke an invariant. Recalculation failures arrive the same way.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EditorError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// An edit targeted the decision maker editor while nothing was loaded.
    #[error("no decision maker is loaded in the editor")]
    NothingLoaded,

    #[error("could not determine the settings directory")]
    ConfigDirUnavailable,

    #[error("failed to access settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
