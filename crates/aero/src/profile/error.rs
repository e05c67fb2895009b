use std::{io, path::PathBuf};

use aerosim_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors that can occur when building, loading, or saving profile sets.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profiles from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported profile file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to parse TOML profiles: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to write TOML profiles: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("YAML profile error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON profile error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("profile set contains no profiles")]
    Empty,

    #[error("profile name `{0}` is used more than once")]
    Duplicate(String),

    #[error("profile `{name}` has an invalid wing area: {source}")]
    InvalidArea {
        name: String,
        #[source]
        source: ConstraintError,
    },

    #[error("profile `{name}` has an invalid velocity: {source}")]
    InvalidVelocity {
        name: String,
        #[source]
        source: ConstraintError,
    },
}
