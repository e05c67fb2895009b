use std::path::Path;

use super::ProfileError;

/// File formats accepted for profile sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Yaml,
    Json,
}

impl ProfileFormat {
    /// Picks a format from a file extension (`toml`, `yaml`/`yml`, `json`).
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ProfileError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
