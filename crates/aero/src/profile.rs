//! Named vehicle presets.
//!
//! A [`VehicleProfile`] pre-fills some of the inputs of an evaluation: wing
//! area, angle of attack, and velocity. Fields left out of a profile leave the
//! corresponding input untouched, which is how the `Custom` profile works.
//!
//! Profiles can be loaded from TOML, YAML, or JSON:
//!
//! ```toml
//! [[profiles]]
//! name = "Hillclimb"
//! area = 2.1
//! aoa = 28
//! velocity = 40
//! ```

mod error;
mod format;

use std::{fs, path::Path};

use aerosim_core::constraint::{NonNegative, StrictlyPositive};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ProfileError;
pub use format::ProfileFormat;

/// A named set of input overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub name: String,

    /// Wing reference area in m².
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    /// Angle of attack in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aoa: Option<f64>,

    /// Velocity in m/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
}

impl VehicleProfile {
    /// Creates a profile with no overrides.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: None,
            aoa: None,
            velocity: None,
        }
    }

    fn preset(name: &str, area: f64, aoa: f64, velocity: f64) -> Self {
        Self {
            name: name.to_owned(),
            area: Some(area),
            aoa: Some(aoa),
            velocity: Some(velocity),
        }
    }

    /// Returns `true` if the profile overrides nothing.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.area.is_none() && self.aoa.is_none() && self.velocity.is_none()
    }

    /// Checks that any present area is positive and any present velocity is
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidArea`] or [`ProfileError::InvalidVelocity`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(area) = self.area {
            StrictlyPositive::new(area).map_err(|source| ProfileError::InvalidArea {
                name: self.name.clone(),
                source,
            })?;
        }
        if let Some(velocity) = self.velocity {
            NonNegative::new(velocity).map_err(|source| ProfileError::InvalidVelocity {
                name: self.name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

/// An ordered collection of uniquely named profiles.
///
/// Deserializing a `ProfileSet` applies the same checks as [`ProfileSet::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfileSet")]
pub struct ProfileSet {
    profiles: Vec<VehicleProfile>,
}

/// Profile file contents before validation.
#[derive(Deserialize)]
struct RawProfileSet {
    profiles: Vec<VehicleProfile>,
}

impl TryFrom<RawProfileSet> for ProfileSet {
    type Error = ProfileError;

    fn try_from(raw: RawProfileSet) -> Result<Self, ProfileError> {
        Self::new(raw.profiles)
    }
}

impl ProfileSet {
    /// Returns the built-in presets: `Custom`, `Formula Student`, `GT Car`,
    /// and `F1 Car`.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                VehicleProfile::custom("Custom"),
                VehicleProfile::preset("Formula Student", 1.0, 35.0, 25.0),
                VehicleProfile::preset("GT Car", 1.8, 20.0, 50.0),
                VehicleProfile::preset("F1 Car", 1.5, 12.0, 80.0),
            ],
        }
    }

    /// Builds a profile set, validating every profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, two profiles share a name
    /// (ignoring case), or any profile fails [`VehicleProfile::validate`].
    pub fn new(profiles: Vec<VehicleProfile>) -> Result<Self, ProfileError> {
        if profiles.is_empty() {
            return Err(ProfileError::Empty);
        }

        for (i, profile) in profiles.iter().enumerate() {
            profile.validate()?;
            if profiles[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&profile.name))
            {
                return Err(ProfileError::Duplicate(profile.name.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// Parses a profile set from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or fails validation.
    pub fn parse(text: &str, format: ProfileFormat) -> Result<Self, ProfileError> {
        let raw: RawProfileSet = match format {
            ProfileFormat::Toml => toml::from_str(text)?,
            ProfileFormat::Yaml => serde_yaml::from_str(text)?,
            ProfileFormat::Json => serde_json::from_str(text)?,
        };
        Self::new(raw.profiles)
    }

    /// Loads a profile set from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized, the file cannot be
    /// read, or its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let format = ProfileFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&text, format)?;
        debug!(path = %path.display(), ?format, count = set.len(), "loaded vehicle profiles");
        Ok(set)
    }

    /// Serializes the set in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_text(&self, format: ProfileFormat) -> Result<String, ProfileError> {
        Ok(match format {
            ProfileFormat::Toml => toml::to_string_pretty(self)?,
            ProfileFormat::Yaml => serde_yaml::to_string(self)?,
            ProfileFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Looks up a profile by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VehicleProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first profile in the set.
    #[must_use]
    pub fn first(&self) -> &VehicleProfile {
        // Construction guarantees at least one profile.
        &self.profiles[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::builtin()
    }
}
