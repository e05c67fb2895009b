//! Operating-point inputs as entered by a user, and the report they produce.

use std::{fmt, ops::RangeInclusive};

use aerosim_aero::{
    AngleOfAttack, FlowState, ValueError, Wing, WingGeometry, WingInput, WingLoads,
    profile::VehicleProfile,
};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_DENSITY: &str = "1.225";
pub const DEFAULT_AREA: &str = "1.2";
pub const DEFAULT_SPEED: f64 = 60.0;
pub const DEFAULT_AOA: f64 = 10.0;

/// Slider range for speed, in m/s.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Slider range for angle of attack, in degrees.
pub const AOA_RANGE: RangeInclusive<f64> = -10.0..=45.0;

/// Errors raised while turning [`Inputs`] into a [`Report`].
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input. Please enter numeric values.")]
    NotNumeric { field: &'static str, text: String },

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// The operating point as the user sees it.
///
/// Density and area are kept as the raw entry text so that a partially typed
/// value survives until the next evaluation. Speed (m/s) and angle of attack
/// (degrees) come from sliders and are always numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub density: String,
    pub area: String,
    pub speed: f64,
    pub aoa: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY.to_owned(),
            area: DEFAULT_AREA.to_owned(),
            speed: DEFAULT_SPEED,
            aoa: DEFAULT_AOA,
        }
    }
}

impl Inputs {
    /// Copies every field the profile defines, leaving the others untouched.
    pub fn apply_profile(&mut self, profile: &VehicleProfile) {
        if let Some(area) = profile.area {
            self.area = area.to_string();
        }
        if let Some(aoa) = profile.aoa {
            self.aoa = aoa;
        }
        if let Some(velocity) = profile.velocity {
            self.speed = velocity;
        }
    }

    /// Parses the entries into a validated flow state and wing.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotNumeric`] if an entry does not parse, or
    /// [`InputError::Value`] if a value violates its physical constraint.
    pub fn operating_point(&self) -> Result<(Wing, WingInput), InputError> {
        let density = parse("density", &self.density)?;
        let area = parse("area", &self.area)?;

        let flow = FlowState::from_si(density, self.speed)?;
        let wing = Wing::new(WingGeometry::from_si(area)?);

        Ok((
            wing,
            WingInput {
                flow,
                angle_of_attack: AngleOfAttack::from_degrees(self.aoa),
            },
        ))
    }

    /// Evaluates the wing at the current operating point.
    ///
    /// # Errors
    ///
    /// See [`Inputs::operating_point`].
    pub fn evaluate(&self) -> Result<Report, InputError> {
        let (wing, input) = self.operating_point()?;
        Ok(wing.loads(&input).into())
    }
}

fn parse(field: &'static str, text: &str) -> Result<f64, InputError> {
    text.trim().parse().map_err(|_| InputError::NotNumeric {
        field,
        text: text.to_owned(),
    })
}

/// Coefficients and forces at one operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub cl: f64,
    pub cd: f64,
    /// Downforce in newtons.
    pub downforce: f64,
    /// Drag in newtons.
    pub drag: f64,
}

impl From<WingLoads> for Report {
    fn from(loads: WingLoads) -> Self {
        Self {
            cl: loads.coefficients.cl,
            cd: loads.coefficients.cd,
            downforce: loads.forces.downforce_newtons(),
            drag: loads.forces.drag_newtons(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CL: {:.2}, CD: {:.2}\nDownforce: {:.2} N\nDrag: {:.2} N",
            self.cl, self.cd, self.downforce, self.drag
        )
    }
}
