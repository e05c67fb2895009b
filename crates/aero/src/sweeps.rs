//! Sweep problems behind the standard AeroSim plots.
//!
//! Each problem maps plain sample coordinates onto a model input:
//!
//! - [`AngleSweep`]: angle of attack in degrees, for [`ThinAirfoil`].
//! - [`SpeedSweep`]: speed in km/h at a fixed angle, for [`Wing`].
//! - [`EfficiencySurface`]: `[angle in degrees, speed in m/s]`, for [`Wing`].
//!
//! [`ThinAirfoil`]: crate::ThinAirfoil
//! [`Wing`]: crate::Wing

use std::convert::Infallible;

use aerosim_core::{
    SweepProblem,
    constraint::{Constrained, StrictlyPositive},
};
use uom::si::{
    f64::{MassDensity, Velocity},
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::{AngleOfAttack, FlowState, ValueError, WingInput};

/// Number of km/h in one m/s.
pub const KMH_PER_MPS: f64 = 3.6;

/// Samples angle of attack, given in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AngleSweep;

impl SweepProblem<1> for AngleSweep {
    type Input = AngleOfAttack;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<AngleOfAttack, Infallible> {
        Ok(AngleOfAttack::from_degrees(x[0]))
    }
}

/// Samples vehicle speed, given in km/h, at a fixed density and angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSweep {
    density: Constrained<MassDensity, StrictlyPositive>,
    angle_of_attack: AngleOfAttack,
}

impl SpeedSweep {
    /// Creates a speed sweep.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Density`] if the density is not strictly positive.
    pub fn new(density: MassDensity, angle_of_attack: AngleOfAttack) -> Result<Self, ValueError> {
        Ok(Self {
            density: StrictlyPositive::new(density).map_err(ValueError::Density)?,
            angle_of_attack,
        })
    }

    /// Returns the sweep's air density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        *self.density.as_ref()
    }
}

impl SweepProblem<1> for SpeedSweep {
    type Input = WingInput;
    type Error = ValueError;

    /// Converts `x[0]` from km/h to m/s by dividing by [`KMH_PER_MPS`].
    fn input(&self, x: &[f64; 1]) -> Result<WingInput, ValueError> {
        let flow = FlowState::new(
            self.density(),
            Velocity::new::<meter_per_second>(x[0] / KMH_PER_MPS),
        )?;

        Ok(WingInput {
            flow,
            angle_of_attack: self.angle_of_attack,
        })
    }
}

/// Samples `[angle of attack in degrees, speed in m/s]` at a fixed density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencySurface {
    density: Constrained<MassDensity, StrictlyPositive>,
}

impl EfficiencySurface {
    /// Creates an efficiency surface problem.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Density`] if the density is not strictly positive.
    pub fn new(density: MassDensity) -> Result<Self, ValueError> {
        Ok(Self {
            density: StrictlyPositive::new(density).map_err(ValueError::Density)?,
        })
    }

    /// Creates an efficiency surface problem at sea-level density, 1.225 kg/m³.
    #[must_use]
    pub fn sea_level() -> Self {
        // Known-good value, unwrap is safe
        Self::new(MassDensity::new::<kilogram_per_cubic_meter>(1.225)).unwrap()
    }
}

impl SweepProblem<2> for EfficiencySurface {
    type Input = WingInput;
    type Error = ValueError;

    fn input(&self, x: &[f64; 2]) -> Result<WingInput, ValueError> {
        let [aoa, speed] = *x;
        let flow = FlowState::new(
            *self.density.as_ref(),
            Velocity::new::<meter_per_second>(speed),
        )?;

        Ok(WingInput {
            flow,
            angle_of_attack: AngleOfAttack::from_degrees(aoa),
        })
    }
}
