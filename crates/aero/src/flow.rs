use aerosim_core::constraint::{Constrained, NonNegative, StrictlyPositive};
use uom::si::{
    f64::{MassDensity, Pressure, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::ValueError;

/// The free-stream flow seen by the wing.
///
/// Air density must be strictly positive and velocity must be non-negative.
/// A velocity of zero is valid and produces zero aerodynamic force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    density: Constrained<MassDensity, StrictlyPositive>,
    velocity: Constrained<Velocity, NonNegative>,
}

impl FlowState {
    /// Creates a flow state from unit-aware quantities.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Density`] if the density is not strictly positive,
    /// or [`ValueError::Velocity`] if the velocity is negative or `NaN`.
    pub fn new(density: MassDensity, velocity: Velocity) -> Result<Self, ValueError> {
        Ok(Self {
            density: StrictlyPositive::new(density).map_err(ValueError::Density)?,
            velocity: NonNegative::new(velocity).map_err(ValueError::Velocity)?,
        })
    }

    /// Creates a flow state from density in kg/m³ and velocity in m/s.
    ///
    /// # Errors
    ///
    /// See [`FlowState::new`].
    pub fn from_si(density: f64, velocity: f64) -> Result<Self, ValueError> {
        Self::new(
            MassDensity::new::<kilogram_per_cubic_meter>(density),
            Velocity::new::<meter_per_second>(velocity),
        )
    }

    /// Returns a copy of this flow state at a different velocity.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Velocity`] if the velocity is negative or `NaN`.
    pub fn with_velocity(self, velocity: Velocity) -> Result<Self, ValueError> {
        Ok(Self {
            velocity: NonNegative::new(velocity).map_err(ValueError::Velocity)?,
            ..self
        })
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        *self.density.as_ref()
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        *self.velocity.as_ref()
    }

    /// Dynamic pressure `q = ½·ρ·v²`.
    #[must_use]
    pub fn dynamic_pressure(&self) -> Pressure {
        let rho = self.density().get::<kilogram_per_cubic_meter>();
        let v = self.velocity().get::<meter_per_second>();
        Pressure::new::<pascal>(0.5 * rho * v.powi(2))
    }
}
