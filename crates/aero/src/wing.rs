use std::convert::Infallible;

use aerosim_core::Model;

use crate::{AeroCoefficients, AeroForces, AngleOfAttack, FlowState, ThinAirfoil, WingGeometry};

/// Operating point of a wing: the flow it sees and its angle of attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingInput {
    pub flow: FlowState,
    pub angle_of_attack: AngleOfAttack,
}

/// Coefficients and forces produced by a [`Wing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingLoads {
    pub coefficients: AeroCoefficients,
    pub forces: AeroForces,
}

/// A rear wing with a fixed reference area and a thin-airfoil section.
///
/// Calling the wing converts the angle of attack into coefficients and then
/// applies the dynamic pressure of the flow over the reference area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wing {
    geometry: WingGeometry,
    airfoil: ThinAirfoil,
}

impl Wing {
    /// Creates a wing with the default drag polar.
    #[must_use]
    pub fn new(geometry: WingGeometry) -> Self {
        Self {
            geometry,
            airfoil: ThinAirfoil::default(),
        }
    }

    /// Replaces the airfoil model.
    #[must_use]
    pub fn with_airfoil(self, airfoil: ThinAirfoil) -> Self {
        Self { airfoil, ..self }
    }

    #[must_use]
    pub fn geometry(&self) -> &WingGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn airfoil(&self) -> &ThinAirfoil {
        &self.airfoil
    }

    /// Evaluates the wing at an operating point.
    #[must_use]
    pub fn loads(&self, input: &WingInput) -> WingLoads {
        let coefficients = self.airfoil.coefficients(input.angle_of_attack);
        let forces = AeroForces::new(&input.flow, &self.geometry, &coefficients);
        WingLoads {
            coefficients,
            forces,
        }
    }
}

impl Model for Wing {
    type Input = WingInput;
    type Output = WingLoads;
    type Error = Infallible;

    fn call(&self, input: &WingInput) -> Result<WingLoads, Infallible> {
        Ok(self.loads(input))
    }
}
