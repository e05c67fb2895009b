use uom::si::{
    area::square_meter,
    f64::Force,
    force::newton,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
};

use crate::{AeroCoefficients, FlowState, WingGeometry};

/// Computes downforce (lift) with `F = ½·ρ·v²·A·Cl`.
///
/// No inputs are validated. A negative `cl` gives a negative force, and
/// non-finite inputs propagate through the arithmetic.
///
/// # Example
///
/// ```
/// use aerosim_aero::calculate_downforce;
///
/// let force = calculate_downforce(2.0, 20.0, 1.5, 0.5);
/// assert_eq!(force, 300.0);
/// ```
#[must_use]
pub fn calculate_downforce(rho: f64, velocity: f64, area: f64, cl: f64) -> f64 {
    0.5 * rho * velocity.powi(2) * area * cl
}

/// Computes drag with `F = ½·ρ·v²·A·Cd`.
///
/// Identical to [`calculate_downforce`] with the drag coefficient in place of
/// the lift coefficient. A negative `cd` is not rejected.
#[must_use]
pub fn calculate_drag(rho: f64, velocity: f64, area: f64, cd: f64) -> f64 {
    0.5 * rho * velocity.powi(2) * area * cd
}

/// Downforce and drag acting on a wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub downforce: Force,
    pub drag: Force,
}

impl AeroForces {
    /// Computes both forces for a flow, a geometry, and a coefficient pair.
    ///
    /// The values are computed by [`calculate_downforce`] and
    /// [`calculate_drag`] in SI units, so they match the raw functions exactly.
    #[must_use]
    pub fn new(flow: &FlowState, geometry: &WingGeometry, coefficients: &AeroCoefficients) -> Self {
        let rho = flow.density().get::<kilogram_per_cubic_meter>();
        let v = flow.velocity().get::<meter_per_second>();
        let area = geometry.area().get::<square_meter>();

        Self {
            downforce: Force::new::<newton>(calculate_downforce(rho, v, area, coefficients.cl)),
            drag: Force::new::<newton>(calculate_drag(rho, v, area, coefficients.cd)),
        }
    }

    /// Returns the downforce in newtons.
    #[must_use]
    pub fn downforce_newtons(&self) -> f64 {
        self.downforce.get::<newton>()
    }

    /// Returns the drag in newtons.
    #[must_use]
    pub fn drag_newtons(&self) -> f64 {
        self.drag.get::<newton>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::angle_of_attack_to_coefficients;

    #[test]
    fn matches_dynamic_pressure_formula() {
        let (rho, v, area, cl) = (1.225, 31.0, 1.4, 0.8);
        assert_relative_eq!(
            calculate_downforce(rho, v, area, cl),
            0.5 * rho * v * v * area * cl
        );
        assert_relative_eq!(calculate_drag(rho, v, area, cl), 0.5 * rho * v * v * area * cl);
    }

    #[test]
    fn doubling_velocity_quadruples_force() {
        for v in [0.5, 10.0, 25.0, 83.3] {
            let base = calculate_downforce(1.225, v, 1.2, 1.1);
            assert_relative_eq!(calculate_downforce(1.225, 2.0 * v, 1.2, 1.1), 4.0 * base);

            let base = calculate_drag(1.225, v, 1.2, 0.23);
            assert_relative_eq!(calculate_drag(1.225, 2.0 * v, 1.2, 0.23), 4.0 * base);
        }
    }

    #[test]
    fn zero_velocity_gives_zero_force() {
        for (rho, area, c) in [(1.225, 1.2, 1.1), (0.9, 50.0, -3.0), (2.0, 0.01, 0.0)] {
            assert_eq!(calculate_downforce(rho, 0.0, area, c), 0.0);
            assert_eq!(calculate_drag(rho, 0.0, area, c), 0.0);
        }
    }

    #[test]
    fn negative_lift_coefficient_gives_negative_force() {
        assert!(calculate_downforce(1.225, 30.0, 1.0, -0.5) < 0.0);
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(calculate_drag(f64::NAN, 10.0, 1.0, 0.1).is_nan());
        assert!(calculate_downforce(1.225, f64::INFINITY, 1.0, 1.0).is_infinite());
    }

    #[test]
    fn reference_scenario() {
        let (cl, cd) = angle_of_attack_to_coefficients(10.0);
        let downforce = calculate_downforce(1.225, 25.0, 1.0, cl);
        let drag = calculate_drag(1.225, 25.0, 1.0, cd);

        assert_relative_eq!(downforce, 419.8, epsilon = 0.05);
        assert_relative_eq!(drag, 89.07, epsilon = 0.05);
    }

    #[test]
    fn typed_forces_match_raw_functions() {
        let flow = FlowState::from_si(1.225, 60.0).unwrap();
        let geometry = WingGeometry::from_si(1.2).unwrap();
        let coefficients = AeroCoefficients::from(angle_of_attack_to_coefficients(10.0));

        let forces = AeroForces::new(&flow, &geometry, &coefficients);

        assert_eq!(
            forces.downforce_newtons(),
            calculate_downforce(1.225, 60.0, 1.2, coefficients.cl)
        );
        assert_eq!(
            forces.drag_newtons(),
            calculate_drag(1.225, 60.0, 1.2, coefficients.cd)
        );
    }
}
