use std::{convert::Infallible, f64::consts::PI};

use aerosim_core::{
    Model,
    constraint::{NonNegative, StrictlyPositive},
};

use crate::{AngleOfAttack, ValueError};

/// Thin-airfoil lift slope, `2π` per radian.
pub const LIFT_SLOPE: f64 = 2.0 * PI;

/// Constant parasitic drag term of the drag polar.
pub const PARASITIC_DRAG: f64 = 0.02;

/// Span efficiency factor used in the induced drag term.
pub const SPAN_EFFICIENCY: f64 = 0.9;

/// Aspect ratio used in the induced drag term.
pub const ASPECT_RATIO: f64 = 2.0;

/// Converts an angle of attack in degrees to `(Cl, Cd)`.
///
/// Uses the linear thin-airfoil lift slope and a parabolic drag polar:
///
/// ```text
/// Cl = 2π · α
/// Cd = 0.02 + Cl² / (π · 0.9 · 2.0)
/// ```
///
/// where `α` is the angle in radians. The function is total over finite
/// inputs; angles far outside the small-angle regime still produce linearly
/// growing lift.
///
/// # Example
///
/// ```
/// use aerosim_aero::angle_of_attack_to_coefficients;
///
/// let (cl, cd) = angle_of_attack_to_coefficients(0.0);
/// assert_eq!(cl, 0.0);
/// assert_eq!(cd, 0.02);
/// ```
#[must_use]
pub fn angle_of_attack_to_coefficients(aoa_degrees: f64) -> (f64, f64) {
    let aoa_radians = aoa_degrees.to_radians();
    let cl = LIFT_SLOPE * aoa_radians;
    let cd = PARASITIC_DRAG + cl.powi(2) / (PI * SPAN_EFFICIENCY * ASPECT_RATIO);
    (cl, cd)
}

/// A lift and drag coefficient pair.
///
/// Pairs built by hand are not validated. Pairs produced by [`ThinAirfoil`]
/// always have a non-negative drag coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AeroCoefficients {
    /// Lift coefficient, `Cl`.
    pub cl: f64,
    /// Drag coefficient, `Cd`.
    pub cd: f64,
}

impl AeroCoefficients {
    #[must_use]
    pub const fn new(cl: f64, cd: f64) -> Self {
        Self { cl, cd }
    }

    /// Returns the aerodynamic efficiency `Cl / Cd`.
    ///
    /// Returns zero when `Cd` is exactly zero.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        if self.cd == 0.0 {
            0.0
        } else {
            self.cl / self.cd
        }
    }
}

impl From<(f64, f64)> for AeroCoefficients {
    fn from((cl, cd): (f64, f64)) -> Self {
        Self { cl, cd }
    }
}

/// Parabolic drag polar, `Cd = Cd₀ + Cl² / (π · e · AR)`.
///
/// The default uses [`PARASITIC_DRAG`], [`SPAN_EFFICIENCY`], and
/// [`ASPECT_RATIO`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPolar {
    parasitic_drag: f64,
    span_efficiency: f64,
    aspect_ratio: f64,
}

impl DragPolar {
    /// Creates a drag polar from its three parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if the parasitic drag is negative, or if the
    /// span efficiency or aspect ratio is not strictly positive.
    pub fn new(
        parasitic_drag: f64,
        span_efficiency: f64,
        aspect_ratio: f64,
    ) -> Result<Self, ValueError> {
        NonNegative::new(parasitic_drag).map_err(ValueError::ParasiticDrag)?;
        StrictlyPositive::new(span_efficiency).map_err(ValueError::SpanEfficiency)?;
        StrictlyPositive::new(aspect_ratio).map_err(ValueError::AspectRatio)?;

        Ok(Self {
            parasitic_drag,
            span_efficiency,
            aspect_ratio,
        })
    }

    #[must_use]
    pub fn parasitic_drag(&self) -> f64 {
        self.parasitic_drag
    }

    #[must_use]
    pub fn span_efficiency(&self) -> f64 {
        self.span_efficiency
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Computes the drag coefficient for a given lift coefficient.
    #[must_use]
    pub fn drag_coefficient(&self, cl: f64) -> f64 {
        self.parasitic_drag + cl.powi(2) / (PI * self.span_efficiency * self.aspect_ratio)
    }
}

impl Default for DragPolar {
    fn default() -> Self {
        Self {
            parasitic_drag: PARASITIC_DRAG,
            span_efficiency: SPAN_EFFICIENCY,
            aspect_ratio: ASPECT_RATIO,
        }
    }
}

/// Thin-airfoil coefficient model.
///
/// Lift grows linearly with angle of attack at [`LIFT_SLOPE`] per radian and
/// drag follows a [`DragPolar`]. With the default polar this model returns
/// exactly what [`angle_of_attack_to_coefficients`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThinAirfoil {
    polar: DragPolar,
}

impl ThinAirfoil {
    #[must_use]
    pub fn new(polar: DragPolar) -> Self {
        Self { polar }
    }

    #[must_use]
    pub fn polar(&self) -> &DragPolar {
        &self.polar
    }

    /// Computes `Cl = 2π · α`.
    #[must_use]
    pub fn lift_coefficient(&self, angle_of_attack: AngleOfAttack) -> f64 {
        LIFT_SLOPE * angle_of_attack.radians()
    }

    /// Computes both coefficients for an angle of attack.
    #[must_use]
    pub fn coefficients(&self, angle_of_attack: AngleOfAttack) -> AeroCoefficients {
        let cl = self.lift_coefficient(angle_of_attack);
        let cd = self.polar.drag_coefficient(cl);
        AeroCoefficients { cl, cd }
    }
}

impl Model for ThinAirfoil {
    type Input = AngleOfAttack;
    type Output = AeroCoefficients;
    type Error = Infallible;

    fn call(&self, input: &AngleOfAttack) -> Result<AeroCoefficients, Infallible> {
        Ok(self.coefficients(*input))
    }
}
