use uom::si::{angle::degree, f64::Angle};

/// Angle between a wing's chord line and the oncoming flow, in degrees.
///
/// No range is enforced. The thin-airfoil model is only physically
/// meaningful for small angles, but larger angles are evaluated as given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AngleOfAttack(f64);

impl AngleOfAttack {
    /// Creates an angle of attack from a value in degrees.
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.0
    }

    /// Returns the angle in radians, computed as `degrees · π/180`.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// Returns the angle as a unit-aware quantity.
    #[must_use]
    pub fn angle(&self) -> Angle {
        Angle::new::<degree>(self.0)
    }
}

impl std::ops::Neg for AngleOfAttack {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
