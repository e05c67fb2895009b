use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use aerosim_core::constraint::StrictlyPositive;
///
/// let density = StrictlyPositive::new(1.225).unwrap();
/// assert_eq!(density.into_inner(), 1.225);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or not comparable (such as `NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::{square_foot, square_meter},
        f64::{Area, MassDensity},
        mass_density::kilogram_per_cubic_meter,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-3.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn quantities() {
        let area = StrictlyPositive::new(Area::new::<square_foot>(10.0)).unwrap();
        assert_relative_eq!(
            area.into_inner().get::<square_meter>(),
            0.929_030_4,
            epsilon = 1e-9
        );

        let vacuum = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert_eq!(StrictlyPositive::new(vacuum), Err(ConstraintError::Zero));
    }

    #[test]
    fn infinity_is_positive() {
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
    }
}
