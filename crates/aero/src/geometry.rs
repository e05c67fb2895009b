use aerosim_core::constraint::{Constrained, StrictlyPositive};
use uom::si::{area::square_meter, f64::Area};

use crate::ValueError;

/// Wing reference geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingGeometry {
    area: Constrained<Area, StrictlyPositive>,
}

impl WingGeometry {
    /// Creates a wing geometry from its reference area.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Area`] if the area is not strictly positive.
    pub fn new(area: Area) -> Result<Self, ValueError> {
        StrictlyPositive::new(area)
            .map(|area| Self { area })
            .map_err(ValueError::Area)
    }

    /// Creates a wing geometry from a reference area in m².
    ///
    /// # Errors
    ///
    /// See [`WingGeometry::new`].
    pub fn from_si(area: f64) -> Result<Self, ValueError> {
        Self::new(Area::new::<square_meter>(area))
    }

    #[must_use]
    pub fn area(&self) -> Area {
        *self.area.as_ref()
    }
}
