//! Aerodynamic force and coefficient models for a simplified vehicle wing.
//!
//! The heart of this crate is three pure functions:
//!
//! - [`calculate_downforce`] and [`calculate_drag`] apply the dynamic pressure
//!   force equation `F = ½·ρ·v²·A·C`.
//! - [`angle_of_attack_to_coefficients`] maps an angle of attack to a lift and
//!   drag coefficient using a thin-airfoil lift slope and a parabolic drag polar.
//!
//! Around them sit typed value objects ([`FlowState`], [`WingGeometry`],
//! [`AngleOfAttack`]), the [`Wing`] and [`ThinAirfoil`] models that plug into
//! the sweep solver, the [`sweeps`] problems behind the standard plots, and
//! named vehicle [`profile`]s.

mod angle;
mod coefficients;
mod error;
mod flow;
mod forces;
mod geometry;
pub mod profile;
pub mod sweeps;
mod wing;

pub use angle::AngleOfAttack;
pub use coefficients::{
    ASPECT_RATIO, AeroCoefficients, DragPolar, LIFT_SLOPE, PARASITIC_DRAG, SPAN_EFFICIENCY,
    ThinAirfoil, angle_of_attack_to_coefficients,
};
pub use error::ValueError;
pub use flow::FlowState;
pub use forces::{AeroForces, calculate_downforce, calculate_drag};
pub use geometry::WingGeometry;
pub use wing::{Wing, WingInput, WingLoads};
