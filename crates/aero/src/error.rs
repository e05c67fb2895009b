use aerosim_core::constraint::ConstraintError;
use thiserror::Error;

/// Errors raised when constructing aerodynamic value objects.
///
/// The raw force and coefficient functions never fail. These errors only come
/// from the typed constructors, which refuse physically meaningless values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid air density: {0}")]
    Density(#[source] ConstraintError),

    #[error("invalid velocity: {0}")]
    Velocity(#[source] ConstraintError),

    #[error("invalid wing area: {0}")]
    Area(#[source] ConstraintError),

    #[error("invalid parasitic drag: {0}")]
    ParasiticDrag(#[source] ConstraintError),

    #[error("invalid span efficiency: {0}")]
    SpanEfficiency(#[source] ConstraintError),

    #[error("invalid aspect ratio: {0}")]
    AspectRatio(#[source] ConstraintError),
}
