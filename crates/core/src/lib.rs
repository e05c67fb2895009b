//! Core traits and types for AeroSim.
//!
//! This crate defines the shared abstractions that the aerodynamic models,
//! the sweep solver, and the observers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`SweepProblem`] — adapts sample points to model inputs
//! - [`constraint`] — numeric invariants enforced at construction time

pub mod constraint;
mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::SweepProblem;
pub use {model::Model, model::Snapshot};
