//! Observers that collect sweep results for plotting.
//!
//! - [`PlotObserver`] records named line traces, such as Cl and Cd against
//!   angle of attack.
//! - [`Heatmap`] records a scalar field over a rectangular grid, such as
//!   Cl/Cd over angle of attack and speed.
//! - [`colormap`] maps normalized values to colors.
//!
//! Recording works without any GUI dependency. With the `plot` feature,
//! collected data can be shown in an egui window or drawn into an existing
//! plot through the [`draw`] module.

pub mod colormap;
mod heatmap;
mod trace;

#[cfg(feature = "plot")]
pub mod draw;
#[cfg(feature = "plot")]
mod plot;

pub use heatmap::{Cell, Heatmap, HeatmapError};
pub use trace::{PlotObserver, Trace};

#[cfg(feature = "plot")]
pub use plot::{ShowConfig, show_traces};
