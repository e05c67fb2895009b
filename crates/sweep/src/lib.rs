//! Sampling solver for AeroSim models.
//!
//! A sweep evaluates a [`Model`] at a sequence of sample points, such as a
//! range of angles of attack or a grid of angle and speed, and records every
//! input/output pair:
//!
//! ```text
//! for each point x:
//!     input  = problem.input(x)
//!     output = model.call(input)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use aerosim_sweep::{samples, solve_unobserved};
//!
//! let angles = samples::stepped(-5.0, 20.0, 1.0)?;
//! let solution = solve_unobserved(&model, &problem, angles.iter().map(|&a| [a]))?;
//!
//! for (point, output) in solution.outputs() {
//!     println!("aoa={}: {:?}", point[0], output);
//! }
//! ```

mod action;
mod error;
mod event;
pub mod samples;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use aerosim_core::{Model, Observer, Snapshot, SweepProblem};
use tracing::{debug, trace};

/// Evaluates a model at every sample point.
///
/// # Algorithm
///
/// For each point, in order:
/// - Map the point to a model input through the problem.
/// - Call the model.
/// - Record the snapshot.
/// - Emit an [`Event`] to the observer.
/// - If the observer returns [`Action::StopEarly`], terminate.
///
/// # Observer
///
/// The observer receives an [`Event`] after each evaluated sample and may
/// return [`Action::StopEarly`] to end the sweep. The sample that triggered
/// the stop is kept in the solution.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any sample.
pub fn solve<const N: usize, M, P, S, Obs>(
    model: &M,
    problem: &P,
    samples: S,
    mut observer: Obs,
) -> Result<Solution<N, M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: SweepProblem<N, Input = M::Input>,
    S: IntoIterator<Item = [f64; N]>,
    Obs: Observer<Event<N, M::Input, M::Output>, Action>,
{
    let samples = samples.into_iter();
    let (lower, _) = samples.size_hint();
    debug!(dimensions = N, expected_samples = lower, "starting sweep");

    let mut points = Vec::with_capacity(lower);
    let mut history = Vec::with_capacity(lower);

    for (index, point) in samples.enumerate() {
        let input = problem
            .input(&point)
            .map_err(|err| Error::problem(index, err))?;
        let output = model.call(&input).map_err(|err| Error::model(index, err))?;
        let snapshot = Snapshot::new(input, output);
        trace!(index, ?point, "evaluated sample");

        points.push(point);
        history.push(snapshot.clone());

        let event = Event {
            index,
            point,
            snapshot,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(samples = history.len(), "sweep stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                points,
                history,
            });
        }
    }

    debug!(samples = history.len(), "sweep complete");
    Ok(Solution {
        status: Status::Complete,
        points,
        history,
    })
}

/// Evaluates a model at every sample point without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem fails at any sample.
pub fn solve_unobserved<const N: usize, M, P, S>(
    model: &M,
    problem: &P,
    samples: S,
) -> Result<Solution<N, M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: SweepProblem<N, Input = M::Input>,
    S: IntoIterator<Item = [f64; N]>,
{
    solve(model, problem, samples, ())
}
