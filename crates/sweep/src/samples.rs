//! Sample generators for curves and surfaces.
//!
//! These mirror the ranges commonly used when plotting aerodynamic curves:
//! evenly spaced points with both endpoints included ([`linspace`]), fixed
//! increments up to an inclusive end ([`stepped`]), and the row-major product
//! of two axes ([`grid`]).

use thiserror::Error;

/// Errors produced when a sample range cannot be generated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("range bounds must be finite, got [{start}, {end}]")]
    NonFiniteBounds { start: f64, end: f64 },

    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("range would produce more than {} samples", MAX_SAMPLES)]
    TooManySamples,
}

/// Largest number of values a single range may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Returns `count` evenly spaced values from `start` to `end`, inclusive.
///
/// A single sample yields `[start]`, and zero samples yield an empty vector.
/// The final value is exactly `end`.
///
/// # Errors
///
/// Returns [`SampleError::NonFiniteBounds`] if either bound is not finite, or
/// [`SampleError::TooManySamples`] if `count` exceeds [`MAX_SAMPLES`].
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>, SampleError> {
    check_bounds(start, end)?;
    if count > MAX_SAMPLES {
        return Err(SampleError::TooManySamples);
    }

    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![start]),
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (count - 1) as f64;

            #[allow(clippy::cast_precision_loss)]
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;

            Ok(values)
        }
    }
}

/// Returns `start, start + step, ...` up to and including `end`.
///
/// The end is included when it lies on the step lattice, allowing for
/// floating-point round-off. An `end` below `start` yields an empty vector.
///
/// # Errors
///
/// Returns an error if the bounds are not finite, `step` is not a finite
/// positive number, or the range would exceed [`MAX_SAMPLES`] values.
pub fn stepped(start: f64, end: f64, step: f64) -> Result<Vec<f64>, SampleError> {
    check_bounds(start, end)?;
    if !step.is_finite() || step <= 0.0 {
        return Err(SampleError::InvalidStep(step));
    }
    if end < start {
        return Ok(Vec::new());
    }

    let span = (end - start) / step;

    #[allow(clippy::cast_precision_loss)]
    let limit = (MAX_SAMPLES - 1) as f64;
    if !span.is_finite() || span > limit {
        return Err(SampleError::TooManySamples);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (span + 1e-9).floor() as usize + 1;

    #[allow(clippy::cast_precision_loss)]
    let values = (0..count).map(|i| start + i as f64 * step).collect();
    Ok(values)
}

/// Returns the row-major product of two axes as `[x, y]` points.
///
/// Points are ordered by `y` first, with `x` varying fastest, so the result
/// can be reshaped into `ys.len()` rows of `xs.len()` columns.
#[must_use]
pub fn grid(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    ys.iter()
        .flat_map(|&y| xs.iter().map(move |&x| [x, y]))
        .collect()
}

fn check_bounds(start: f64, end: f64) -> Result<(), SampleError> {
    if start.is_finite() && end.is_finite() {
        Ok(())
    } else {
        Err(SampleError::NonFiniteBounds { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_both_endpoints() {
        let values = linspace(-10.0, 45.0, 100).unwrap();
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], -10.0);
        assert_eq!(values[99], 45.0);
        assert_relative_eq!(values[1] - values[0], 55.0 / 99.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).unwrap().is_empty());
        assert_eq!(linspace(1.0, 2.0, 1).unwrap(), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn linspace_rejects_infinite_bounds() {
        assert!(matches!(
            linspace(0.0, f64::INFINITY, 5),
            Err(SampleError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn stepped_integer_range() {
        let aoa = stepped(-5.0, 20.0, 1.0).unwrap();
        assert_eq!(aoa.len(), 26);
        assert_eq!(aoa.first(), Some(&-5.0));
        assert_eq!(aoa.last(), Some(&20.0));

        let speeds = stepped(0.0, 300.0, 10.0).unwrap();
        assert_eq!(speeds.len(), 31);
        assert_eq!(speeds[30], 300.0);
    }

    #[test]
    fn stepped_end_off_lattice() {
        let values = stepped(0.0, 1.0, 0.3).unwrap();
        assert_eq!(values.len(), 4);
        assert_relative_eq!(values[3], 0.9, epsilon = 1e-12);
    }

    #[test]
    fn stepped_fractional_step_keeps_end() {
        let values = stepped(0.0, 1.0, 0.1).unwrap();
        assert_eq!(values.len(), 11);
        assert_relative_eq!(values[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn stepped_edge_cases() {
        assert!(stepped(5.0, 1.0, 1.0).unwrap().is_empty());
        assert_eq!(stepped(2.0, 2.0, 1.0).unwrap(), vec![2.0]);
        assert_eq!(stepped(0.0, 1.0, 0.0), Err(SampleError::InvalidStep(0.0)));
        assert_eq!(stepped(0.0, 1.0, -1.0), Err(SampleError::InvalidStep(-1.0)));
    }

    #[test]
    fn stepped_rejects_vanishing_step() {
        assert_eq!(stepped(0.0, 1.0, 1e-320), Err(SampleError::TooManySamples));
    }

    #[test]
    fn sample_count_is_capped() {
        assert_eq!(stepped(0.0, 1e9, 1.0), Err(SampleError::TooManySamples));
        assert_eq!(
            linspace(0.0, 1.0, MAX_SAMPLES + 1),
            Err(SampleError::TooManySamples)
        );

        #[allow(clippy::cast_precision_loss)]
        let largest = stepped(0.0, (MAX_SAMPLES - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_SAMPLES);
    }

    #[test]
    fn grid_is_row_major() {
        let points = grid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(
            points,
            vec![
                [1.0, 10.0],
                [2.0, 10.0],
                [3.0, 10.0],
                [1.0, 20.0],
                [2.0, 20.0],
                [3.0, 20.0],
            ]
        );
        assert!(grid(&[], &[1.0]).is_empty());
    }
}
