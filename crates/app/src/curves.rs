//! The standard AeroSim charts, built by sweeping the wing models.

use aerosim_aero::{
    AeroCoefficients, AngleOfAttack, ThinAirfoil, ValueError, Wing, WingGeometry, WingInput,
    WingLoads,
    sweeps::{AngleSweep, EfficiencySurface, SpeedSweep},
};
use aerosim_observers::{Heatmap, HeatmapError, PlotObserver, ShowConfig, Trace};
use aerosim_sweep::{
    Event,
    samples::{self, SampleError},
};
use thiserror::Error;
use tracing::debug;

/// Angle of attack range for the coefficient chart: `(from, to, step)` in degrees.
pub const AOA_CURVE: (f64, f64, f64) = (-5.0, 20.0, 1.0);

/// Speed range for the force chart: `(from, to, step)` in km/h.
pub const SPEED_CURVE_KMH: (f64, f64, f64) = (0.0, 300.0, 10.0);

/// Angle of attack axis of the efficiency heatmap, in degrees.
pub const EFFICIENCY_AOA: (f64, f64) = (-10.0, 45.0);

/// Speed axis of the efficiency heatmap, in m/s.
pub const EFFICIENCY_SPEED: (f64, f64) = (1.0, 100.0);

/// Default number of samples along each heatmap axis.
pub const EFFICIENCY_RESOLUTION: usize = 100;

/// Largest number of samples along each heatmap axis.
pub const MAX_EFFICIENCY_RESOLUTION: usize = 1000;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error(transparent)]
    Sweep(#[from] aerosim_sweep::Error),

    #[error(transparent)]
    Heatmap(#[from] HeatmapError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("heatmap resolution must be at most {max}, got {resolution}")]
    Resolution { resolution: usize, max: usize },
}

/// A titled set of traces sharing one x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub traces: Vec<Trace>,
}

impl Chart {
    /// Window settings matching the chart's labels.
    #[must_use]
    pub fn show_config(&self) -> ShowConfig {
        ShowConfig::new()
            .title(self.title)
            .legend()
            .x_label(self.x_label)
            .y_label(self.y_label)
    }

    /// Opens a blocking window showing the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let config = self.show_config();
        aerosim_observers::show_traces(self.traces, config)
    }

    /// Returns the chart as rows of `(x, [y per trace])`.
    ///
    /// Every trace is sampled at the same x values, so rows follow the first
    /// trace.
    pub fn rows(&self) -> impl Iterator<Item = (f64, Vec<f64>)> + '_ {
        let first = self.traces.first().map_or(&[][..], |t| t.points.as_slice());
        first.iter().enumerate().map(|(i, &[x, _])| {
            let ys = self
                .traces
                .iter()
                .map(|trace| trace.points.get(i).map_or(f64::NAN, |p| p[1]))
                .collect();
            (x, ys)
        })
    }
}

/// Window settings for the efficiency heatmap.
#[must_use]
pub fn efficiency_show_config() -> ShowConfig {
    ShowConfig::new()
        .title("Aero Efficiency (Cl/Cd) vs AoA and Speed")
        .x_label("Angle of Attack (°)")
        .y_label("Speed (m/s)")
}

/// Sweeps the default airfoil over angles of attack in degrees.
///
/// # Errors
///
/// Returns an error if the sweep fails.
pub fn coefficient_chart(angles: &[f64]) -> Result<Chart, CurveError> {
    let mut obs = PlotObserver::<2>::new(["CL (Lift Coefficient)", "CD (Drag Coefficient)"]);

    aerosim_sweep::solve(
        &ThinAirfoil::default(),
        &AngleSweep,
        angles.iter().map(|&aoa| [aoa]),
        |event: &Event<1, AngleOfAttack, AeroCoefficients>| {
            let c = event.snapshot.output;
            obs.record(event.point[0], [Some(c.cl), Some(c.cd)]);
            None
        },
    )?;

    Ok(Chart {
        title: "AoA vs CL/CD",
        x_label: "Angle of Attack (°)",
        y_label: "Coefficient Value",
        traces: obs.into_traces(),
    })
}

/// Sweeps the wing over speeds in km/h, keeping the operating point's
/// density and angle of attack.
///
/// # Errors
///
/// Returns an error if the sweep fails.
pub fn force_chart(wing: &Wing, at: &WingInput, speeds_kmh: &[f64]) -> Result<Chart, CurveError> {
    let problem = SpeedSweep::new(at.flow.density(), at.angle_of_attack)?;
    let mut obs = PlotObserver::<2>::new(["Downforce (N)", "Drag (N)"]);

    aerosim_sweep::solve(
        wing,
        &problem,
        speeds_kmh.iter().map(|&speed| [speed]),
        |event: &Event<1, WingInput, WingLoads>| {
            let forces = event.snapshot.output.forces;
            obs.record(
                event.point[0],
                [Some(forces.downforce_newtons()), Some(forces.drag_newtons())],
            );
            None
        },
    )?;

    Ok(Chart {
        title: "Aero Forces vs Speed",
        x_label: "Speed (km/h)",
        y_label: "Force (N)",
        traces: obs.into_traces(),
    })
}

/// Samples Cl/Cd over angle of attack (x, degrees) and speed (y, m/s).
///
/// Cl/Cd depends only on the airfoil, so a unit wing at sea level is used
/// and the result does not depend on any operating point.
///
/// # Errors
///
/// Returns an error if either axis is empty or the sweep fails.
pub fn efficiency_heatmap(angles: Vec<f64>, speeds: Vec<f64>) -> Result<Heatmap, CurveError> {
    let wing = Wing::new(WingGeometry::from_si(1.0)?);
    let mut heatmap = Heatmap::new(angles, speeds)?;
    let points = samples::grid(heatmap.xs(), heatmap.ys());

    let solution =
        aerosim_sweep::solve_unobserved(&wing, &EfficiencySurface::sea_level(), points)?;
    for (index, (_, loads)) in solution.outputs().enumerate() {
        heatmap.record(index, loads.coefficients.efficiency())?;
    }

    debug!(
        cols = heatmap.cols(),
        rows = heatmap.rows(),
        "sampled efficiency heatmap"
    );
    Ok(heatmap)
}

/// Samples the standard efficiency axes at `resolution` points each.
///
/// # Errors
///
/// Returns [`CurveError::Resolution`] above [`MAX_EFFICIENCY_RESOLUTION`],
/// otherwise see [`efficiency_heatmap`].
pub fn standard_efficiency(resolution: usize) -> Result<Heatmap, CurveError> {
    if resolution > MAX_EFFICIENCY_RESOLUTION {
        return Err(CurveError::Resolution {
            resolution,
            max: MAX_EFFICIENCY_RESOLUTION,
        });
    }

    let (aoa_from, aoa_to) = EFFICIENCY_AOA;
    let (speed_from, speed_to) = EFFICIENCY_SPEED;
    efficiency_heatmap(
        samples::linspace(aoa_from, aoa_to, resolution)?,
        samples::linspace(speed_from, speed_to, resolution)?,
    )
}

/// Samples `(from, to, step)` as an inclusive range.
///
/// # Errors
///
/// Returns an error if the bounds or step are invalid.
pub fn range((from, to, step): (f64, f64, f64)) -> Result<Vec<f64>, CurveError> {
    Ok(samples::stepped(from, to, step)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use aerosim_aero::{angle_of_attack_to_coefficients, calculate_downforce, calculate_drag};
    use approx::assert_relative_eq;

    use crate::inputs::Inputs;

    #[test]
    fn coefficient_chart_spans_standard_angles() {
        let chart = coefficient_chart(&range(AOA_CURVE).unwrap()).unwrap();

        assert_eq!(chart.traces.len(), 2);
        assert_eq!(chart.traces[0].name, "CL (Lift Coefficient)");
        assert_eq!(chart.traces[1].name, "CD (Drag Coefficient)");

        let rows: Vec<_> = chart.rows().collect();
        assert_eq!(rows.len(), 26);
        assert_eq!(rows[0].0, -5.0);
        assert_eq!(rows[25].0, 20.0);

        for (aoa, ys) in rows {
            let (cl, cd) = angle_of_attack_to_coefficients(aoa);
            assert_eq!(ys, vec![cl, cd]);
        }
    }

    #[test]
    fn force_chart_converts_kmh() {
        let inputs = Inputs::default();
        let (wing, at) = inputs.operating_point().unwrap();
        let chart = force_chart(&wing, &at, &range(SPEED_CURVE_KMH).unwrap()).unwrap();

        let rows: Vec<_> = chart.rows().collect();
        assert_eq!(rows.len(), 31);
        assert_eq!(rows[0], (0.0, vec![0.0, 0.0]));
        assert_eq!(rows[30].0, 300.0);

        let (cl, cd) = angle_of_attack_to_coefficients(inputs.aoa);
        let (speed, ys) = &rows[18];
        let v = speed / 3.6;
        assert_relative_eq!(ys[0], calculate_downforce(1.225, v, 1.2, cl));
        assert_relative_eq!(ys[1], calculate_drag(1.225, v, 1.2, cd));
    }

    #[test]
    fn force_chart_grows_quadratically() {
        let (wing, at) = Inputs::default().operating_point().unwrap();
        let chart = force_chart(&wing, &at, &[50.0, 100.0]).unwrap();
        let downforce = chart.traces[0].points.clone();

        assert_relative_eq!(downforce[1][1], 4.0 * downforce[0][1], max_relative = 1e-12);
    }

    #[test]
    fn efficiency_rows_are_speed_independent() {
        let heatmap = standard_efficiency(EFFICIENCY_RESOLUTION).unwrap();

        assert_eq!(heatmap.cols(), 100);
        assert_eq!(heatmap.rows(), 100);
        assert_eq!(heatmap.xs()[99], 45.0);
        assert_eq!(heatmap.ys()[0], 1.0);
        assert_eq!(heatmap.ys()[99], 100.0);

        let first = heatmap.row(0).unwrap();
        for row in 1..heatmap.rows() {
            assert_eq!(heatmap.row(row).unwrap(), first);
        }
    }

    #[test]
    fn efficiency_peaks_near_three_degrees() {
        let heatmap = standard_efficiency(EFFICIENCY_RESOLUTION).unwrap();

        let ([aoa, speed], best) = heatmap.max().unwrap();
        assert_relative_eq!(aoa, 10.0 / 3.0, epsilon = 1e-9);
        assert_eq!(speed, 1.0);
        assert_relative_eq!(best, 8.3783, epsilon = 1e-4);

        let (min, max) = heatmap.range().unwrap();
        assert_relative_eq!(min, -max, epsilon = 1e-9);
    }

    #[test]
    fn empty_axes_are_rejected() {
        assert!(matches!(
            efficiency_heatmap(vec![], vec![1.0]),
            Err(CurveError::Heatmap(HeatmapError::EmptyAxis))
        ));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        assert!(matches!(
            standard_efficiency(MAX_EFFICIENCY_RESOLUTION + 1),
            Err(CurveError::Resolution { resolution: 1001, max: 1000 })
        ));
    }

    #[test]
    fn invalid_range() {
        assert!(matches!(
            range((0.0, 10.0, 0.0)),
            Err(CurveError::Samples(SampleError::InvalidStep(_)))
        ));
        assert!(matches!(
            range((0.0, 1.0, 1e-320)),
            Err(CurveError::Samples(SampleError::TooManySamples))
        ));
    }
}
