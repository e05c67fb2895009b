//! Sweeps of the wing models feeding the plot and heatmap observers.

use aerosim_aero::{
    AeroCoefficients, AngleOfAttack, ThinAirfoil, Wing, WingGeometry, WingInput, WingLoads,
    angle_of_attack_to_coefficients,
    sweeps::{AngleSweep, EfficiencySurface, KMH_PER_MPS, SpeedSweep},
};
use aerosim_observers::{Heatmap, PlotObserver};
use aerosim_sweep::{Action, Event, Status, samples};
use approx::assert_relative_eq;
use uom::si::{f64::MassDensity, mass_density::kilogram_per_cubic_meter};

#[test]
fn angle_sweep_into_plot_observer() {
    let mut obs = PlotObserver::<2>::new(["CL", "CD"]);
    let angles = samples::stepped(-5.0, 20.0, 1.0).unwrap();

    let solution = aerosim_sweep::solve(
        &ThinAirfoil::default(),
        &AngleSweep,
        angles.iter().map(|&a| [a]),
        |event: &Event<1, AngleOfAttack, AeroCoefficients>| {
            let c = event.snapshot.output;
            obs.record(event.point[0], [Some(c.cl), Some(c.cd)]);
            None
        },
    )
    .unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.len(), 26);

    let traces = obs.into_traces();
    assert_eq!(traces[0].points.len(), 26);
    for (&[aoa, cl], &[_, cd]) in traces[0].points.iter().zip(&traces[1].points) {
        assert_eq!((cl, cd), angle_of_attack_to_coefficients(aoa));
    }
}

#[test]
fn stall_search_stops_early() {
    let angles = samples::stepped(0.0, 45.0, 0.5).unwrap();

    // Past the efficiency peak, stop once Cl/Cd falls below 3.
    let solution = aerosim_sweep::solve(
        &ThinAirfoil::default(),
        &AngleSweep,
        angles.iter().map(|&a| [a]),
        |event: &Event<1, AngleOfAttack, AeroCoefficients>| {
            (event.point[0] > 5.0 && event.snapshot.output.efficiency() < 3.0)
                .then_some(Action::StopEarly)
        },
    )
    .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    let (last, coefficients) = solution.outputs().last().unwrap();
    assert!(coefficients.efficiency() < 3.0);
    assert_eq!(last[0], 17.0);
}

#[test]
fn speed_sweep_uses_kmh() {
    let density = MassDensity::new::<kilogram_per_cubic_meter>(1.225);
    let problem = SpeedSweep::new(density, AngleOfAttack::from_degrees(12.0)).unwrap();
    let wing = Wing::new(WingGeometry::from_si(1.5).unwrap());
    let speeds = samples::stepped(0.0, 300.0, 10.0).unwrap();

    let solution =
        aerosim_sweep::solve_unobserved(&wing, &problem, speeds.iter().map(|&s| [s])).unwrap();

    assert_eq!(solution.len(), 31);
    for (snapshot, point) in solution.history.iter().zip(&solution.points) {
        let input: &WingInput = &snapshot.input;
        assert_relative_eq!(
            input.flow.velocity().value,
            point[0] / KMH_PER_MPS,
            max_relative = 1e-12
        );
    }

    let top = solution.history.last().unwrap().output;
    assert_relative_eq!(top.forces.downforce_newtons(), 8396.02, epsilon = 0.01);
}

#[test]
fn efficiency_surface_into_heatmap() {
    let angles = samples::linspace(-10.0, 45.0, 12).unwrap();
    let speeds = samples::linspace(1.0, 100.0, 5).unwrap();
    let points = samples::grid(&angles, &speeds);

    let mut heatmap = Heatmap::new(angles.clone(), speeds.clone()).unwrap();
    let wing = Wing::new(WingGeometry::from_si(1.0).unwrap());

    aerosim_sweep::solve(
        &wing,
        &EfficiencySurface::sea_level(),
        points,
        |event: &Event<2, WingInput, WingLoads>| {
            heatmap
                .record(event.index, event.snapshot.output.coefficients.efficiency())
                .unwrap();
            None
        },
    )
    .unwrap();

    assert_eq!((heatmap.cols(), heatmap.rows()), (12, 5));
    for (row, &speed) in speeds.iter().enumerate() {
        for (col, &aoa) in angles.iter().enumerate() {
            let (cl, cd) = angle_of_attack_to_coefficients(aoa);
            assert_eq!(heatmap.get(col, row), Some(cl / cd), "aoa {aoa}, speed {speed}");
        }
    }

    let cells: Vec<_> = heatmap.cells().collect();
    assert_eq!(cells.len(), 60);
    assert_eq!(cells[0].x[1], cells[1].x[0]);
    assert_eq!(cells[0].y, cells[11].y);
}
