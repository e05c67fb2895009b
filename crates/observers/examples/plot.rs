//! Interactive views of the standard AeroSim sweeps.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- polar
//! cargo run --example plot --features plot -- efficiency
//! ```
//!
//! # Modes
//!
//! - **polar**: Cl and Cd of the default thin airfoil from -5° to 20°.
//! - **efficiency**: Cl/Cd over angle of attack and speed as a heatmap.
//!   Efficiency does not depend on speed, so every row has the same colors.

use std::error::Error;

use aerosim_aero::{
    AeroCoefficients, AngleOfAttack, ThinAirfoil, Wing, WingGeometry,
    sweeps::{AngleSweep, EfficiencySurface},
};
use aerosim_observers::{Heatmap, PlotObserver, ShowConfig};
use aerosim_sweep::{Event, samples};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "polar".into());
    match mode.as_str() {
        "polar" => polar(),
        "efficiency" => efficiency(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [polar|efficiency]");
            std::process::exit(1);
        }
    }
}

fn polar() -> Result<(), Box<dyn Error>> {
    let mut obs = PlotObserver::<2>::new(["CL (Lift Coefficient)", "CD (Drag Coefficient)"]);

    aerosim_sweep::solve(
        &ThinAirfoil::default(),
        &AngleSweep,
        samples::stepped(-5.0, 20.0, 1.0)?.into_iter().map(|a| [a]),
        |event: &Event<1, AngleOfAttack, AeroCoefficients>| {
            let c = event.snapshot.output;
            obs.record(event.point[0], [Some(c.cl), Some(c.cd)]);
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("AoA vs CL/CD")
            .legend()
            .x_label("Angle of Attack (°)")
            .y_label("Coefficient"),
    )?;

    Ok(())
}

fn efficiency() -> Result<(), Box<dyn Error>> {
    let angles = samples::linspace(-10.0, 45.0, 100)?;
    let speeds = samples::linspace(1.0, 100.0, 100)?;
    let points = samples::grid(&angles, &speeds);

    let mut heatmap = Heatmap::new(angles, speeds)?;
    let wing = Wing::new(WingGeometry::from_si(1.0)?);

    let solution = aerosim_sweep::solve_unobserved(&wing, &EfficiencySurface::sea_level(), points)?;
    for (index, (_, loads)) in solution.outputs().enumerate() {
        heatmap.record(index, loads.coefficients.efficiency())?;
    }

    heatmap.show(
        ShowConfig::new()
            .title("Aero Efficiency (Cl/Cd) vs AoA and Speed")
            .x_label("Angle of Attack (°)")
            .y_label("Speed (m/s)"),
    )?;

    Ok(())
}
