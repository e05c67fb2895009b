//! Command-line interface.

use std::{error::Error, path::PathBuf};

use aerosim_aero::profile::{ProfileError, ProfileSet};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    curves::{self, AOA_CURVE, EFFICIENCY_RESOLUTION, SPEED_CURVE_KMH},
    gui,
    inputs::Inputs,
    output::{self, OutputFormat},
};

#[derive(Debug, Parser)]
#[command(name = "aerosim")]
#[command(version)]
#[command(about = "Rear wing downforce and drag calculator", long_about = None)]
pub struct Cli {
    /// Vehicle profiles file (TOML, YAML or JSON), replacing the built-in presets
    #[arg(long, global = true)]
    pub profiles: Option<PathBuf>,

    /// Defaults to `gui` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate coefficients and forces at one operating point
    Calc {
        #[command(flatten)]
        point: PointArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Tabulate or plot Cl and Cd against angle of attack
    Coefficients {
        /// First angle of attack (degrees)
        #[arg(long, default_value_t = AOA_CURVE.0, allow_negative_numbers = true)]
        from: f64,

        /// Last angle of attack (degrees)
        #[arg(long, default_value_t = AOA_CURVE.1, allow_negative_numbers = true)]
        to: f64,

        /// Angle increment (degrees)
        #[arg(long, default_value_t = AOA_CURVE.2)]
        step: f64,

        /// Open a plot window instead of printing
        #[arg(long)]
        plot: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Tabulate or plot downforce and drag against speed in km/h
    Forces {
        #[command(flatten)]
        point: PointArgs,

        /// First speed (km/h)
        #[arg(long, default_value_t = SPEED_CURVE_KMH.0)]
        from: f64,

        /// Last speed (km/h)
        #[arg(long, default_value_t = SPEED_CURVE_KMH.1)]
        to: f64,

        /// Speed increment (km/h)
        #[arg(long, default_value_t = SPEED_CURVE_KMH.2)]
        step: f64,

        /// Open a plot window instead of printing
        #[arg(long)]
        plot: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Summarize or plot Cl/Cd over angle of attack and speed
    Efficiency {
        /// Samples along each axis, at most 1000
        #[arg(short = 'n', long, default_value_t = EFFICIENCY_RESOLUTION)]
        resolution: usize,

        /// Open a heatmap window instead of printing
        #[arg(long)]
        plot: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// List vehicle profiles
    Profiles {
        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Open the interactive window
    Gui,
}

/// Operating point options shared by several commands.
///
/// A named profile is applied first; explicit values override it.
#[derive(Debug, Clone, Default, Args)]
pub struct PointArgs {
    /// Vehicle profile to start from
    #[arg(short = 'p', long)]
    pub profile: Option<String>,

    /// Air density (kg/m³) [default: 1.225]
    #[arg(short = 'r', long)]
    pub density: Option<f64>,

    /// Velocity (m/s) [default: 60]
    #[arg(short = 'v', long)]
    pub velocity: Option<f64>,

    /// Wing reference area (m²) [default: 1.2]
    #[arg(short = 'A', long)]
    pub area: Option<f64>,

    /// Angle of attack (degrees) [default: 10]
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub aoa: Option<f64>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown profile `{name}`, expected one of: {known}")]
    UnknownProfile { name: String, known: String },

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl PointArgs {
    /// Builds the operating point from the profile and explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownProfile`] if the profile name is not in the set.
    pub fn inputs(&self, profiles: &ProfileSet) -> Result<Inputs, CliError> {
        let mut inputs = Inputs::default();

        if let Some(name) = &self.profile {
            let profile = profiles
                .get(name)
                .ok_or_else(|| CliError::UnknownProfile {
                    name: name.clone(),
                    known: profiles.names().collect::<Vec<_>>().join(", "),
                })?;
            inputs.apply_profile(profile);
        }

        if let Some(density) = self.density {
            inputs.density = density.to_string();
        }
        if let Some(area) = self.area {
            inputs.area = area.to_string();
        }
        if let Some(velocity) = self.velocity {
            inputs.speed = velocity;
        }
        if let Some(aoa) = self.aoa {
            inputs.aoa = aoa;
        }

        Ok(inputs)
    }
}

/// Loads the profiles named on the command line, or the built-in presets.
///
/// # Errors
///
/// Returns an error if the profiles file cannot be loaded.
pub fn load_profiles(path: Option<&PathBuf>) -> Result<ProfileSet, CliError> {
    match path {
        Some(path) => Ok(ProfileSet::load(path)?),
        None => Ok(ProfileSet::builtin()),
    }
}

/// Runs the parsed command.
///
/// # Errors
///
/// Returns any input, sweep, output or window error.
pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let profiles = load_profiles(cli.profiles.as_ref())?;
    let command = cli.command.unwrap_or(Commands::Gui);
    debug!(?command, profiles = profiles.len(), "running command");

    match command {
        Commands::Calc { point, output } => {
            let report = point.inputs(&profiles)?.evaluate()?;
            println!("{}", output::report(&report, output)?);
        }

        Commands::Coefficients {
            from,
            to,
            step,
            plot,
            output,
        } => {
            let chart = curves::coefficient_chart(&curves::range((from, to, step))?)?;
            if plot {
                chart.show()?;
            } else {
                println!("{}", output::chart(&chart, output)?);
            }
        }

        Commands::Forces {
            point,
            from,
            to,
            step,
            plot,
            output,
        } => {
            let (wing, at) = point.inputs(&profiles)?.operating_point()?;
            let chart = curves::force_chart(&wing, &at, &curves::range((from, to, step))?)?;
            if plot {
                chart.show()?;
            } else {
                println!("{}", output::chart(&chart, output)?);
            }
        }

        Commands::Efficiency {
            resolution,
            plot,
            output,
        } => {
            let heatmap = curves::standard_efficiency(resolution)?;
            if plot {
                heatmap.show(curves::efficiency_show_config())?;
            } else {
                println!("{}", output::efficiency(&heatmap, output)?);
            }
        }

        Commands::Profiles { output } => {
            println!("{}", output::profiles(&profiles, output)?);
        }

        Commands::Gui => {
            info!("opening interactive window");
            gui::run(profiles)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::inputs::{DEFAULT_AOA, DEFAULT_DENSITY, DEFAULT_SPEED};

    #[test]
    fn no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["aerosim"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.profiles.is_none());
    }

    #[test]
    fn calc_arguments() {
        let cli = Cli::try_parse_from([
            "aerosim", "calc", "-v", "25", "-A", "1.0", "-a", "-4", "-o", "json",
        ])
        .unwrap();

        let Some(Commands::Calc { point, output }) = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(output, OutputFormat::Json);
        assert_eq!(point.velocity, Some(25.0));
        assert_eq!(point.area, Some(1.0));
        assert_eq!(point.aoa, Some(-4.0));
        assert_eq!(point.density, None);
    }

    #[test]
    fn coefficient_defaults() {
        let cli = Cli::try_parse_from(["aerosim", "coefficients"]).unwrap();
        let Some(Commands::Coefficients { from, to, step, plot, .. }) = cli.command else {
            panic!("expected coefficients");
        };
        assert_eq!((from, to, step), AOA_CURVE);
        assert!(!plot);
    }

    #[test]
    fn efficiency_takes_no_operating_point() {
        let cli = Cli::try_parse_from(["aerosim", "efficiency", "-n", "20"]).unwrap();
        let Some(Commands::Efficiency { resolution, plot, .. }) = cli.command else {
            panic!("expected efficiency");
        };
        assert_eq!(resolution, 20);
        assert!(!plot);

        assert!(Cli::try_parse_from(["aerosim", "efficiency", "-r", "abc"]).is_err());
    }

    #[test]
    fn global_profiles_flag() {
        let cli = Cli::try_parse_from(["aerosim", "profiles", "--profiles", "cars.toml"]).unwrap();
        assert_eq!(cli.profiles, Some(PathBuf::from("cars.toml")));
    }

    #[test]
    fn explicit_values_override_profile() {
        let point = PointArgs {
            profile: Some("f1 car".into()),
            velocity: Some(30.0),
            ..PointArgs::default()
        };
        let inputs = point.inputs(&ProfileSet::builtin()).unwrap();

        assert_eq!(inputs.area, "1.5");
        assert_eq!(inputs.aoa, 12.0);
        assert_eq!(inputs.speed, 30.0);
        assert_eq!(inputs.density, DEFAULT_DENSITY);
    }

    #[test]
    fn no_options_keep_defaults() {
        let inputs = PointArgs::default().inputs(&ProfileSet::builtin()).unwrap();
        assert_eq!(inputs.speed, DEFAULT_SPEED);
        assert_eq!(inputs.aoa, DEFAULT_AOA);
    }

    #[test]
    fn unknown_profile() {
        let point = PointArgs {
            profile: Some("Rally".into()),
            ..PointArgs::default()
        };
        let error = point.inputs(&ProfileSet::builtin()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown profile `Rally`, expected one of: Custom, Formula Student, GT Car, F1 Car"
        );
    }

    #[test]
    fn missing_profiles_file() {
        let path = PathBuf::from("does/not/exist.toml");
        assert!(matches!(
            load_profiles(Some(&path)),
            Err(CliError::Profile(ProfileError::Io { .. }))
        ));
    }
}
