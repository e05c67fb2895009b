//! Interactive desktop window.

use aerosim_aero::profile::ProfileSet;
use aerosim_observers::{Heatmap, draw};
use eframe::egui;
use egui_plot::{Legend, Plot};
use tracing::{debug, info, warn};

use crate::{
    curves::{self, AOA_CURVE, Chart, EFFICIENCY_RESOLUTION, SPEED_CURVE_KMH},
    inputs::{AOA_RANGE, InputError, Inputs, Report, SPEED_RANGE},
};

/// Opens the window and blocks until it is closed.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn run(profiles: ProfileSet) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Motorsport AeroSim",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(AeroApp::new(profiles)))),
    )
}

/// What the plot panel currently shows.
enum View {
    Empty,
    Chart(Chart),
    Heatmap(Heatmap),
}

struct AeroApp {
    inputs: Inputs,
    profiles: ProfileSet,
    selected: usize,
    status: String,
    view: View,
}

impl AeroApp {
    fn new(profiles: ProfileSet) -> Self {
        let mut app = Self {
            inputs: Inputs::default(),
            profiles,
            selected: 0,
            status: String::new(),
            view: View::Empty,
        };
        app.apply_selected_profile();
        app
    }

    fn apply_selected_profile(&mut self) {
        if let Some(profile) = self.profiles.iter().nth(self.selected) {
            info!(profile = %profile.name, "applying profile");
            self.inputs.apply_profile(profile);
        }
        self.calculate();
    }

    /// Evaluates the inputs and plots forces against speed.
    fn calculate(&mut self) {
        let result = self.inputs.operating_point().map(|(wing, at)| {
            let loads = wing.loads(&at);
            (wing, at, loads)
        });

        match result {
            Ok((wing, at, loads)) => {
                self.status = Report::from(loads).to_string();
                match curves::range(SPEED_CURVE_KMH)
                    .and_then(|speeds| curves::force_chart(&wing, &at, &speeds))
                {
                    Ok(chart) => self.view = View::Chart(chart),
                    Err(error) => self.status = format!("Error: {error}"),
                }
            }
            Err(error) => {
                if let InputError::NotNumeric { field, text } = &error {
                    debug!(field = *field, text = %text, "entry is not a number");
                }
                self.status = error.to_string();
            }
        }
    }

    fn plot_coefficients(&mut self) {
        match curves::range(AOA_CURVE).and_then(|angles| curves::coefficient_chart(&angles)) {
            Ok(chart) => {
                self.view = View::Chart(chart);
                self.status = "Plotted AoA vs CL/CD.".to_owned();
            }
            Err(error) => self.status = format!("Error: {error}"),
        }
    }

    fn plot_efficiency(&mut self) {
        match curves::standard_efficiency(EFFICIENCY_RESOLUTION) {
            Ok(heatmap) => {
                self.status = match heatmap.max() {
                    Some(([aoa, _], best)) => format!("Best Cl/Cd {best:.2} at {aoa:.1}°"),
                    None => "No finite efficiency values".to_owned(),
                };
                self.view = View::Heatmap(heatmap);
            }
            Err(error) => {
                warn!(%error, "efficiency heatmap failed");
                self.status = format!("Error: {error}");
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut recalculate = false;
        let mut profile_changed = false;

        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Air Density (kg/m³):");
                ui.text_edit_singleline(&mut self.inputs.density);
                ui.end_row();

                ui.label("Speed (m/s):");
                recalculate |= ui
                    .add(
                        egui::Slider::new(&mut self.inputs.speed, SPEED_RANGE)
                            .fixed_decimals(1)
                            .suffix(" m/s"),
                    )
                    .changed();
                ui.end_row();

                ui.label("Wing Area (m²):");
                ui.text_edit_singleline(&mut self.inputs.area);
                ui.end_row();

                ui.label("Angle of Attack (°):");
                recalculate |= ui
                    .add(
                        egui::Slider::new(&mut self.inputs.aoa, AOA_RANGE)
                            .fixed_decimals(1)
                            .suffix("°"),
                    )
                    .changed();
                ui.end_row();

                ui.label("Select Car Profile:");
                let selected_name = self
                    .profiles
                    .iter()
                    .nth(self.selected)
                    .map_or("", |p| p.name.as_str())
                    .to_owned();
                egui::ComboBox::from_id_salt("profile")
                    .selected_text(selected_name)
                    .show_ui(ui, |ui| {
                        for (index, name) in self.profiles.names().enumerate() {
                            profile_changed |= ui
                                .selectable_value(&mut self.selected, index, name)
                                .changed();
                        }
                    });
                ui.end_row();
            });

        if profile_changed {
            self.apply_selected_profile();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Calculate").clicked() {
                recalculate = true;
            }
            if ui.button("Plot AoA vs CL/CD").clicked() {
                self.plot_coefficients();
            }
            if ui.button("Show Efficiency Heatmap").clicked() {
                self.plot_efficiency();
            }
        });

        if recalculate {
            self.calculate();
        }

        ui.add_space(8.0);
        ui.label(self.status.as_str());
    }

    fn plot(&self, ui: &mut egui::Ui) {
        match &self.view {
            View::Empty => {}
            View::Chart(chart) => {
                Plot::new(("chart", chart.title))
                    .legend(Legend::default())
                    .x_axis_label(chart.x_label)
                    .y_axis_label(chart.y_label)
                    .show(ui, |plot_ui| draw::traces(plot_ui, &chart.traces));
            }
            View::Heatmap(heatmap) => {
                if let Some((min, max)) = heatmap.range() {
                    ui.label(format!(
                        "Aero Efficiency (Cl/Cd) vs AoA and Speed, {min:.2} to {max:.2}"
                    ));
                }
                Plot::new("efficiency")
                    .x_axis_label("Angle of Attack (°)")
                    .y_axis_label("Speed (m/s)")
                    .show(ui, |plot_ui| draw::heatmap(plot_ui, heatmap));
            }
        }
    }
}

impl eframe::App for AeroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.plot(ui));
    }
}
