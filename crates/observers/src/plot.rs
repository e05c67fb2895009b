//! Standalone egui windows for recorded traces and heatmaps.

use eframe::egui;
use egui_plot::{Legend, Plot};

use crate::{Heatmap, PlotObserver, Trace, draw};

/// Configuration for rendering a [`PlotObserver`] or [`Heatmap`] window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("AoA vs CL/CD").legend().x_label("Angle of Attack (°)"))?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, no axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }
}

impl<const N: usize> PlotObserver<N> {
    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        show_traces(self.into_traces(), config)
    }
}

/// Opens a blocking egui window displaying the given traces.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_traces(traces: Vec<Trace>, config: ShowConfig) -> Result<(), eframe::Error> {
    run(config, Content::Traces(traces))
}

impl Heatmap {
    /// Opens a blocking egui window displaying the heatmap.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        run(config, Content::Heatmap(self))
    }
}

enum Content {
    Traces(Vec<Trace>),
    Heatmap(Heatmap),
}

fn run(config: ShowConfig, content: Content) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.clone().unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp { config, content }))),
    )
}

/// The egui [`eframe::App`] that renders collected data.
struct PlotApp {
    config: ShowConfig,
    content: Content,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Content::Heatmap(heatmap) = &self.content {
            egui::TopBottomPanel::bottom("heatmap_range").show(ctx, |ui| {
                match heatmap.range() {
                    Some((min, max)) => ui.label(format!("Range: {min:.2} to {max:.2}")),
                    None => ui.label("No finite values"),
                };
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("aerosim_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.config.y_label {
                plot = plot.y_axis_label(label.as_str());
            }
            plot.show(ui, |plot_ui| match &self.content {
                Content::Traces(traces) => draw::traces(plot_ui, traces),
                Content::Heatmap(heatmap) => draw::heatmap(plot_ui, heatmap),
            });
        });
    }
}
