//! Drawing routines shared by the standalone windows and interactive apps.

use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, PlotPoints, PlotUi, Polygon};

use crate::{Heatmap, Trace, colormap};

/// Draws each trace as a named line.
pub fn traces(plot_ui: &mut PlotUi, traces: &[Trace]) {
    for trace in traces {
        let points: PlotPoints = trace.points.iter().copied().collect();
        plot_ui.line(Line::new(points).name(&trace.name));
    }
}

/// Draws every finite heatmap cell as a filled rectangle.
///
/// Colors follow the plasma colormap scaled to the heatmap's finite range.
pub fn heatmap(plot_ui: &mut PlotUi, heatmap: &Heatmap) {
    let Some(range) = heatmap.range() else {
        return;
    };

    for cell in heatmap.cells().filter(|cell| cell.value.is_finite()) {
        let [r, g, b] = colormap::plasma(colormap::normalize(cell.value, range));
        let color = Color32::from_rgb(r, g, b);

        let corners: PlotPoints = vec![
            [cell.x[0], cell.y[0]],
            [cell.x[1], cell.y[0]],
            [cell.x[1], cell.y[1]],
            [cell.x[0], cell.y[1]],
        ]
        .into();

        plot_ui.polygon(
            Polygon::new(corners)
                .fill_color(color)
                .stroke(Stroke::new(0.0, color)),
        );
    }
}
