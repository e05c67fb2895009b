//! Text and JSON rendering for command-line results.

use aerosim_aero::profile::ProfileSet;
use aerosim_observers::Heatmap;
use clap::ValueEnum;
use serde::Serialize;

use crate::{curves::Chart, inputs::Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

const COLUMN: usize = 14;

pub fn report(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Table => Ok(report.to_string()),
    }
}

#[derive(Serialize)]
struct ChartJson<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    x: Vec<f64>,
    series: Vec<SeriesJson<'a>>,
}

#[derive(Serialize)]
struct SeriesJson<'a> {
    name: &'a str,
    values: Vec<f64>,
}

/// Renders a chart as aligned columns or as JSON.
pub fn chart(chart: &Chart, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let x = chart.rows().map(|(x, _)| x).collect();
            let series = chart
                .traces
                .iter()
                .map(|trace| SeriesJson {
                    name: &trace.name,
                    values: trace.points.iter().map(|p| p[1]).collect(),
                })
                .collect();

            serde_json::to_string_pretty(&ChartJson {
                title: chart.title,
                x_label: chart.x_label,
                y_label: chart.y_label,
                x,
                series,
            })
        }
        OutputFormat::Table => {
            let widths: Vec<usize> = std::iter::once(chart.x_label)
                .chain(chart.traces.iter().map(|t| t.name.as_str()))
                .map(|name| name.chars().count().max(COLUMN))
                .collect();

            let mut lines = vec![chart.title.to_owned()];
            lines.push(
                std::iter::once(chart.x_label)
                    .chain(chart.traces.iter().map(|t| t.name.as_str()))
                    .zip(&widths)
                    .map(|(name, &w)| format!("{name:>w$}"))
                    .collect::<Vec<_>>()
                    .join("  "),
            );

            for (x, ys) in chart.rows() {
                lines.push(
                    std::iter::once(x)
                        .chain(ys)
                        .zip(&widths)
                        .map(|(value, &w)| format!("{value:>w$.4}"))
                        .collect::<Vec<_>>()
                        .join("  "),
                );
            }

            Ok(lines.join("\n"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct Summary {
    cols: usize,
    rows: usize,
    min: f64,
    max: f64,
    best_aoa: f64,
    best_speed: f64,
}

impl Summary {
    fn of(heatmap: &Heatmap) -> Option<Self> {
        let (min, max) = heatmap.range()?;
        let ([best_aoa, best_speed], _) = heatmap.max()?;
        Some(Self {
            cols: heatmap.cols(),
            rows: heatmap.rows(),
            min,
            max,
            best_aoa,
            best_speed,
        })
    }
}

/// Summarizes an efficiency heatmap by its range and best point.
pub fn efficiency(heatmap: &Heatmap, format: OutputFormat) -> Result<String, serde_json::Error> {
    let Some(summary) = Summary::of(heatmap) else {
        return Ok("No finite efficiency values".to_owned());
    };

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&summary),
        OutputFormat::Table => Ok(format!(
            "Aero Efficiency (Cl/Cd) vs AoA and Speed\n\
             Samples:    {} AoA x {} speed\n\
             Range:      {:.4} to {:.4}\n\
             Best:       {:.4} at {:.2}° and {:.2} m/s",
            summary.cols,
            summary.rows,
            summary.min,
            summary.max,
            summary.max,
            summary.best_aoa,
            summary.best_speed,
        )),
    }
}

/// Lists profiles with their overrides.
pub fn profiles(set: &ProfileSet, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(set),
        OutputFormat::Table => {
            let show = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |v| v.to_string());
            let name_width = set.names().map(|n| n.chars().count()).max().unwrap_or(0).max(4);

            let mut lines = vec![format!(
                "{:<name_width$}  {:>10}  {:>8}  {:>14}",
                "Name", "Area (m²)", "AoA (°)", "Speed (m/s)"
            )];
            for profile in set.iter() {
                lines.push(format!(
                    "{:<name_width$}  {:>10}  {:>8}  {:>14}",
                    profile.name,
                    show(profile.area),
                    show(profile.aoa),
                    show(profile.velocity),
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}
