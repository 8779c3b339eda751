// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

mod config;
mod config_file;
mod error;
mod estimate;
mod ingest;
mod logger;
mod plot;
mod series;
mod units;

pub use crate::config::{Config, SeriesInput, NAME, VERSION};
pub use crate::error::{Error, Result};
pub use crate::estimate::{smooth_cdf, DistributionEstimate};
pub use crate::ingest::{load, Format};
pub use crate::logger::{Level, Logger};
pub use crate::plot::{display_label, render, Curve};
pub use crate::series::LatencySeries;

/// Loads every configured input, estimates a CDF per series, and renders
/// the chart described by the config.
pub fn run(config: &Config) -> Result<()> {
    let mut curves = Vec::with_capacity(config.inputs().len());
    for input in config.inputs() {
        let series = ingest::load(input.path(), input.format(), config.seed())?;
        if series.is_empty() {
            return Err(Error::NoSamples {
                path: input.path().to_path_buf(),
            });
        }
        if series.is_approximate() {
            warn!(
                "{}: synthesized from a percentile summary, distribution is approximate",
                input.path().display()
            );
        }
        debug!(
            "{}: {} samples spanning [{}, {}] ms",
            input.path().display(),
            series.len(),
            series.min().unwrap_or(0.0),
            series.max().unwrap_or(0.0),
        );
        curves.push(Curve::new(input.label(), smooth_cdf(&series)));
    }

    let title = match config.title() {
        Some(title) => title.to_string(),
        None => default_title(&curves),
    };

    let output = config.output_path();
    plot::render(&output, &title, (config.width(), config.height()), &curves)
        .map_err(|e| Error::Render(e.to_string()))?;
    info!("Plot saved to {}", output.display());

    Ok(())
}

// "Latency Distribution (CDF) - Least Connections vs Round Robin"
fn default_title(curves: &[Curve]) -> String {
    let labels: Vec<String> = curves
        .iter()
        .map(|curve| plot::display_label(curve.label()))
        .collect();
    format!("Latency Distribution (CDF) - {}", labels.join(" vs "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_joins_display_labels() {
        let samples = vec![1.0, 2.0, 4.0];
        let curves = vec![
            Curve::new(
                "least_connections",
                smooth_cdf(&LatencySeries::from_raw(samples.clone())),
            ),
            Curve::new("round_robin", smooth_cdf(&LatencySeries::from_raw(samples))),
        ];
        assert_eq!(
            default_title(&curves),
            "Latency Distribution (CDF) - Least Connections vs Round Robin"
        );
    }
}
