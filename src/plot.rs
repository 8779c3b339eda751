// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::estimate::DistributionEstimate;

use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use std::error::Error;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x888888),
    hexcolour!(0xDDCC77),
    hexcolour!(0x999933),
    hexcolour!(0x332288),
    hexcolour!(0x117733),
    hexcolour!(0x88CCEE),
    hexcolour!(0x882255),
    hexcolour!(0x44AA99),
    hexcolour!(0xAA4499),
    hexcolour!(0xCC6677),
];

/// A labelled CDF curve ready for drawing.
pub struct Curve {
    label: String,
    estimate: DistributionEstimate,
}

impl Curve {
    pub fn new<S: Into<String>>(label: S, estimate: DistributionEstimate) -> Self {
        Self {
            label: label.into(),
            estimate,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn estimate(&self) -> &DistributionEstimate {
        &self.estimate
    }
}

/// Prettifies a series label for chart text. Underscores become spaces
/// and each run of consecutive letters is title-cased, so a digit starts
/// a new word.
pub fn display_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;
    for c in label.chars() {
        if c == '_' {
            out.push(' ');
            in_word = false;
        } else if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Draws the curves onto a PNG at `filename` with a log-scaled latency
/// axis. The embedded DejaVu face backs all chart text, so rendering
/// does not depend on host fonts.
pub fn render(
    filename: &Path,
    title: &str,
    size: (u32, u32),
    curves: &[Curve],
) -> Result<(), Box<dyn Error>> {
    register_font("sans-serif", FontStyle::Normal, dejavu::sans_mono::regular())
        .map_err(|_| "failed to register font")?;

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for curve in curves {
        let x = curve.estimate().x();
        if let (Some(first), Some(last)) = (x.first(), x.last()) {
            x_min = x_min.min(*first);
            x_max = x_max.max(*last);
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err("nothing to plot".into());
    }

    let root = BitMapBackend::new(filename, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(((x_min * 0.9)..(x_max * 1.1)).log_scale(), 0.0..1.05)?;

    chart
        .configure_mesh()
        .y_desc("CDF")
        .x_desc("Latency (ms, log scale)")
        .x_label_style(("sans-serif", 15))
        .y_label_style(("sans-serif", 15))
        .draw()?;

    for (index, curve) in curves.iter().enumerate() {
        let colour = &COLOURS[index % COLOURS.len()];
        chart
            .draw_series(LineSeries::new(
                curve.estimate().points(),
                colour.stroke_width(2),
            ))?
            .label(display_label(curve.label()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;

    Ok(())
}
