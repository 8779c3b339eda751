// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series::LatencySeries;

use superslice::Ext as _;

use std::f64::consts::PI;
use std::fmt;

const GRID_POINTS: usize = 600;

// floor for the grid start relative to the maximum, keeps the log axis
// usable when the true minimum is vanishingly small
const SPAN_FLOOR: f64 = 1e-6;

/// A smooth estimate of the CDF over a log-spaced grid spanning the
/// series' range.
pub struct DistributionEstimate {
    x: Vec<f64>,
    cdf: Vec<f64>,
    smoothed: bool,
}

impl DistributionEstimate {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// False when density estimation degenerated and the empirical CDF
    /// was used instead.
    pub fn is_smoothed(&self) -> bool {
        self.smoothed
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.cdf.iter().copied())
    }
}

/// Estimates a smooth CDF for the series.
///
/// Fits a Gaussian kernel density estimate with Scott's rule bandwidth,
/// integrates it across a 600 point log-spaced grid, and normalizes so
/// the curve lands exactly on 1.0. Any numerical failure degrades to the
/// empirical CDF, so estimation never fails on non-empty input. An empty
/// series yields an empty estimate.
pub fn smooth_cdf(series: &LatencySeries) -> DistributionEstimate {
    let values = series.values();
    let (min, max) = match (series.min(), series.max()) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            return DistributionEstimate {
                x: Vec::new(),
                cdf: Vec::new(),
                smoothed: false,
            }
        }
    };

    let min = min.max(max * SPAN_FLOOR);
    let x = log_grid(min, max, GRID_POINTS);

    match Kde::fit(values) {
        Ok(kde) => {
            let mut pdf: Vec<f64> = x.iter().map(|&g| kde.density(g)).collect();
            for value in pdf.iter_mut() {
                if !value.is_finite() {
                    *value = 0.0;
                }
            }

            let mut cdf = Vec::with_capacity(pdf.len());
            let mut total = 0.0;
            for value in &pdf {
                total += value;
                cdf.push(total);
            }

            if total > 0.0 {
                for value in cdf.iter_mut() {
                    *value /= total;
                }
                DistributionEstimate {
                    x,
                    cdf,
                    smoothed: true,
                }
            } else {
                warn!("density mass vanished on the grid, using empirical CDF");
                let cdf = empirical_cdf(values, &x);
                DistributionEstimate {
                    x,
                    cdf,
                    smoothed: false,
                }
            }
        }
        Err(e) => {
            warn!("density estimation failed ({}), using empirical CDF", e);
            let cdf = empirical_cdf(values, &x);
            DistributionEstimate {
                x,
                cdf,
                smoothed: false,
            }
        }
    }
}

fn log_grid(min: f64, max: f64, points: usize) -> Vec<f64> {
    let log_min = min.log10();
    let log_max = max.log10();
    let step = (log_max - log_min) / (points - 1) as f64;
    // powf rounds, so clamp every point into the span and pin the ends
    // exactly; a repeated-value series needs the whole grid on the value
    let mut grid: Vec<f64> = (0..points)
        .map(|i| (10f64.powf(log_min + step * i as f64)).max(min).min(max))
        .collect();
    grid[0] = min;
    grid[points - 1] = max;
    grid
}

#[derive(Debug, PartialEq)]
enum FitError {
    TooFewSamples,
    DegenerateVariance,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::TooFewSamples => write!(f, "fewer than two samples"),
            FitError::DegenerateVariance => write!(f, "zero sample variance"),
        }
    }
}

#[derive(Debug)]
struct Kde<'a> {
    samples: &'a [f64],
    bandwidth: f64,
}

impl<'a> Kde<'a> {
    /// Fits a Gaussian kernel over the samples with Scott's rule
    /// bandwidth. Fails when the sample variance is degenerate, which is
    /// the all-samples-identical case.
    fn fit(samples: &'a [f64]) -> Result<Self, FitError> {
        let n = samples.len();
        if n < 2 {
            return Err(FitError::TooFewSamples);
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        if !variance.is_finite() || variance <= 0.0 {
            return Err(FitError::DegenerateVariance);
        }

        // Scott's rule: n^(-1/5) of the sample standard deviation
        let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);
        Ok(Self { samples, bandwidth })
    }

    fn density(&self, at: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|sample| {
                let z = (at - sample) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }
}

// fraction of samples at or below each grid point, `sorted` ascending
fn empirical_cdf(sorted: &[f64], grid: &[f64]) -> Vec<f64> {
    let n = sorted.len() as f64;
    grid.iter()
        .map(|g| sorted.upper_bound_by(|v| v.partial_cmp(g).unwrap()) as f64 / n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> LatencySeries {
        LatencySeries::from_raw(values.to_vec())
    }

    #[test]
    fn grid_shape() {
        let estimate = smooth_cdf(&series(&[0.5, 2.0, 7.0, 40.0]));
        let x = estimate.x();
        assert_eq!(x.len(), 600);
        assert!(x.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(x[0], 0.5);
        assert_eq!(x[599], 40.0);
    }

    #[test]
    fn grid_floor_engages_for_wide_spans() {
        let estimate = smooth_cdf(&series(&[1e-9, 0.5, 10.0]));
        assert_eq!(estimate.x()[0], 10.0 * 1e-6);
        assert_eq!(*estimate.x().last().unwrap(), 10.0);
    }

    #[test]
    fn cdf_is_monotone_and_bounded() {
        let estimate = smooth_cdf(&series(&[1.0, 2.0, 2.0, 3.0, 10.0]));
        assert!(estimate.is_smoothed());
        let cdf = estimate.cdf();
        assert_eq!(cdf.len(), 600);
        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
        assert!(cdf.iter().all(|c| (0.0..=1.0).contains(c)));
        assert_eq!(cdf[599], 1.0);
    }

    #[test]
    fn repeated_value_falls_back_to_step() {
        let estimate = smooth_cdf(&series(&[5.0, 5.0, 5.0, 5.0]));
        assert!(!estimate.is_smoothed());
        assert!(estimate.x().iter().all(|&g| g == 5.0));
        assert!(estimate.cdf().iter().all(|&c| c == 1.0));
    }

    #[test]
    fn repeated_value_grid_stays_on_the_value() {
        // values where 10^log10(v) rounds below v
        for &v in &[0.3, 11.0, 123.456] {
            let estimate = smooth_cdf(&series(&[v, v, v]));
            assert!(estimate.x().iter().all(|&g| g == v));
            assert!(estimate.cdf().iter().all(|&c| c == 1.0));
        }
    }

    #[test]
    fn single_sample_falls_back() {
        let estimate = smooth_cdf(&series(&[3.0]));
        assert!(!estimate.is_smoothed());
        assert!(estimate.cdf().iter().all(|&c| c == 1.0));
    }

    #[test]
    fn empty_series_yields_empty_estimate() {
        let estimate = smooth_cdf(&series(&[]));
        assert!(estimate.x().is_empty());
        assert!(estimate.cdf().is_empty());
    }

    #[test]
    fn empirical_rank_fractions() {
        let sorted = [1.0, 2.0, 2.0, 3.0, 10.0];
        let cdf = empirical_cdf(&sorted, &[1.0, 2.0, 10.0]);
        assert_eq!(cdf, vec![0.2, 0.6, 1.0]);
    }

    #[test]
    fn empirical_between_samples() {
        let sorted = [1.0, 2.0, 2.0, 3.0, 10.0];
        let cdf = empirical_cdf(&sorted, &[0.5, 2.5, 11.0]);
        assert_eq!(cdf, vec![0.0, 0.6, 1.0]);
    }

    #[test]
    fn scott_bandwidth() {
        let kde = Kde::fit(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        // sample variance 2.5 with the n-1 divisor
        assert_eq!(kde.bandwidth, 2.5_f64.sqrt() * 5.0_f64.powf(-0.2));
    }

    #[test]
    fn fit_rejects_degenerate_samples() {
        assert_eq!(Kde::fit(&[]).unwrap_err(), FitError::TooFewSamples);
        assert_eq!(Kde::fit(&[7.0]).unwrap_err(), FitError::TooFewSamples);
        assert_eq!(
            Kde::fit(&[4.0, 4.0, 4.0]).unwrap_err(),
            FitError::DegenerateVariance
        );
    }

    #[test]
    fn density_peaks_between_symmetric_samples() {
        let kde = Kde::fit(&[1.0, 3.0]).unwrap();
        assert!((kde.density(1.5) - kde.density(2.5)).abs() < 1e-12);
        assert!(kde.density(2.0) > kde.density(0.0));
        assert!(kde.density(2.0) > kde.density(4.0));
    }
}
