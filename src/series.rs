// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A cleaned latency series in milliseconds.
///
/// Values are sorted ascending and every element is finite and strictly
/// positive. An empty series is a valid state meaning no usable data was
/// found in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct LatencySeries {
    values: Vec<f64>,
    approximate: bool,
}

impl LatencySeries {
    /// Build a series from raw millisecond values, dropping anything that
    /// would break the logarithmic axis downstream.
    pub fn from_raw(values: Vec<f64>) -> Self {
        Self::clean(values, false)
    }

    /// Build a series from values synthesized out of a percentile summary.
    /// The result carries an approximate marker so the caller can warn.
    pub fn from_synthetic(values: Vec<f64>) -> Self {
        Self::clean(values, true)
    }

    fn clean(mut values: Vec<f64>, approximate: bool) -> Self {
        values.retain(|v| v.is_finite() && *v > 0.0);
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        Self {
            values,
            approximate,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// True when the series was synthesized from summary statistics rather
    /// than parsed from per-request samples.
    pub fn is_approximate(&self) -> bool {
        self.approximate
    }
}
