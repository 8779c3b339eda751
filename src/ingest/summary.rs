// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series::LatencySeries;
use crate::units;

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde_derive::*;

// z-score of the 95th percentile of a standard normal
const P95_Z_SCORE: f64 = 1.645;

const MAX_DRAWS: u64 = 10_000;

#[derive(Deserialize)]
struct Summary {
    latencies: Latencies,
    requests: u64,
}

// nanosecond percentile statistics as reported by the load generator;
// unknown keys (total, throughput, ...) are ignored
#[derive(Deserialize)]
struct Latencies {
    min: f64,
    mean: f64,
    max: f64,
    #[serde(rename = "50th")]
    p50: f64,
    #[serde(rename = "90th")]
    p90: f64,
    #[serde(rename = "95th")]
    p95: f64,
    #[serde(rename = "99th")]
    p99: f64,
}

/// Parses a single JSON summary object and synthesizes an approximate
/// sample set from it.
///
/// Draws `min(requests, 10000)` values from a normal distribution whose
/// spread is back-derived from the 95th percentile, clips them into the
/// reported range, then appends the reported percentiles themselves so
/// the tails stay anchored to ground truth. The resulting series is
/// marked approximate. A non-positive spread skips the draws and keeps
/// the anchors only.
pub(crate) fn sniff(content: &str, seed: u64) -> Option<LatencySeries> {
    let summary = serde_json::from_str::<Summary>(content).ok()?;

    let min = units::ns_to_millis(summary.latencies.min);
    let mean = units::ns_to_millis(summary.latencies.mean);
    let max = units::ns_to_millis(summary.latencies.max);
    let p50 = units::ns_to_millis(summary.latencies.p50);
    let p90 = units::ns_to_millis(summary.latencies.p90);
    let p95 = units::ns_to_millis(summary.latencies.p95);
    let p99 = units::ns_to_millis(summary.latencies.p99);

    let std = (p95 - mean) / P95_Z_SCORE;

    let mut values = Vec::new();
    if std.is_finite() && std > 0.0 {
        if let Ok(normal) = Normal::new(mean, std) {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            for _ in 0..summary.requests.min(MAX_DRAWS) {
                let draw: f64 = normal.sample(&mut rng);
                values.push(draw.max(min).min(max));
            }
        }
    }

    values.extend_from_slice(&[min, p50, p90, p95, p99, max]);

    debug!("synthesized {} samples from percentile summary", values.len());
    Some(LatencySeries::from_synthetic(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_json(requests: u64) -> String {
        format!(
            "{{\"latencies\": {{\"total\": 5e8, \"min\": 1e6, \"mean\": 5e6, \"max\": 2e7, \
             \"50th\": 4e6, \"90th\": 9e6, \"95th\": 1.1e7, \"99th\": 1.8e7}}, \
             \"requests\": {}, \"throughput\": 99.5}}",
            requests
        )
    }

    #[test]
    fn anchors_are_exact() {
        let series = sniff(&summary_json(100), 0).unwrap();
        assert_eq!(series.len(), 106);
        assert_eq!(series.min(), Some(1.0));
        assert_eq!(series.max(), Some(20.0));
        assert!(series.values().contains(&11.0));
        assert!(series.is_approximate());
    }

    #[test]
    fn draws_clipped_into_reported_range() {
        let series = sniff(&summary_json(1000), 0).unwrap();
        assert!(series.values().iter().all(|v| (1.0..=20.0).contains(v)));
    }

    #[test]
    fn draws_are_capped() {
        let series = sniff(&summary_json(50_000), 0).unwrap();
        assert_eq!(series.len(), 10_006);
    }

    #[test]
    fn synthesis_is_deterministic_per_seed() {
        let a = sniff(&summary_json(100), 7).unwrap();
        let b = sniff(&summary_json(100), 7).unwrap();
        let c = sniff(&summary_json(100), 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn degenerate_spread_keeps_anchors_only() {
        // p95 == mean, back-derived spread is zero
        let content = "{\"latencies\": {\"min\": 1e6, \"mean\": 1.1e7, \"max\": 2e7, \
                       \"50th\": 4e6, \"90th\": 9e6, \"95th\": 1.1e7, \"99th\": 1.8e7}, \
                       \"requests\": 100}";
        let series = sniff(content, 0).unwrap();
        assert_eq!(series.values(), &[1.0, 4.0, 9.0, 11.0, 18.0, 20.0]);
    }

    #[test]
    fn declines_other_json_shapes() {
        assert!(sniff("{\"latency\": 5000000}", 0).is_none());
        assert!(sniff("[1, 2, 3]", 0).is_none());
        assert!(sniff("latency_ms\n1ms\n", 0).is_none());
    }
}
