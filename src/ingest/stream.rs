// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series::LatencySeries;
use crate::units;

use serde_derive::*;

#[derive(Deserialize)]
struct StreamRecord {
    latency: f64,
}

/// Parses newline-delimited JSON records carrying a nanosecond `latency`
/// field, the raw result stream a load generator writes per request.
///
/// Lines which are not such a record are dropped individually; if no line
/// matches, the content as a whole is declined.
pub(crate) fn sniff(content: &str) -> Option<LatencySeries> {
    let mut values = Vec::new();
    let mut dropped = 0;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<StreamRecord>(line) {
            Ok(record) => values.push(units::ns_to_millis(record.latency)),
            Err(_) => dropped += 1,
        }
    }

    if values.is_empty() {
        return None;
    }
    if dropped > 0 {
        debug!("dropped {} lines without a latency record", dropped);
    }
    Some(LatencySeries::from_raw(values))
}
