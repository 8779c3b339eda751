// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series::LatencySeries;
use crate::units;

/// Parses a delimited table with a latency column of unit-suffixed tokens.
///
/// The header row must name a `latency_ms` column (bare `latency` is
/// accepted as a fallback) or the content is declined. Rows whose latency
/// cell does not parse are dropped individually.
pub(crate) fn sniff(content: &str) -> Option<LatencySeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().ok()?.clone();
    let column = headers
        .iter()
        .position(|name| name == "latency_ms")
        .or_else(|| headers.iter().position(|name| name == "latency"))?;

    let mut values = Vec::new();
    let mut dropped = 0;
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                dropped += 1;
                continue;
            }
        };
        match record.get(column).and_then(units::parse_millis) {
            Some(value) => values.push(value),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {} rows with unparseable latency cells", dropped);
    }
    Some(LatencySeries::from_raw(values))
}
