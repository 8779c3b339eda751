// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod stream;
mod summary;
mod table;

use crate::error::{Error, Result};
use crate::series::LatencySeries;

use serde_derive::*;

use std::path::Path;

/// The closed set of input formats the tool understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// A single JSON object carrying percentile summary statistics.
    Summary,
    /// Newline-delimited JSON records with a nanosecond `latency` field.
    #[serde(rename = "json")]
    Stream,
    /// A delimited table with a `latency_ms` column of suffixed tokens.
    #[serde(rename = "csv")]
    Table,
}

/// Reads the file at `path` into a `LatencySeries`.
///
/// Without an explicit `format`, the variant parsers are tried in a fixed
/// priority order (summary, then record stream, then table); each either
/// claims the content or declines, and only when every parser declines is
/// the input reported as unrecognized. `seed` drives the synthesis of
/// samples on the summary path.
pub fn load(path: &Path, format: Option<Format>, seed: u64) -> Result<LatencySeries> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let series = match format {
        Some(Format::Summary) => summary::sniff(&content, seed),
        Some(Format::Stream) => stream::sniff(&content),
        Some(Format::Table) => table::sniff(&content),
        None => summary::sniff(&content, seed)
            .or_else(|| stream::sniff(&content))
            .or_else(|| table::sniff(&content)),
    };

    series.ok_or_else(|| Error::UnrecognizedFormat {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff_all(content: &str) -> Option<LatencySeries> {
        summary::sniff(content, 0)
            .or_else(|| stream::sniff(content))
            .or_else(|| table::sniff(content))
    }

    #[test]
    fn detect_table() {
        let series = sniff_all("latency_ms\n1ms\n2ms\n").unwrap();
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn detect_stream() {
        let series = sniff_all("{\"latency\": 1000000}\n{\"latency\": 2000000}\n").unwrap();
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn detect_summary() {
        let content = "{\"latencies\": {\"min\": 1e6, \"mean\": 5e6, \"max\": 2e7, \
                       \"50th\": 4e6, \"90th\": 9e6, \"95th\": 1.1e7, \"99th\": 1.8e7}, \
                       \"requests\": 4}";
        let series = sniff_all(content).unwrap();
        assert!(series.is_approximate());
        assert_eq!(series.min(), Some(1.0));
        assert_eq!(series.max(), Some(20.0));
    }

    #[test]
    fn every_parser_declines_unknown_content() {
        assert!(sniff_all("not a latency file\njust some text\n").is_none());
        assert!(sniff_all("").is_none());
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = load(Path::new("/nonexistent/latency.csv"), None, 0).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }
}
