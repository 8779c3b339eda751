// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions surfaced to the user. Failures local to a single
/// record are absorbed during ingest and estimation failures degrade to
/// the empirical fallback, so neither appears here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: input matches no known format (csv, json stream, summary)", path.display())]
    UnrecognizedFormat { path: PathBuf },
    #[error("no valid latency data found in {}", path.display())]
    NoSamples { path: PathBuf },
    #[error("failed to render plot: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_path() {
        let error = Error::NoSamples {
            path: PathBuf::from("latency_lc.csv"),
        };
        assert_eq!(
            error.to_string(),
            "no valid latency data found in latency_lc.csv"
        );
    }
}
