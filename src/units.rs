// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Convert a single latency token to milliseconds.
///
/// Tokens are the display form of Go's `time.Duration`: a number with a
/// trailing unit (`ns`, `us`/`µs`, `ms`, `s`). A bare number is taken to
/// already be in milliseconds. Returns `None` when the token is not a
/// number after suffix stripping.
pub fn parse_millis(token: &str) -> Option<f64> {
    let token = token.trim();
    if let Some(number) = token.strip_suffix("ns") {
        number.trim().parse::<f64>().ok().map(|v| v / 1e6)
    } else if let Some(number) = token
        .strip_suffix("µs")
        .or_else(|| token.strip_suffix("us"))
    {
        number.trim().parse::<f64>().ok().map(|v| v / 1e3)
    } else if let Some(number) = token.strip_suffix("ms") {
        number.trim().parse::<f64>().ok()
    } else if let Some(number) = token.strip_suffix('s') {
        number.trim().parse::<f64>().ok().map(|v| v * 1e3)
    } else {
        token.parse::<f64>().ok()
    }
}

/// Convert a nanosecond quantity to milliseconds.
pub fn ns_to_millis(ns: f64) -> f64 {
    ns / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_suffixed() {
        assert_eq!(parse_millis("500000ns"), Some(0.5));
        assert_eq!(parse_millis("2.5us"), Some(0.0025));
        assert_eq!(parse_millis("2.5µs"), Some(0.0025));
        assert_eq!(parse_millis("3ms"), Some(3.0));
        assert_eq!(parse_millis("1.2s"), Some(1200.0));
    }

    #[test]
    fn parse_bare_number_is_millis() {
        assert_eq!(parse_millis("7"), Some(7.0));
        assert_eq!(parse_millis("0.25"), Some(0.25));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_millis(" 3ms "), Some(3.0));
        assert_eq!(parse_millis("4 ms"), Some(4.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_millis(""), None);
        assert_eq!(parse_millis("ms"), None);
        assert_eq!(parse_millis("fast"), None);
        assert_eq!(parse_millis("1.2.3ms"), None);
    }

    #[test]
    fn parse_keeps_non_finite_for_cleaning() {
        // non-finite tokens parse; the series cleaning stage drops them
        assert!(parse_millis("nan").map(f64::is_nan).unwrap_or(false));
        assert_eq!(parse_millis("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn parse_negative() {
        assert_eq!(parse_millis("-5ms"), Some(-5.0));
    }

    #[test]
    fn nanoseconds() {
        assert_eq!(ns_to_millis(500_000.0), 0.5);
        assert_eq!(ns_to_millis(1.1e7), 11.0);
    }
}
