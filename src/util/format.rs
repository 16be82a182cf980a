// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time formatting for the timer labels.

/// Format seconds as `HHh MMm SSs`. Fractions are truncated, negatives show as zero.
pub fn format_seconds(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}h {:02}m {:02}s", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_single_digits() {
        assert_eq!(format_seconds(0.0), "00h 00m 00s");
        assert_eq!(format_seconds(9.0), "00h 00m 09s");
        assert_eq!(format_seconds(3723.9), "01h 02m 03s");
    }

    #[test]
    fn test_format_large_and_invalid() {
        assert_eq!(format_seconds(36000.0), "10h 00m 00s");
        assert_eq!(format_seconds(-5.0), "00h 00m 00s");
        assert_eq!(format_seconds(f64::NAN), "00h 00m 00s");
    }
}
