// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the conversions between pixel offsets along the bar
//! and time in seconds, plus the clamping rule for the handle offset.

/// Convert a pixel offset to seconds using a cached seconds-per-pixel ratio.
pub fn time_from_pixels(px: f64, seconds_per_pixel: f64) -> f64 {
    px * seconds_per_pixel
}

/// Convert seconds to a pixel offset using a cached pixels-per-second ratio.
pub fn pixels_from_time(seconds: f64, pixels_per_second: f64) -> f64 {
    seconds * pixels_per_second
}

/// Largest valid left offset for a handle of `handle_width` inside a bar of
/// `bar_width`. Never negative, even when the handle is wider than the bar.
pub fn max_left(bar_width: f64, handle_width: f64) -> f64 {
    (bar_width - handle_width).max(0.0)
}

/// Clamp a candidate left offset into `[0, bar_width - handle_width]`.
pub fn clamp_offset(candidate: f64, bar_width: f64, handle_width: f64) -> f64 {
    if candidate.is_nan() {
        return 0.0;
    }
    candidate.clamp(0.0, max_left(bar_width, handle_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_time_roundtrip() {
        let width = 1280.0;
        let length = 7200.0;
        let pps = width / length;
        let spp = length / width;

        for px in [0.0, 1.0, 333.3, 640.0, 1279.5, 1280.0] {
            let back = pixels_from_time(time_from_pixels(px, spp), pps);
            assert!((back - px).abs() < 0.0001, "{px} came back as {back}");
        }
    }

    #[test]
    fn test_clamp_offset_bounds() {
        assert_eq!(clamp_offset(-15.0, 800.0, 24.0), 0.0);
        assert_eq!(clamp_offset(900.0, 800.0, 24.0), 776.0);
        assert_eq!(clamp_offset(400.0, 800.0, 24.0), 400.0);
        assert_eq!(clamp_offset(f64::NAN, 800.0, 24.0), 0.0);
    }

    #[test]
    fn test_handle_wider_than_bar() {
        assert_eq!(max_left(10.0, 24.0), 0.0);
        assert_eq!(clamp_offset(5.0, 10.0, 24.0), 0.0);
    }
}
