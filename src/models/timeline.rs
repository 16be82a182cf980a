// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timeline geometry.
//!
//! Holds the fixed timeline length and the bar's rendered width, and caches
//! the pixel/second ratios derived from them. The ratios only exist once the
//! bar has been laid out with a positive width.

use crate::util::geometry;

/// Cached conversion ratios for one bar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub pixels_per_second: f64,
    pub seconds_per_pixel: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    length: f64,
    width: f64,
    ratios: Option<Ratios>,
}

impl Timeline {
    /// Create an unlaid-out timeline of `length` seconds.
    pub fn new(length: f64) -> Self {
        Self {
            length,
            width: 0.0,
            ratios: None,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether a positive width has been measured.
    pub fn is_ready(&self) -> bool {
        self.ratios.is_some()
    }

    pub fn ratios(&self) -> Option<Ratios> {
        self.ratios
    }

    /// Record a new rendered width and recompute the ratios.
    ///
    /// Returns `true` if the width actually changed.
    pub fn set_width(&mut self, width: f64) -> bool {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width == self.width && (self.ratios.is_some() || width == 0.0) {
            return false;
        }

        self.width = width;
        self.ratios = if width > 0.0 {
            Some(Ratios {
                pixels_per_second: width / self.length,
                seconds_per_pixel: self.length / width,
            })
        } else {
            None
        };

        log::debug!(
            "Timeline geometry recomputed: width={:.1}px length={:.1}s ratios={:?}",
            self.width,
            self.length,
            self.ratios
        );
        true
    }

    pub fn time_from_pixels(&self, px: f64) -> Option<f64> {
        self.ratios
            .map(|r| geometry::time_from_pixels(px, r.seconds_per_pixel))
    }

    pub fn pixels_from_time(&self, seconds: f64) -> Option<f64> {
        self.ratios
            .map(|r| geometry::pixels_from_time(seconds, r.pixels_per_second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_before_layout() {
        let timeline = Timeline::new(3600.0);
        assert!(!timeline.is_ready());
        assert_eq!(timeline.time_from_pixels(10.0), None);
        assert_eq!(timeline.pixels_from_time(10.0), None);
    }

    #[test]
    fn test_zero_width_stays_not_ready() {
        let mut timeline = Timeline::new(3600.0);
        assert!(!timeline.set_width(0.0));
        assert!(!timeline.is_ready());
    }

    #[test]
    fn test_ratios_product_is_one() {
        let mut timeline = Timeline::new(3600.0);
        for width in [1.0, 360.0, 777.7, 1920.0] {
            timeline.set_width(width);
            let r = timeline.ratios().unwrap();
            assert!((r.pixels_per_second * r.seconds_per_pixel - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_roundtrip_for_many_widths_and_lengths() {
        for length in [1.0, 59.0, 3600.0, 86400.0] {
            for width in [13.0, 640.0, 2560.0] {
                let mut timeline = Timeline::new(length);
                timeline.set_width(width);
                for px in [0.0, 1.5, width / 3.0, width] {
                    let seconds = timeline.time_from_pixels(px).unwrap();
                    let back = timeline.pixels_from_time(seconds).unwrap();
                    assert!((back - px).abs() < 1e-6, "length={length} width={width} px={px}");
                }
            }
        }
    }

    #[test]
    fn test_resize_recomputes_ratios() {
        let mut timeline = Timeline::new(3600.0);
        timeline.set_width(720.0);
        assert_eq!(timeline.ratios().unwrap().pixels_per_second, 0.2);

        assert!(timeline.set_width(1440.0));
        assert_eq!(timeline.ratios().unwrap().pixels_per_second, 0.4);
        assert!(!timeline.set_width(1440.0));
    }

    #[test]
    fn test_shrinking_to_zero_drops_ratios() {
        let mut timeline = Timeline::new(3600.0);
        timeline.set_width(720.0);
        assert!(timeline.set_width(0.0));
        assert!(!timeline.is_ready());
    }
}
