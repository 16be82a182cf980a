// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Duration window anchored at the handle.
//!
//! The window starts at the handle's time and spans a stepped duration. It
//! never extends past the end of the timeline: when the room after the start
//! is smaller than the requested duration, the duration shrinks to the largest
//! step-aligned value that still fits, and the shrunk value is what the
//! control shows from then on.

use super::config::DurationSliderConfig;

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationWindow {
    start: f64,
    duration: f64,
    config: DurationSliderConfig,
}

impl DurationWindow {
    pub fn new(config: DurationSliderConfig, length: f64) -> Self {
        let mut window = Self {
            start: 0.0,
            duration: config.value,
            config,
        };
        window.set_duration(config.value, length);
        window
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    pub fn config(&self) -> DurationSliderConfig {
        self.config
    }

    /// Apply a duration chosen on the stepped control. Returns the value to
    /// reflect back to the control.
    pub fn set_duration(&mut self, requested: f64, length: f64) -> f64 {
        let snapped = self.snap(requested);
        if snapped != requested {
            log::debug!("Duration {} snapped to {}", requested, snapped);
        }
        self.duration = self.fit(snapped, length);
        if self.duration < snapped {
            log::debug!(
                "Duration {} clamped to {} to stay within {}s",
                snapped,
                self.duration,
                length
            );
        }
        self.duration
    }

    /// Move the window to start at the handle's time, refitting the duration.
    pub fn set_start(&mut self, start: f64, length: f64) {
        self.start = start.clamp(0.0, length);
        self.duration = self.fit(self.duration, length);
    }

    /// Clamp into `[min, max]` and round onto the step grid anchored at `min`.
    fn snap(&self, value: f64) -> f64 {
        let DurationSliderConfig { step, min, max, .. } = self.config;
        if !value.is_finite() {
            return min;
        }
        let clamped = value.clamp(min, max);
        let mut snapped = min + ((clamped - min) / step).round() * step;
        if snapped > max + EPSILON {
            snapped -= step;
        }
        snapped.max(min)
    }

    /// Largest step-aligned duration not above `duration` that fits after `start`.
    fn fit(&self, duration: f64, length: f64) -> f64 {
        let room = (length - self.start).max(0.0);
        if duration <= room + EPSILON {
            return duration;
        }

        let DurationSliderConfig { step, min, .. } = self.config;
        if room + EPSILON < min {
            // Not even the minimum fits; the timeline end wins.
            return room;
        }
        min + (((room - min) / step) + EPSILON).floor() * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(step: f64, min: f64, max: f64, value: f64) -> DurationSliderConfig {
        DurationSliderConfig {
            step,
            min,
            max,
            value,
        }
    }

    #[test]
    fn test_clamps_to_largest_step_that_fits() {
        let mut window = DurationWindow::new(config(30.0, 0.0, 600.0, 30.0), 1000.0);
        window.set_start(950.0, 1000.0);

        assert_eq!(window.set_duration(100.0, 1000.0), 30.0);
        assert_eq!(window.start(), 950.0);
        assert_eq!(window.end(), 980.0);
    }

    #[test]
    fn test_step_grid_is_anchored_at_min() {
        let mut window = DurationWindow::new(config(30.0, 30.0, 600.0, 30.0), 1000.0);
        window.set_start(950.0, 1000.0);
        assert_eq!(window.set_duration(100.0, 1000.0), 30.0);

        window.set_start(0.0, 1000.0);
        assert_eq!(window.set_duration(100.0, 1000.0), 90.0);
        assert_eq!(window.set_duration(104.0, 1000.0), 90.0);
        assert_eq!(window.set_duration(106.0, 1000.0), 120.0);
    }

    #[test]
    fn test_out_of_range_requests_clamp_silently() {
        let mut window = DurationWindow::new(config(30.0, 30.0, 600.0, 60.0), 3600.0);
        assert_eq!(window.set_duration(-10.0, 3600.0), 30.0);
        assert_eq!(window.set_duration(9999.0, 3600.0), 600.0);
        assert_eq!(window.set_duration(f64::NAN, 3600.0), 30.0);
    }

    #[test]
    fn test_max_off_grid_stays_within_max() {
        let mut window = DurationWindow::new(config(30.0, 0.0, 100.0, 30.0), 3600.0);
        assert_eq!(window.set_duration(100.0, 3600.0), 90.0);
    }

    #[test]
    fn test_moving_start_refits_duration() {
        let mut window = DurationWindow::new(config(60.0, 60.0, 1200.0, 600.0), 3600.0);
        assert_eq!(window.duration(), 600.0);

        window.set_start(3300.0, 3600.0);
        assert_eq!(window.duration(), 300.0);
        assert!(window.end() <= 3600.0);

        window.set_start(1000.0, 3600.0);
        assert_eq!(window.duration(), 300.0);
        assert_eq!(window.end(), 1300.0);
    }

    #[test]
    fn test_window_never_exceeds_length() {
        let mut window = DurationWindow::new(config(30.0, 30.0, 900.0, 900.0), 1000.0);
        let mut start = 0.0;
        while start <= 1000.0 {
            window.set_start(start, 1000.0);
            assert!(window.end() <= 1000.0 + 1e-9, "start={start} end={}", window.end());
            start += 7.5;
        }
    }

    #[test]
    fn test_room_below_min_uses_remaining_room() {
        let mut window = DurationWindow::new(config(30.0, 60.0, 600.0, 120.0), 1000.0);
        window.set_start(990.0, 1000.0);
        assert_eq!(window.duration(), 10.0);
        assert_eq!(window.end(), 1000.0);
    }
}
