// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tick markers along the bar.

use super::config::MarkerPolicy;

/// A tick at a fixed time offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub offset_seconds: f64,
    pub tall: bool,
    /// Pixel position for the geometry the marker was laid out with.
    pub x: f64,
}

/// Lay out markers for a timeline of `length` seconds.
///
/// One marker every `policy.interval` seconds up to and including `length`;
/// markers whose index is a multiple of `policy.tall_every` are tall.
pub fn layout(
    length: f64,
    pixels_per_second: f64,
    policy: MarkerPolicy,
) -> impl Iterator<Item = Marker> {
    // Tolerate rounding so a length that is an exact multiple keeps its last marker.
    let count = ((length / policy.interval) + 1e-9).floor() as usize + 1;

    (0..count).map(move |i| {
        let offset_seconds = i as f64 * policy.interval;
        Marker {
            offset_seconds,
            tall: i % policy.tall_every == 0,
            x: offset_seconds * pixels_per_second,
        }
    })
}

/// The markers currently placed on the bar.
#[derive(Debug, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Drop every existing marker and lay out a fresh set.
    pub fn regenerate(&mut self, length: f64, pixels_per_second: f64, policy: MarkerPolicy) {
        self.markers.clear();
        self.markers.extend(layout(length, pixels_per_second, policy));
        log::debug!("Regenerated {} markers", self.markers.len());
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hour_has_seven_markers() {
        let markers: Vec<Marker> = layout(3600.0, 0.2, MarkerPolicy::default()).collect();

        assert_eq!(markers.len(), 7);
        let offsets: Vec<f64> = markers.iter().map(|m| m.offset_seconds).collect();
        assert_eq!(offsets, vec![0.0, 600.0, 1200.0, 1800.0, 2400.0, 3000.0, 3600.0]);

        assert!(markers[0].tall);
        assert!(markers[6].tall);
        assert!(markers[1..6].iter().all(|m| !m.tall));
    }

    #[test]
    fn test_marker_pixel_positions() {
        let markers: Vec<Marker> = layout(3600.0, 0.5, MarkerPolicy::default()).collect();
        assert_eq!(markers[1].x, 300.0);
        assert_eq!(markers[6].x, 1800.0);
    }

    #[test]
    fn test_partial_interval_is_not_marked() {
        let markers: Vec<Marker> = layout(1500.0, 1.0, MarkerPolicy::default()).collect();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers.last().unwrap().offset_seconds, 1200.0);
    }

    #[test]
    fn test_short_timeline_has_origin_marker() {
        let markers: Vec<Marker> = layout(90.0, 4.0, MarkerPolicy::default()).collect();
        assert_eq!(markers.len(), 1);
        assert!(markers[0].tall);
    }

    #[test]
    fn test_custom_policy() {
        let policy = MarkerPolicy {
            interval: 60.0,
            tall_every: 5,
        };
        let markers: Vec<Marker> = layout(600.0, 1.0, policy).collect();
        assert_eq!(markers.len(), 11);
        let tall: Vec<f64> = markers
            .iter()
            .filter(|m| m.tall)
            .map(|m| m.offset_seconds)
            .collect();
        assert_eq!(tall, vec![0.0, 300.0, 600.0]);
    }

    #[test]
    fn test_regenerate_replaces_previous_markers() {
        let mut set = MarkerSet::default();
        set.regenerate(7200.0, 0.1, MarkerPolicy::default());
        set.regenerate(7200.0, 0.2, MarkerPolicy::default());

        assert_eq!(set.as_slice().len(), 13);
        let mut offsets: Vec<f64> = set.as_slice().iter().map(|m| m.offset_seconds).collect();
        offsets.dedup();
        assert_eq!(offsets.len(), 13);
        assert!(set.as_slice().iter().all(|m| m.x == m.offset_seconds * 0.2));
    }
}
