// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Progress bar state.
//!
//! `ProgressBar` owns everything a single bar needs: the timeline geometry,
//! the handle offset, the drag state machine, the markers, the pending commit
//! and the duration window. It holds no rendering state; the UI layer feeds it
//! pointer events and widths and draws whatever it reports back.

use std::time::{Duration, Instant};

use super::commit::{CommitScheduler, PendingCommit};
use super::config::{BarConfig, BarOptions, ConfigError};
use super::drag::{ClickTarget, DragMachine};
use super::duration::DurationWindow;
use super::marker::{Marker, MarkerSet};
use super::timeline::Timeline;
use crate::util::geometry;
use crate::util::throttle::{Throttle, RESIZE_INTERVAL};

#[derive(Debug)]
pub struct ProgressBar {
    config: BarConfig,
    timeline: Timeline,
    /// Handle left offset in pixels.
    left: f64,
    drag: DragMachine,
    markers: MarkerSet,
    commit: CommitScheduler,
    duration: DurationWindow,
    resize: Throttle<f64>,
    /// Handle time to place once the bar has a width again.
    deferred_position: Option<f64>,
    /// Whether placing the deferred position also commits it.
    deferred_commit: bool,
    destroyed: bool,
}

impl ProgressBar {
    /// Resolve `options` against the host's containers and build the bar.
    pub fn new(options: &BarOptions, containers: &[&str]) -> Result<Self, ConfigError> {
        let config = options.resolve(containers)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: BarConfig) -> Self {
        log::info!(
            "Creating progress bar in '{}' for {:.0}s timeline",
            config.container,
            config.length
        );
        Self {
            timeline: Timeline::new(config.length),
            left: 0.0,
            drag: DragMachine::new(),
            markers: MarkerSet::default(),
            commit: CommitScheduler::new(config.delay),
            duration: DurationWindow::new(config.duration_slider, config.length),
            resize: Throttle::new(RESIZE_INTERVAL),
            deferred_position: None,
            deferred_commit: false,
            destroyed: false,
            config,
        }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn slider_left(&self) -> f64 {
        self.left
    }

    pub fn slider_width(&self) -> f64 {
        self.config.slider_width as f64
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    pub fn duration_window(&self) -> &DurationWindow {
        &self.duration
    }

    pub fn pending_commit(&self) -> Option<PendingCommit> {
        self.commit.pending()
    }

    pub fn is_dragging(&self) -> bool {
        !self.drag.is_idle()
    }

    pub fn is_capturing_pointer(&self) -> bool {
        self.drag.is_capturing()
    }

    /// Time in seconds encoded by the handle position.
    pub fn current_time(&self) -> f64 {
        self.timeline
            .time_from_pixels(self.left)
            .or(self.deferred_position)
            .unwrap_or(0.0)
    }

    /// Start of the selected section, for the start timer label.
    pub fn start_time(&self) -> f64 {
        self.duration.start()
    }

    /// End of the selected section, for the end timer label.
    pub fn end_time(&self) -> f64 {
        self.duration.end()
    }

    /// Register the callback fired after the handle settles.
    pub fn set_action_on_slider_release(&mut self, action: impl FnMut(f64) + 'static) {
        self.commit.register_callback(action);
    }

    /// Report the bar's rendered width.
    ///
    /// The first positive width is applied immediately. Later changes are
    /// resizes and go through the resize throttle.
    pub fn layout(&mut self, width: f64, now: Instant) {
        if self.destroyed {
            return;
        }
        if !self.timeline.is_ready() {
            self.apply_width(width, now);
        } else if width != self.timeline.width() {
            self.resize(width, now);
        }
    }

    /// Throttled resize: at most one recompute per interval, first event immediately.
    pub fn resize(&mut self, width: f64, now: Instant) {
        if self.destroyed {
            return;
        }
        if let Some(width) = self.resize.offer(width, now) {
            self.apply_width(width, now);
        }
    }

    /// Drive time-based work: trailing resizes and the pending commit.
    /// Returns the committed time if the callback fired.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        if let Some(width) = self.resize.poll(now) {
            self.apply_width(width, now);
        }
        self.commit.poll(now)
    }

    /// How long the host may sleep before `poll` has work to do.
    pub fn time_until_next_event(&self, now: Instant) -> Option<Duration> {
        match (
            self.commit.time_until_due(now),
            self.resize.time_until_trailing(now),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Pointer pressed on the handle.
    pub fn pointer_down(&mut self, pointer_x: f64) {
        if self.destroyed || !self.timeline.is_ready() {
            return;
        }
        self.drag.press(pointer_x, self.left);
    }

    /// Pointer moved anywhere while the handle is captured.
    pub fn pointer_move(&mut self, pointer_x: f64) {
        let bar_width = self.timeline.width();
        let handle_width = self.slider_width();
        if let Some(left) = self.drag.move_to(pointer_x, bar_width, handle_width) {
            self.set_left(left);
        }
    }

    /// Pointer released anywhere. Ends the drag and schedules the commit.
    pub fn pointer_up(&mut self, now: Instant) {
        if self.drag.release().is_some() && !self.destroyed {
            self.commit.schedule(self.current_time(), now);
        }
    }

    /// Click on the bar area. `pointer_x - bar_left` becomes the new handle
    /// offset unless the click landed on the handle itself.
    pub fn click(&mut self, pointer_x: f64, bar_left: f64, target: ClickTarget, now: Instant) {
        if self.destroyed || target == ClickTarget::Handle || !self.drag.is_idle() {
            return;
        }
        if !self.timeline.is_ready() {
            return;
        }

        let left = geometry::clamp_offset(
            pointer_x - bar_left,
            self.timeline.width(),
            self.slider_width(),
        );
        self.set_left(left);
        self.commit.schedule(self.current_time(), now);
    }

    /// Jump the handle to `seconds`, clamped to the bar, and schedule the commit.
    pub fn set_slider_at_position_in_secs(&mut self, seconds: f64, now: Instant) {
        if self.destroyed {
            return;
        }
        let Some(px) = self.timeline.pixels_from_time(seconds) else {
            log::debug!("Bar not laid out yet, deferring jump to {:.2}s", seconds);
            let seconds = if seconds.is_nan() { 0.0 } else { seconds };
            let seconds = seconds.clamp(0.0, self.timeline.length());
            self.deferred_position = Some(seconds);
            self.deferred_commit = true;
            self.duration.set_start(seconds, self.timeline.length());
            return;
        };

        let left = geometry::clamp_offset(px, self.timeline.width(), self.slider_width());
        self.set_left(left);
        self.commit.schedule(self.current_time(), now);
    }

    /// Change the section duration. Returns the value to show on the control.
    pub fn set_duration(&mut self, seconds: f64) -> f64 {
        self.duration.set_duration(seconds, self.timeline.length())
    }

    /// Tear down: cancel the pending commit and any drag, drop the markers.
    pub fn destroy(&mut self) {
        self.commit.cancel();
        self.drag.reset();
        self.resize.cancel();
        self.markers.clear();
        self.destroyed = true;
        log::info!("Progress bar in '{}' destroyed", self.config.container);
    }

    fn set_left(&mut self, left: f64) {
        self.left = left;
        let time = self.current_time();
        self.duration.set_start(time, self.timeline.length());
    }

    fn apply_width(&mut self, width: f64, now: Instant) {
        let time_before = self.timeline.time_from_pixels(self.left);
        if !self.timeline.set_width(width) {
            return;
        }

        let Some(ratios) = self.timeline.ratios() else {
            // Collapsed: park the handle's time until the next positive width.
            if self.deferred_position.is_none() {
                self.deferred_position = time_before;
            }
            self.markers.clear();
            return;
        };

        self.markers.regenerate(
            self.timeline.length(),
            ratios.pixels_per_second,
            self.config.markers,
        );

        // Keep the handle on the same time after a resize.
        let Some(seconds) = self.deferred_position.take().or(time_before) else {
            let left =
                geometry::clamp_offset(self.left, self.timeline.width(), self.slider_width());
            self.set_left(left);
            return;
        };
        let px = geometry::pixels_from_time(seconds, ratios.pixels_per_second);
        let left = geometry::clamp_offset(px, self.timeline.width(), self.slider_width());
        self.set_left(left);

        if std::mem::take(&mut self.deferred_commit) {
            self.commit.schedule(self.current_time(), now);
        }
    }
}
