// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Leading-edge throttle for bursty events such as window resizes.
//!
//! The first event of a burst passes immediately. Events arriving inside the
//! interval are coalesced into a single trailing run once the interval has
//! elapsed, so the last value of a burst is never lost.

use std::time::{Duration, Instant};

/// Default resize throttle interval.
pub const RESIZE_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_run: Option<Instant>,
    trailing: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            trailing: None,
        }
    }

    /// Offer a value. Returns it back if it may run now, otherwise keeps it
    /// as the pending trailing value (replacing any older one).
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.interval => {
                self.trailing = Some(value);
                None
            }
            _ => {
                self.last_run = Some(now);
                self.trailing = None;
                Some(value)
            }
        }
    }

    /// Release the trailing value once the interval since the last run elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let last = self.last_run?;
        if self.trailing.is_some() && now.saturating_duration_since(last) >= self.interval {
            self.last_run = Some(now);
            return self.trailing.take();
        }
        None
    }

    /// Time left until a pending trailing value can be released.
    pub fn time_until_trailing(&self, now: Instant) -> Option<Duration> {
        let last = self.last_run?;
        self.trailing.as_ref()?;
        Some(self.interval.saturating_sub(now.saturating_duration_since(last)))
    }

    pub fn cancel(&mut self) {
        self.trailing = None;
    }
}
