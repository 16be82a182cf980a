// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Release-commit debounce.
//!
//! After a release (or a programmatic jump) the resulting time is held in a
//! single pending slot and handed to the registered callback once the delay
//! has passed without another release. Scheduling again replaces the pending
//! commit, so a burst of releases produces one call with the last value.

use std::fmt;
use std::time::{Duration, Instant};

/// Callback invoked with the committed time in seconds.
pub type CommitCallback = Box<dyn FnMut(f64)>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingCommit {
    pub seconds: f64,
    pub due: Instant,
}

pub struct CommitScheduler {
    delay: Duration,
    pending: Option<PendingCommit>,
    callback: CommitCallback,
}

impl fmt::Debug for CommitScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitScheduler")
            .field("delay", &self.delay)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

fn default_callback() -> CommitCallback {
    Box::new(|seconds| {
        log::warn!("Please set a callback as an action! (released at {:.2}s)", seconds)
    })
}

impl CommitScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            callback: default_callback(),
        }
    }

    /// Replace the callback used by future commits.
    pub fn register_callback(&mut self, callback: impl FnMut(f64) + 'static) {
        self.callback = Box::new(callback);
    }

    /// Schedule a commit of `seconds`, replacing any pending one.
    pub fn schedule(&mut self, seconds: f64, now: Instant) {
        if let Some(previous) = self.pending.replace(PendingCommit {
            seconds,
            due: now + self.delay,
        }) {
            log::debug!("Pending commit of {:.2}s superseded", previous.seconds);
        }
    }

    pub fn pending(&self) -> Option<PendingCommit> {
        self.pending
    }

    /// Drop the pending commit without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fire the pending commit if it is due. Returns the committed value.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let due = self.pending.filter(|p| now >= p.due)?;
        self.pending = None;

        log::info!("Committing slider position {:.2}s", due.seconds);
        (self.callback)(due.seconds);
        Some(due.seconds)
    }

    /// Time until the pending commit is due, for scheduling a host wake-up.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }
}
