// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Handle drag state machine.
//!
//! `Idle -> Pressed -> Dragging -> Idle`. While a session is active the
//! machine holds a pointer-capture subscription, so moves and the release are
//! received even when the pointer leaves the handle. Releasing the
//! subscription is idempotent.

use crate::util::geometry;

/// Transient state captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer X at press time.
    pub start_x: f64,
    /// Handle left offset at press time.
    pub start_left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Pressed(DragSession),
    Dragging(DragSession),
}

/// Token for an active pointer-capture subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureHandle(u64);

/// What was hit by a click on the bar area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Bar,
    Handle,
}

#[derive(Debug)]
pub struct DragMachine {
    state: DragState,
    capture: Option<CaptureHandle>,
    next_capture: u64,
}

impl Default for DragMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DragMachine {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            capture: None,
            next_capture: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Whether a pointer-capture subscription is currently held.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Pointer pressed on the handle.
    pub fn press(&mut self, pointer_x: f64, current_left: f64) {
        // A press without a matching release must not leave the old capture behind.
        self.release_capture();

        self.next_capture += 1;
        self.capture = Some(CaptureHandle(self.next_capture));
        self.state = DragState::Pressed(DragSession {
            start_x: pointer_x,
            start_left: current_left,
        });
        log::debug!("Handle pressed at x={:.1}, left={:.1}", pointer_x, current_left);
    }

    /// Pointer moved. Returns the new clamped left offset while a session is active.
    pub fn move_to(&mut self, pointer_x: f64, bar_width: f64, handle_width: f64) -> Option<f64> {
        let session = match self.state {
            DragState::Idle => return None,
            DragState::Pressed(session) | DragState::Dragging(session) => session,
        };
        self.state = DragState::Dragging(session);

        let delta = pointer_x - session.start_x;
        Some(geometry::clamp_offset(
            session.start_left + delta,
            bar_width,
            handle_width,
        ))
    }

    /// Pointer released. Returns the finished session, if there was one.
    pub fn release(&mut self) -> Option<DragSession> {
        self.release_capture();
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Pressed(session) | DragState::Dragging(session) => {
                log::debug!("Handle released");
                Some(session)
            }
        }
    }

    /// Abort any session without reporting it (teardown).
    pub fn reset(&mut self) {
        self.release_capture();
        self.state = DragState::Idle;
    }

    fn release_capture(&mut self) {
        if let Some(CaptureHandle(id)) = self.capture.take() {
            log::debug!("Pointer capture {} released", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: f64 = 800.0;
    const HANDLE: f64 = 24.0;

    #[test]
    fn test_press_move_release_cycle() {
        let mut drag = DragMachine::new();
        assert!(drag.is_idle());

        drag.press(100.0, 50.0);
        assert!(matches!(drag.state(), DragState::Pressed(_)));
        assert!(drag.is_capturing());

        assert_eq!(drag.move_to(130.0, BAR, HANDLE), Some(80.0));
        assert!(matches!(drag.state(), DragState::Dragging(_)));

        let session = drag.release().unwrap();
        assert_eq!(session.start_left, 50.0);
        assert!(drag.is_idle());
        assert!(!drag.is_capturing());
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut drag = DragMachine::new();
        assert_eq!(drag.move_to(500.0, BAR, HANDLE), None);
    }

    #[test]
    fn test_moves_are_clamped_for_every_position() {
        let mut drag = DragMachine::new();
        drag.press(400.0, 300.0);

        let mut x = -2000.0;
        while x <= 3000.0 {
            let left = drag.move_to(x, BAR, HANDLE).unwrap();
            assert!((0.0..=BAR - HANDLE).contains(&left), "x={x} produced {left}");
            x += 37.0;
        }
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut drag = DragMachine::new();
        drag.press(0.0, 0.0);
        assert!(drag.release().is_some());
        assert!(drag.release().is_none());
        assert!(!drag.is_capturing());
    }

    #[test]
    fn test_second_press_replaces_capture() {
        let mut drag = DragMachine::new();
        drag.press(10.0, 0.0);
        drag.press(20.0, 5.0);

        assert!(drag.is_capturing());
        assert_eq!(drag.move_to(30.0, BAR, HANDLE), Some(15.0));

        drag.release();
        assert!(!drag.is_capturing());
    }

    #[test]
    fn test_reset_drops_session() {
        let mut drag = DragMachine::new();
        drag.press(10.0, 0.0);
        drag.reset();
        assert!(drag.is_idle());
        assert!(!drag.is_capturing());
        assert!(drag.release().is_none());
    }
}
