// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bar, handle, markers and duration overlay.
//!
//! Translates egui pointer interaction into `ProgressBar` events and paints
//! the state it reports back. No bar state lives here.

use std::time::Instant;

use crate::models::drag::ClickTarget;
use crate::models::progress_bar::ProgressBar;

const TALL_MARKER_RATIO: f32 = 0.6;
const SHORT_MARKER_RATIO: f32 = 0.3;

/// Display the bar and route pointer input to it.
pub fn show(ui: &mut egui::Ui, bar: &mut ProgressBar, now: Instant) -> egui::Response {
    let height = bar.config().bar_height;
    let (bar_rect, bar_response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), height),
        egui::Sense::click(),
    );

    bar.layout(bar_rect.width() as f64, now);

    let handle_rect = handle_rect(bar, bar_rect);
    let handle_response = ui.interact(
        handle_rect,
        bar_response.id.with("handle"),
        egui::Sense::drag(),
    );

    handle_input(bar, &bar_response, &handle_response, bar_rect, handle_rect, now);

    if ui.is_rect_visible(bar_rect) {
        paint(ui.painter(), bar, bar_rect, handle_response.hovered() || bar.is_dragging());
    }

    if bar.is_capturing_pointer() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if handle_response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    bar_response
}

fn handle_rect(bar: &ProgressBar, bar_rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(bar_rect.min.x + bar.slider_left() as f32, bar_rect.min.y),
        egui::vec2(bar.slider_width() as f32, bar_rect.height()),
    )
}

fn handle_input(
    bar: &mut ProgressBar,
    bar_response: &egui::Response,
    handle_response: &egui::Response,
    bar_rect: egui::Rect,
    handle_rect: egui::Rect,
    now: Instant,
) {
    if handle_response.drag_started() {
        if let Some(pos) = handle_response.interact_pointer_pos() {
            bar.pointer_down(pos.x as f64);
        }
    }

    // egui keeps reporting the drag after the pointer leaves the handle.
    if handle_response.dragged() {
        if let Some(pos) = handle_response.interact_pointer_pos() {
            bar.pointer_move(pos.x as f64);
        }
    }

    if handle_response.drag_stopped() {
        bar.pointer_up(now);
    }

    if bar_response.clicked() {
        if let Some(pos) = bar_response.interact_pointer_pos() {
            let target = if handle_rect.contains(pos) {
                ClickTarget::Handle
            } else {
                ClickTarget::Bar
            };
            bar.click(pos.x as f64, bar_rect.min.x as f64, target, now);
        }
    }
}

fn paint(painter: &egui::Painter, bar: &ProgressBar, bar_rect: egui::Rect, highlight: bool) {
    let config = bar.config();
    painter.rect_filled(bar_rect, 2.0, config.bar_color);

    // Markers
    let marker_color = egui::Color32::from_black_alpha(140);
    for marker in bar.markers() {
        let ratio = if marker.tall {
            TALL_MARKER_RATIO
        } else {
            SHORT_MARKER_RATIO
        };
        let x = bar_rect.min.x + marker.x as f32;
        painter.line_segment(
            [
                egui::pos2(x, bar_rect.max.y - bar_rect.height() * ratio),
                egui::pos2(x, bar_rect.max.y),
            ],
            egui::Stroke::new(1.0, marker_color),
        );
    }

    // Duration window, anchored at the handle
    let window = bar.duration_window();
    if let (Some(start), Some(end)) = (
        bar.timeline().pixels_from_time(window.start()),
        bar.timeline().pixels_from_time(window.end()),
    ) {
        let section = egui::Rect::from_min_max(
            egui::pos2(bar_rect.min.x + start as f32, bar_rect.min.y),
            egui::pos2(bar_rect.min.x + end as f32, bar_rect.max.y),
        );
        painter.rect_filled(section, 0.0, config.slider_color.gamma_multiply(0.35));
    }

    // Handle
    let handle = handle_rect(bar, bar_rect);
    painter.rect_filled(handle, 2.0, config.slider_color);
    if highlight {
        painter.rect_stroke(handle, 2.0, egui::Stroke::new(1.5, egui::Color32::WHITE));
    }
}
