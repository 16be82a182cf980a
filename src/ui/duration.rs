// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stepped duration control for the section anchored at the handle.

use crate::models::progress_bar::ProgressBar;
use crate::util::format::format_seconds;

/// Display the duration slider. The bar's clamped value is shown back.
pub fn show(ui: &mut egui::Ui, bar: &mut ProgressBar) {
    let window = *bar.duration_window();
    let config = window.config();
    let mut value = window.duration();

    ui.horizontal(|ui| {
        ui.label("Duration:");
        let response = ui.add(
            egui::Slider::new(&mut value, config.min..=config.max)
                .step_by(config.step)
                .custom_formatter(|v, _| format_seconds(v)),
        );
        if response.changed() {
            let applied = bar.set_duration(value);
            if applied != value {
                log::debug!("Duration control reflected back to {:.0}s", applied);
            }
        }
    });
}
