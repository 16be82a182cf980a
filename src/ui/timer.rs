// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Start/end timer labels.

use crate::util::format::format_seconds;

/// Display a labelled time readout.
pub fn show(ui: &mut egui::Ui, caption: &str, seconds: f64) {
    ui.label(egui::RichText::new(caption).weak());
    ui.label(egui::RichText::new(format_seconds(seconds)).monospace());
}
