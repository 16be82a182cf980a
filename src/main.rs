// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seekbar - a draggable timeline bar
//!
//! A desktop application hosting a progress bar for choosing a playback
//! position and a time-bounded section of a media timeline.

mod app;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::SeekbarApp;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional options file as the first argument
    let options = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => io::config::load_options(&path)?,
        None => app::default_options(),
    };

    // Fail before opening a window if the options do not resolve
    let app = SeekbarApp::new(options).context("Invalid bar options")?;

    // Configure egui options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 320.0])
            .with_min_inner_size([480.0, 240.0])
            .with_title("Seekbar"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Seekbar",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
