// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module hosts one progress bar inside a named panel, wires its
//! release callback, and drives its timers from the frame loop.

use std::time::Instant;

use crate::models::config::{BarOptions, ConfigError};
use crate::models::progress_bar::ProgressBar;
use crate::ui::{bar, duration, timer};
use crate::util::format::format_seconds;

/// Panels a bar may be placed in, by container name.
pub const CONTAINERS: &[&str] = &["timeline", "header"];

/// Options used when no options file is given.
pub fn default_options() -> BarOptions {
    BarOptions::new("timeline", 7200.0)
}

/// Main application state.
pub struct SeekbarApp {
    /// Options the current bar was built from
    options: BarOptions,

    /// The hosted bar
    bar: ProgressBar,

    /// Last time value delivered to the release callback
    last_commit: Option<f64>,

    /// Value typed into the "jump to" field, in seconds
    jump_to: f64,

    /// Message from the last failed options load
    error_message: Option<String>,
}

impl SeekbarApp {
    /// Create the application. Fails if the options do not resolve.
    pub fn new(options: BarOptions) -> Result<Self, ConfigError> {
        let bar = build_bar(&options)?;
        Ok(Self {
            options,
            bar,
            last_commit: None,
            jump_to: 0.0,
            error_message: None,
        })
    }

    /// Replace the hosted bar with one built from `options`.
    fn replace_bar(&mut self, options: BarOptions) {
        match build_bar(&options) {
            Ok(new_bar) => {
                self.bar.destroy();
                self.bar = new_bar;
                self.options = options;
                self.last_commit = None;
                self.error_message = None;
            }
            Err(e) => {
                log::error!("Rejected bar options: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn load_options_file(&mut self, path: std::path::PathBuf) {
        match crate::io::config::load_options(&path) {
            Ok(options) => self.replace_bar(options),
            Err(e) => {
                log::error!("Failed to load options: {:#}", e);
                self.error_message = Some(format!("{:#}", e));
            }
        }
    }

    fn export_options_file(&self, path: std::path::PathBuf) {
        if let Err(e) = crate::io::config::save_options(&self.options, &path) {
            log::error!("Failed to export options: {:#}", e);
        }
    }

    fn show_bar_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.add_space(6.0);
        bar::show(ui, &mut self.bar, now);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            timer::show(ui, "Start", self.bar.start_time());
            ui.separator();
            timer::show(ui, "End", self.bar.end_time());
            ui.separator();
            duration::show(ui, &mut self.bar);
        });
        ui.add_space(4.0);
    }
}

fn build_bar(options: &BarOptions) -> Result<ProgressBar, ConfigError> {
    let mut bar = ProgressBar::new(options, CONTAINERS)?;
    bar.set_action_on_slider_release(|seconds| {
        log::info!("Slider settled at {}", format_seconds(seconds));
    });
    Ok(bar)
}

impl eframe::App for SeekbarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(seconds) = self.bar.poll(now) {
            self.last_commit = Some(seconds);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Options...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Options", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_options_file(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Export Options", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("seekbar.yaml")
                                .save_file()
                            {
                                self.export_options_file(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("seekbar.json")
                                .save_file()
                            {
                                self.export_options_file(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        let container = self.bar.config().container.clone();

        if container == "header" {
            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                self.show_bar_panel(ui, now);
            });
        } else {
            egui::TopBottomPanel::bottom("timeline").show(ctx, |ui| {
                self.show_bar_panel(ui, now);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Jump to:");
                ui.add(
                    egui::DragValue::new(&mut self.jump_to)
                        .speed(10.0)
                        .range(0.0..=self.bar.config().length)
                        .suffix(" s"),
                );
                if ui.button("Go").clicked() {
                    self.bar.set_slider_at_position_in_secs(self.jump_to, now);
                }
            });

            ui.separator();
            ui.label(format!("Position: {}", format_seconds(self.bar.current_time())));
            match self.last_commit {
                Some(seconds) => ui.label(format!("Last commit: {}", format_seconds(seconds))),
                None => ui.label(egui::RichText::new("No commit yet").weak()),
            };
            if self.bar.pending_commit().is_some() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Waiting for the handle to settle...");
                });
            }

            if let Some(ref message) = self.error_message {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });

        if let Some(wait) = self.bar.time_until_next_event(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
