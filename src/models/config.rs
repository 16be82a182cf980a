// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bar configuration.
//!
//! `BarOptions` is the loose, serde-friendly shape that comes from an options
//! file or from the host. `BarOptions::resolve` validates it once against the
//! host's known containers and produces an immutable `BarConfig`.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BAR_COLOR: &str = "#22ff88";
pub const DEFAULT_SLIDER_COLOR: &str = "#44aa44";
pub const DEFAULT_BAR_HEIGHT: f32 = 50.0;
pub const DEFAULT_SLIDER_WIDTH: f32 = 24.0;
pub const DEFAULT_DELAY_MS: u64 = 3000;

/// Errors raised while resolving bar options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no container specified")]
    MissingContainer,
    #[error("container '{0}' not found")]
    ContainerNotFound(String),
    #[error("timeline length is required")]
    MissingLength,
    #[error("timeline length must be positive, got {0}")]
    InvalidLength(f64),
    #[error("invalid color for {field}: '{value}'")]
    InvalidColor { field: &'static str, value: String },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("duration slider step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("duration slider min ({min}) is greater than max ({max})")]
    MinGreaterThanMax { min: f64, max: f64 },
    #[error("duration slider min must not be negative, got {0}")]
    NegativeMin(f64),
    #[error("marker {0} must be positive")]
    InvalidMarkerPolicy(&'static str),
}

/// Raw duration slider options; every field defaults independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DurationSliderOptions {
    pub step: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<f64>,
}

/// Raw marker options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerOptions {
    pub interval: Option<f64>,
    pub tall_every: Option<usize>,
}

/// Options as provided by the host, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    pub container: Option<String>,
    pub length: Option<f64>,
    pub bar_color: Option<String>,
    pub slider_color: Option<String>,
    pub bar_height: Option<f32>,
    pub slider_width: Option<f32>,
    /// Debounce delay in milliseconds.
    pub delay_time: Option<u64>,
    pub duration_slider: Option<DurationSliderOptions>,
    pub markers: Option<MarkerOptions>,
}

/// Validated duration slider settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationSliderConfig {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl Default for DurationSliderConfig {
    fn default() -> Self {
        Self {
            step: 30.0,
            min: 30.0,
            max: 3600.0,
            value: 360.0,
        }
    }
}

/// Validated marker policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPolicy {
    /// Seconds between two markers.
    pub interval: f64,
    /// Every n-th marker (0-indexed) is tall.
    pub tall_every: usize,
}

impl Default for MarkerPolicy {
    fn default() -> Self {
        Self {
            interval: 600.0,
            tall_every: 6,
        }
    }
}

/// Immutable configuration of one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub container: String,
    pub length: f64,
    pub bar_color: egui::Color32,
    pub slider_color: egui::Color32,
    pub bar_height: f32,
    pub slider_width: f32,
    pub delay: Duration,
    pub duration_slider: DurationSliderConfig,
    pub markers: MarkerPolicy,
}

impl BarOptions {
    /// Options for a bar of `length` seconds in `container`, everything else defaulted.
    pub fn new(container: impl Into<String>, length: f64) -> Self {
        Self {
            container: Some(container.into()),
            length: Some(length),
            ..Default::default()
        }
    }

    /// Validate the options against the containers the host knows about.
    pub fn resolve(&self, containers: &[&str]) -> Result<BarConfig, ConfigError> {
        let container = match self.container.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingContainer),
            Some(name) => name,
        };
        if !containers.contains(&container) {
            return Err(ConfigError::ContainerNotFound(container.to_string()));
        }

        let length = self.length.ok_or(ConfigError::MissingLength)?;
        if !length.is_finite() || length <= 0.0 {
            return Err(ConfigError::InvalidLength(length));
        }

        let bar_color = parse_color(
            "barColor",
            self.bar_color.as_deref().unwrap_or(DEFAULT_BAR_COLOR),
        )?;
        let slider_color = parse_color(
            "sliderColor",
            self.slider_color.as_deref().unwrap_or(DEFAULT_SLIDER_COLOR),
        )?;

        let bar_height = positive("barHeight", self.bar_height.unwrap_or(DEFAULT_BAR_HEIGHT))?;
        let slider_width = positive(
            "sliderWidth",
            self.slider_width.unwrap_or(DEFAULT_SLIDER_WIDTH),
        )?;

        let delay_ms = self.delay_time.unwrap_or(DEFAULT_DELAY_MS);
        if delay_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "delayTime",
                value: 0.0,
            });
        }

        Ok(BarConfig {
            container: container.to_string(),
            length,
            bar_color,
            slider_color,
            bar_height,
            slider_width,
            delay: Duration::from_millis(delay_ms),
            duration_slider: resolve_duration_slider(self.duration_slider.as_ref())?,
            markers: resolve_markers(self.markers.as_ref())?,
        })
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<egui::Color32, ConfigError> {
    egui::Color32::from_hex(value).map_err(|_| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive {
            field,
            value: value as f64,
        })
    }
}

fn resolve_duration_slider(
    options: Option<&DurationSliderOptions>,
) -> Result<DurationSliderConfig, ConfigError> {
    let defaults = DurationSliderConfig::default();
    let Some(options) = options else {
        return Ok(defaults);
    };

    let step = options.step.unwrap_or(defaults.step);
    if !step.is_finite() || step <= 0.0 {
        return Err(ConfigError::InvalidStep(step));
    }

    let min = options.min.unwrap_or(defaults.min);
    if min < 0.0 {
        return Err(ConfigError::NegativeMin(min));
    }
    let max = options.max.unwrap_or(defaults.max);
    if min > max {
        return Err(ConfigError::MinGreaterThanMax { min, max });
    }

    // An out-of-range initial value is clamped rather than rejected.
    let requested = options.value.unwrap_or(defaults.value);
    let value = requested.clamp(min, max);
    if value != requested {
        log::warn!("Duration slider value {} clamped to {}", requested, value);
    }

    Ok(DurationSliderConfig {
        step,
        min,
        max,
        value,
    })
}

fn resolve_markers(options: Option<&MarkerOptions>) -> Result<MarkerPolicy, ConfigError> {
    let defaults = MarkerPolicy::default();
    let Some(options) = options else {
        return Ok(defaults);
    };

    let interval = options.interval.unwrap_or(defaults.interval);
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ConfigError::InvalidMarkerPolicy("interval"));
    }
    let tall_every = options.tall_every.unwrap_or(defaults.tall_every);
    if tall_every == 0 {
        return Err(ConfigError::InvalidMarkerPolicy("tallEvery"));
    }

    Ok(MarkerPolicy {
        interval,
        tall_every,
    })
}
