// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bar options files.
//!
//! This module loads and saves `BarOptions` in YAML and JSON formats. The
//! format is picked from the file extension.

use crate::models::config::BarOptions;
use anyhow::{bail, Context, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

pub fn parse_options(text: &str, format: Format) -> Result<BarOptions> {
    let options = match format {
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Json => serde_json::from_str(text)?,
    };
    Ok(options)
}

/// Load bar options from a YAML or JSON file.
pub fn load_options(path: &Path) -> Result<BarOptions> {
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options from {}", path.display()))?;
    let options = parse_options(&text, format)
        .with_context(|| format!("Failed to parse options in {}", path.display()))?;
    log::info!("Loaded bar options from {}", path.display());
    Ok(options)
}

/// Save bar options to a YAML or JSON file.
pub fn save_options(options: &BarOptions, path: &Path) -> Result<()> {
    let text = match Format::from_path(path)? {
        Format::Yaml => serde_yaml::to_string(options)?,
        Format::Json => serde_json::to_string_pretty(options)?,
    };
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write options to {}", path.display()))?;
    log::info!("Saved bar options to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("bar.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("bar.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("bar.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("bar.toml")).is_err());
        assert!(Format::from_path(Path::new("bar")).is_err());
    }

    #[test]
    fn test_parse_yaml_options() {
        let yaml = "\
container: timeline
length: 7200
barColor: \"#336699\"
durationSlider:
  step: 60
  max: 1800
";
        let options = parse_options(yaml, Format::Yaml).unwrap();
        assert_eq!(options.container.as_deref(), Some("timeline"));
        assert_eq!(options.length, Some(7200.0));
        assert_eq!(options.bar_color.as_deref(), Some("#336699"));

        let slider = options.duration_slider.unwrap();
        assert_eq!(slider.step, Some(60.0));
        assert_eq!(slider.max, Some(1800.0));
        assert_eq!(slider.min, None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_options("{ \"length\": ", Format::Json).is_err());
    }

    #[test]
    fn test_save_then_load_json() {
        let path: PathBuf = std::env::temp_dir()
            .join(format!("seekbar-options-{}.json", std::process::id()));
        let mut options = BarOptions::new("timeline", 5400.0);
        options.delay_time = Some(2500);

        save_options(&options, &path).unwrap();
        let loaded = load_options(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_options(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.yaml"));
    }
}
