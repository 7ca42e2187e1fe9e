// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchwelleError};

/// Directory layout and plot settings for a binarization session.
///
/// Every field has a default, so a partial JSON file only overrides the keys
/// it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that image names entered at the prompt are resolved against.
    pub input_dir: PathBuf,
    /// Where binarized images are written.
    pub image_output_dir: PathBuf,
    /// Where histogram plots are written.
    pub plot_output_dir: PathBuf,
    /// Histogram plot width in pixels.
    pub plot_width: u32,
    /// Histogram plot height in pixels.
    pub plot_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("images"),
            image_output_dir: Path::new("output").join("images"),
            plot_output_dir: Path::new("output").join("plots"),
            plot_width: 640,
            plot_height: 480,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }

    /// Reject settings that cannot produce output.
    pub fn validate(&self) -> Result<()> {
        if self.plot_width == 0 || self.plot_height == 0 {
            return Err(SchwelleError::Config(format!(
                "plot dimensions must be non-zero, got {}x{}",
                self.plot_width, self.plot_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = AppConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("images"));
        assert_eq!(config.image_output_dir, PathBuf::from("output").join("images"));
        assert_eq!(config.plot_output_dir, PathBuf::from("output").join("plots"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = AppConfig::from_json(r#"{ "input_dir": "scans" }"#).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("scans"));
        assert_eq!(config.plot_width, 640);
        assert_eq!(config.plot_output_dir, AppConfig::default().plot_output_dir);
    }

    #[test]
    fn zero_plot_size_rejected() {
        let result = AppConfig::from_json(r#"{ "plot_width": 0 }"#);
        assert!(matches!(result, Err(SchwelleError::Config(_))));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let result = AppConfig::from_json("{ not json");
        assert!(matches!(result, Err(SchwelleError::Serialization(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AppConfig::load("/definitely/not/here/schwelle.json");
        assert!(matches!(result, Err(SchwelleError::Io(_))));
    }
}
