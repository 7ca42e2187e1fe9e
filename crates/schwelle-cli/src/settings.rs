// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Optional JSON configuration in the working directory.

use std::path::Path;

use schwelle_core::AppConfig;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "schwelle.json";

/// Load `path`, falling back to defaults when it is absent or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return AppConfig::default();
    }
    match AppConfig::load(path) {
        Ok(config) => {
            debug!(path = %path.display(), ?config, "Config loaded");
            config
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Ignoring unusable config file");
            AppConfig::default()
        }
    }
}
