// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Schwelle binarizer.

use serde::{Deserialize, Serialize};

/// Number of distinct intensity levels in an 8-bit grayscale image.
pub const INTENSITY_LEVELS: usize = 256;

/// Largest 8-bit intensity; the default upper bound of the threshold search.
pub const MAX_INTENSITY: usize = INTENSITY_LEVELS - 1;

/// How the binarization threshold is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    /// The user types the threshold directly.
    Manual,
    /// The threshold is computed from the histogram via Otsu's method.
    Otsu,
}

impl ThresholdMode {
    /// Short label used in output filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Otsu => "otsu",
        }
    }

    /// Map a menu choice ("1" or "2") to a mode.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Manual),
            "2" => Some(Self::Otsu),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(ThresholdMode::from_choice("1"), Some(ThresholdMode::Manual));
        assert_eq!(ThresholdMode::from_choice(" 2\n"), Some(ThresholdMode::Otsu));
        assert_eq!(ThresholdMode::from_choice("3"), None);
        assert_eq!(ThresholdMode::from_choice(""), None);
    }

    #[test]
    fn labels_match_filenames() {
        assert_eq!(ThresholdMode::Manual.to_string(), "manual");
        assert_eq!(ThresholdMode::Otsu.label(), "otsu");
    }
}
