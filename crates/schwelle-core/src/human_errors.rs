// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the terminal.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::SchwelleError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (first line of output).
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.message, self.suggestion)
    }
}

/// Convert a `SchwelleError` into a `HumanError`.
pub fn humanize_error(err: &SchwelleError) -> HumanError {
    match err {
        SchwelleError::EmptyHistogram => HumanError {
            message: "The image has no pixels.".into(),
            suggestion: "Otsu's method needs at least one pixel. Pick a non-empty image.".into(),
        },

        SchwelleError::HistogramShape { expected, actual } => HumanError {
            message: "The intensity histogram has the wrong size.".into(),
            suggestion: format!("Expected {expected} buckets but got {actual}."),
        },

        SchwelleError::ThresholdOutOfRange { threshold, max } => HumanError {
            message: "The threshold is out of range.".into(),
            suggestion: format!("Use a threshold between 0 and {max} (got {threshold})."),
        },

        SchwelleError::InvalidIncrement(_) => HumanError {
            message: "The threshold increment must be at least 1.".into(),
            suggestion: "An increment of 1 checks every threshold and is recommended.".into(),
        },

        SchwelleError::ImageError(detail) => HumanError {
            message: "We couldn't read or write the image.".into(),
            suggestion: format!("Check that the file is a valid image and the output folder is writable. ({detail})"),
        },

        SchwelleError::InputClosed => HumanError {
            message: "Input ended before all questions were answered.".into(),
            suggestion: "Run the program again and answer each prompt.".into(),
        },

        SchwelleError::Config(detail) => HumanError {
            message: "The configuration file has an invalid setting.".into(),
            suggestion: format!("Fix schwelle.json or delete it to use the defaults. ({detail})"),
        },

        SchwelleError::Io(io_err) => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!("Check folder permissions and free disk space. ({io_err})"),
        },

        SchwelleError::Serialization(detail) => HumanError {
            message: "The configuration file is not valid JSON.".into(),
            suggestion: format!("Fix schwelle.json or delete it to use the defaults. ({detail})"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_histogram_is_explained() {
        let human = humanize_error(&SchwelleError::EmptyHistogram);
        assert!(human.message.contains("no pixels"));
    }

    #[test]
    fn detail_is_carried_into_suggestion() {
        let human = humanize_error(&SchwelleError::ImageError("bad png header".into()));
        assert!(human.suggestion.contains("bad png header"));
    }

    #[test]
    fn display_joins_message_and_suggestion() {
        let human = humanize_error(&SchwelleError::InputClosed);
        let text = human.to_string();
        assert!(text.starts_with(&human.message));
        assert!(text.ends_with(&human.suggestion));
    }
}
