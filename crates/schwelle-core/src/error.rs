// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Schwelle.

use thiserror::Error;

/// Top-level error type for all Schwelle operations.
#[derive(Debug, Error)]
pub enum SchwelleError {
    // -- Threshold search --
    #[error("histogram contains no pixels")]
    EmptyHistogram,

    #[error("histogram has {actual} buckets, expected {expected}")]
    HistogramShape { expected: usize, actual: usize },

    #[error("threshold {threshold} exceeds maximum intensity {max}")]
    ThresholdOutOfRange { threshold: usize, max: usize },

    #[error("threshold increment must be at least 1, got {0}")]
    InvalidIncrement(usize),

    // -- Image I/O --
    #[error("image processing failed: {0}")]
    ImageError(String),

    // -- Interactive session --
    #[error("input closed before a value was entered")]
    InputClosed,

    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SchwelleError>;
