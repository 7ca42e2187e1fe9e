// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Otsu threshold search — picks the intensity cut point that maximises the
// between-class variance of the dark and light pixel populations.

use schwelle_core::error::{Result, SchwelleError};
use tracing::{debug, instrument};

/// Probabilities and mean intensities of the two classes a threshold creates.
///
/// Class 1 holds intensities `0..=threshold`, class 2 holds
/// `threshold + 1..=threshold_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassStats {
    /// Fraction of pixels in class 1.
    pub p1: f64,
    /// Fraction of pixels in class 2. Always `1.0 - p1`.
    pub p2: f64,
    /// Mean intensity of class 1, or 0 when the class is empty.
    pub m1: f64,
    /// Mean intensity of class 2, or 0 when the class is empty.
    pub m2: f64,
}

impl ClassStats {
    /// Between-class variance `p1 * p2 * (m1 - m2)^2`.
    ///
    /// Zero whenever either class is empty.
    pub fn between_class_variance(&self) -> f64 {
        self.p1 * self.p2 * (self.m1 - self.m2).powi(2)
    }
}

/// Result of a threshold search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtsuOutcome {
    /// First candidate that reached the highest between-class variance.
    pub threshold: usize,
    /// The between-class variance at `threshold` (0 if no candidate beat 0).
    pub variance: f64,
}

/// Compute the class statistics for a single candidate threshold.
///
/// `histogram` must hold exactly `threshold_max + 1` buckets and at least one
/// pixel.
pub fn class_statistics(
    histogram: &[u64],
    threshold: usize,
    threshold_max: usize,
) -> Result<ClassStats> {
    let total = validate(histogram, threshold_max)?;
    if threshold > threshold_max {
        return Err(SchwelleError::ThresholdOutOfRange {
            threshold,
            max: threshold_max,
        });
    }
    Ok(accumulate(histogram, threshold, total))
}

/// Brute-force Otsu search over `0, increment, 2 * increment, ...` below
/// `threshold_max`.
///
/// A candidate replaces the current best only when its variance is strictly
/// greater, so on ties the lowest candidate wins. Because the best variance
/// starts at 0, a histogram where no split separates anything (e.g. a single
/// occupied bucket) yields threshold 0.
#[instrument(skip(histogram), fields(buckets = histogram.len()))]
pub fn otsu_search(
    histogram: &[u64],
    increment: usize,
    threshold_max: usize,
) -> Result<OtsuOutcome> {
    if increment == 0 {
        return Err(SchwelleError::InvalidIncrement(increment));
    }
    let total = validate(histogram, threshold_max)?;

    let mut best = OtsuOutcome {
        threshold: 0,
        variance: 0.0,
    };
    let mut candidates = 0usize;

    for candidate in (0..threshold_max).step_by(increment) {
        let variance = accumulate(histogram, candidate, total).between_class_variance();
        if variance > best.variance {
            best = OtsuOutcome {
                threshold: candidate,
                variance,
            };
        }
        candidates += 1;
    }

    debug!(
        candidates,
        threshold = best.threshold,
        variance = best.variance,
        "Otsu search complete"
    );
    Ok(best)
}

/// Otsu search using running sums of counts and intensity-weighted counts.
///
/// Visits the same candidates as [`otsu_search`] and keeps the same
/// first-maximum-wins rule, but evaluates each candidate in constant time.
#[instrument(skip(histogram), fields(buckets = histogram.len()))]
pub fn otsu_search_cumulative(
    histogram: &[u64],
    increment: usize,
    threshold_max: usize,
) -> Result<OtsuOutcome> {
    if increment == 0 {
        return Err(SchwelleError::InvalidIncrement(increment));
    }
    let total = validate(histogram, threshold_max)?;

    let weighted_total: u128 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as u128 * count as u128)
        .sum();

    let mut best = OtsuOutcome {
        threshold: 0,
        variance: 0.0,
    };
    let mut count_below: u64 = 0;
    let mut weighted_below: u128 = 0;
    let mut next_candidate = 0usize;

    for (level, &count) in histogram.iter().enumerate().take(threshold_max) {
        count_below += count;
        weighted_below += level as u128 * count as u128;
        if level != next_candidate {
            continue;
        }
        next_candidate = next_candidate.saturating_add(increment);

        let count_above = total - count_below;
        let p1 = count_below as f64 / total as f64;
        let p2 = 1.0 - p1;
        let m1 = if count_below > 0 {
            weighted_below as f64 / count_below as f64
        } else {
            0.0
        };
        let m2 = if count_above > 0 {
            (weighted_total - weighted_below) as f64 / count_above as f64
        } else {
            0.0
        };

        let variance = ClassStats { p1, p2, m1, m2 }.between_class_variance();
        if variance > best.variance {
            best = OtsuOutcome {
                threshold: level,
                variance,
            };
        }
    }

    debug!(
        threshold = best.threshold,
        variance = best.variance,
        "Cumulative Otsu search complete"
    );
    Ok(best)
}

/// Check the histogram shape and return its total pixel count.
fn validate(histogram: &[u64], threshold_max: usize) -> Result<u64> {
    let expected = threshold_max.saturating_add(1);
    if histogram.len() != expected {
        return Err(SchwelleError::HistogramShape {
            expected,
            actual: histogram.len(),
        });
    }
    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return Err(SchwelleError::EmptyHistogram);
    }
    Ok(total)
}

/// Sum class probabilities and means in ascending intensity order.
fn accumulate(histogram: &[u64], threshold: usize, total: u64) -> ClassStats {
    let total = total as f64;
    let (lower, upper) = histogram.split_at(threshold + 1);

    let mut p1 = 0.0;
    for &count in lower {
        p1 += count as f64 / total;
    }
    let p2 = 1.0 - p1;

    let mut m1 = 0.0;
    if p1 > 0.0 {
        for (level, &count) in lower.iter().enumerate() {
            m1 += (level as f64 * (count as f64 / total)) / p1;
        }
    }

    let mut m2 = 0.0;
    if p2 > 0.0 {
        for (offset, &count) in upper.iter().enumerate() {
            let level = threshold + 1 + offset;
            m2 += (level as f64 * (count as f64 / total)) / p2;
        }
    }

    ClassStats { p1, p2, m1, m2 }
}
