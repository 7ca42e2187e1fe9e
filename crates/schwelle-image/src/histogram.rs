// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intensity histogram of an 8-bit grayscale image.

use image::GrayImage;
use schwelle_core::error::Result;
use schwelle_core::{INTENSITY_LEVELS, MAX_INTENSITY};
use tracing::{debug, instrument};

use crate::threshold::otsu::{OtsuOutcome, otsu_search};

/// Pixel counts per intensity level, indexed 0..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; INTENSITY_LEVELS],
}

impl Histogram {
    /// Count every pixel of `image` into its intensity bucket.
    #[instrument(skip(image), fields(width = image.width(), height = image.height()))]
    pub fn from_gray(image: &GrayImage) -> Self {
        let mut counts = [0u64; INTENSITY_LEVELS];
        for pixel in image.pixels() {
            counts[pixel.0[0] as usize] += 1;
        }
        let histogram = Self { counts };
        debug!(total = histogram.total(), "Histogram built");
        histogram
    }

    /// Wrap precomputed counts.
    pub fn from_counts(counts: [u64; INTENSITY_LEVELS]) -> Self {
        Self { counts }
    }

    /// Borrow the bucket counts.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single bucket count.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Run the Otsu search over the full 8-bit range.
    pub fn otsu(&self, increment: usize) -> Result<OtsuOutcome> {
        otsu_search(&self.counts, increment, MAX_INTENSITY)
    }
}
