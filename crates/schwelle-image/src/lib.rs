// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// schwelle-image — Image-side operations for the Schwelle binarizer.
//
// Provides intensity histograms, the Otsu threshold search, global
// binarization, and output writing (binarized PNGs and histogram plots).

pub mod histogram;
pub mod output;
pub mod threshold;

// Re-export the primary items so callers can use `schwelle_image::Histogram` etc.
pub use histogram::Histogram;
pub use output::plot::HistogramPlot;
pub use threshold::binarize::binarize;
pub use threshold::otsu::{ClassStats, OtsuOutcome, otsu_search, otsu_search_cumulative};
