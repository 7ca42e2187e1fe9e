// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Thresholding — Otsu threshold search and global binarization.

pub mod binarize;
pub mod otsu;

pub use binarize::binarize;
pub use otsu::{ClassStats, OtsuOutcome, class_statistics, otsu_search, otsu_search_cumulative};
