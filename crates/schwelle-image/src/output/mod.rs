// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output module — histogram plots and binarized image files.

pub mod plot;
pub mod writer;

pub use plot::HistogramPlot;
pub use writer::{binarized_file_name, ensure_dir, image_stem, plot_file_name, save_binarized};
