// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Histogram plot — renders an intensity histogram as a bar chart raster and
// writes it as PNG.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use schwelle_core::error::{Result, SchwelleError};
use tracing::{debug, info, instrument};

use crate::histogram::Histogram;
use crate::output::writer::{ensure_dir, plot_file_name};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const BAR: Rgb<u8> = Rgb([31, 119, 180]);

/// Bar chart renderer for 256-bucket histograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramPlot {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Blank border around the plot area, in pixels.
    pub margin: u32,
}

impl Default for HistogramPlot {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 40,
        }
    }
}

impl HistogramPlot {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Draw the histogram: one bar per intensity level, scaled so the
    /// tallest bucket fills the plot height, over black axes.
    #[instrument(skip(self, histogram))]
    pub fn render(&self, histogram: &Histogram) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);

        // Shrink the margin on small canvases so the plot area never vanishes.
        let margin = self.margin.min(self.width / 4).min(self.height / 4);
        let left = margin;
        let right = self.width.saturating_sub(margin);
        let top = margin;
        let baseline = self.height.saturating_sub(margin);
        let plot_width = right.saturating_sub(left) as u64;
        let plot_height = baseline.saturating_sub(top) as u64;

        let counts = histogram.counts();
        let levels = counts.len() as u64;
        let peak = histogram.peak();

        if peak > 0 && plot_width > 0 && plot_height > 0 {
            for (level, &count) in counts.iter().enumerate() {
                let bar_height = (count * plot_height + peak / 2) / peak;
                if bar_height == 0 {
                    continue;
                }
                let x0 = left as u64 + level as u64 * plot_width / levels;
                let x1 = left as u64 + (level as u64 + 1) * plot_width / levels;
                let bar_width = (x1 - x0).max(1) as u32;
                let y0 = baseline as u64 - bar_height;

                draw_filled_rect_mut(
                    &mut canvas,
                    Rect::at(x0 as i32, y0 as i32).of_size(bar_width, bar_height as u32),
                    BAR,
                );
            }
        }

        // x axis along the baseline, y axis on the left edge.
        draw_line_segment_mut(
            &mut canvas,
            (left as f32, baseline as f32),
            (right as f32, baseline as f32),
            AXIS,
        );
        draw_line_segment_mut(
            &mut canvas,
            (left as f32, top as f32),
            (left as f32, baseline as f32),
            AXIS,
        );

        debug!(peak, "Histogram plot rendered");
        canvas
    }

    /// Render and write `histogram_plot_<image_name>.png` into `dir`.
    #[instrument(skip(self, histogram), fields(dir = %dir.display()))]
    pub fn save(&self, histogram: &Histogram, dir: &Path, image_name: &str) -> Result<PathBuf> {
        ensure_dir(dir)?;
        let path = dir.join(plot_file_name(image_name));

        self.render(histogram)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|err| {
                SchwelleError::ImageError(format!(
                    "failed to write histogram plot {}: {}",
                    path.display(),
                    err
                ))
            })?;

        info!(path = %path.display(), "Histogram plot saved");
        Ok(path)
    }
}
