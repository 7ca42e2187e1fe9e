// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global binarization — maps every pixel to black or white around a single
// threshold.

use image::{GrayImage, Luma};
use tracing::{debug, instrument};

/// Apply a global threshold: pixels `>= threshold` become 255, the rest 0.
///
/// The threshold is a `u16` so that 256 can be passed to force an all-black
/// result; 0 always yields an all-white image.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn binarize(image: &GrayImage, threshold: u16) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels() {
        let binary = if u16::from(pixel.0[0]) >= threshold {
            255u8
        } else {
            0u8
        };
        output.put_pixel(x, y, Luma([binary]));
    }

    debug!(threshold, "Binarization complete");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 16x16 gradient covering every intensity once.
    fn gradient() -> GrayImage {
        GrayImage::from_fn(16, 16, |x, y| Luma([(y * 16 + x) as u8]))
    }

    #[test]
    fn zero_threshold_is_all_white() {
        let out = binarize(&gradient(), 0);
        assert!(out.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn threshold_above_range_is_all_black() {
        let out = binarize(&gradient(), 256);
        assert!(out.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn threshold_pixel_itself_is_white() {
        let out = binarize(&gradient(), 100);
        for (x, y, p) in out.enumerate_pixels() {
            let original = y * 16 + x;
            let expected = if original >= 100 { 255 } else { 0 };
            assert_eq!(p.0[0], expected, "pixel value {original}");
        }
    }

    #[test]
    fn preserves_dimensions() {
        let img = GrayImage::from_pixel(7, 3, Luma([42]));
        let out = binarize(&img, 42);
        assert_eq!(out.dimensions(), (7, 3));
        assert!(out.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn empty_image_stays_empty() {
        let out = binarize(&GrayImage::new(0, 0), 128);
        assert_eq!(out.dimensions(), (0, 0));
    }
}
