// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output writer — output directory creation and descriptive PNG filenames
// for binarized images.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use schwelle_core::ThresholdMode;
use schwelle_core::error::{Result, SchwelleError};
use tracing::{debug, info, instrument};

/// Base name of an image: everything before the first `.`.
///
/// `"scan.2024.png"` becomes `"scan"`.
pub fn image_stem(image_name: &str) -> &str {
    image_name.split('.').next().unwrap_or(image_name)
}

/// Filename for a binarized image, e.g. `coins_otsu_97.png`.
pub fn binarized_file_name(stem: &str, mode: ThresholdMode, threshold: u16) -> String {
    format!("{stem}_{}_{threshold}.png", mode.label())
}

/// Filename for a histogram plot, e.g. `histogram_plot_coins.jpg.png`.
pub fn plot_file_name(image_name: &str) -> String {
    format!("histogram_plot_{image_name}.png")
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Write a binarized image as PNG into `dir`, creating `dir` first.
///
/// Returns the path of the written file.
#[instrument(skip(image), fields(dir = %dir.display()))]
pub fn save_binarized(
    image: &GrayImage,
    dir: &Path,
    stem: &str,
    mode: ThresholdMode,
    threshold: u16,
) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(binarized_file_name(stem, mode, threshold));
    debug!(path = %path.display(), "Writing binarized image");

    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|err| {
            SchwelleError::ImageError(format!(
                "failed to write {}: {}",
                path.display(),
                err
            ))
        })?;

    info!(path = %path.display(), "Binarized image saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(image_stem("coins.png"), "coins");
        assert_eq!(image_stem("scan.2024.tif"), "scan");
        assert_eq!(image_stem("noext"), "noext");
        assert_eq!(image_stem(".hidden"), "");
    }

    #[test]
    fn file_names_encode_mode_and_threshold() {
        assert_eq!(
            binarized_file_name("coins", ThresholdMode::Manual, 128),
            "coins_manual_128.png"
        );
        assert_eq!(
            binarized_file_name("coins", ThresholdMode::Otsu, 0),
            "coins_otsu_0.png"
        );
        assert_eq!(plot_file_name("coins.jpg"), "histogram_plot_coins.jpg.png");
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("output").join("images");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn save_creates_directory_and_png() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        let img = GrayImage::from_pixel(3, 2, Luma([255]));

        let path = save_binarized(&img, &dir, "tile", ThresholdMode::Otsu, 77).unwrap();
        assert_eq!(path, dir.join("tile_otsu_77.png"));

        let reloaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(reloaded, img);
    }
}
