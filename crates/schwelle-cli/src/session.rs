// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One interactive binarization session: pick an image, pick a mode, write the
// histogram plot and the binarized result.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use schwelle_core::error::{Result, SchwelleError};
use schwelle_core::{AppConfig, ThresholdMode};
use schwelle_image::output::{image_stem, save_binarized};
use schwelle_image::{Histogram, HistogramPlot, binarize};
use tracing::{info, instrument, warn};

use crate::prompt::Prompter;

/// What a completed session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: PathBuf,
    pub mode: ThresholdMode,
    pub threshold: u16,
    pub binarized_path: PathBuf,
    pub plot_path: PathBuf,
}

/// Run a session against `config`.
///
/// Returns `Ok(None)` when the named image does not exist; nothing is written
/// in that case.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<RunReport>> {
    let image_name = prompter.image_name()?;
    let source = config.input_dir.join(&image_name);

    if !source.is_file() {
        warn!(path = %source.display(), "Input image not found");
        prompter.say(&format!("Error: Image '{}' not found!", source.display()))?;
        return Ok(None);
    }

    let gray = image::open(&source)
        .map_err(|err| {
            SchwelleError::ImageError(format!(
                "failed to open {}: {}",
                source.display(),
                err
            ))
        })?
        .to_luma8();
    info!(
        width = gray.width(),
        height = gray.height(),
        "Image loaded"
    );
    prompter.say(&format!("Loaded image: {}", source.display()))?;

    let mode = prompter.mode()?;

    let histogram = Histogram::from_gray(&gray);
    let plot = HistogramPlot::new(config.plot_width, config.plot_height);
    let plot_path = plot.save(&histogram, &config.plot_output_dir, &image_name)?;

    let threshold = match mode {
        ThresholdMode::Manual => {
            let threshold = u16::from(prompter.manual_threshold()?);
            prompter.say(&format!("Selected threshold: {threshold}"))?;
            threshold
        }
        ThresholdMode::Otsu => {
            let increment = prompter.threshold_increment()?;
            let outcome = histogram.otsu(increment)?;
            info!(
                increment,
                threshold = outcome.threshold,
                variance = outcome.variance,
                "Otsu threshold computed"
            );
            let threshold =
                u16::try_from(outcome.threshold).map_err(|_| SchwelleError::ThresholdOutOfRange {
                    threshold: outcome.threshold,
                    max: u16::MAX as usize,
                })?;
            prompter.say(&format!("Ideal threshold computed: {threshold}"))?;
            threshold
        }
    };

    let binarized = binarize(&gray, threshold);
    let binarized_path = save_binarized(
        &binarized,
        &config.image_output_dir,
        image_stem(&image_name),
        mode,
        threshold,
    )?;

    prompter.say(&format!(
        "\nImage saved to: {}",
        config.image_output_dir.display()
    ))?;
    prompter.say(&format!(
        "Histogram saved to: {}",
        config.plot_output_dir.display()
    ))?;

    Ok(Some(RunReport {
        source,
        mode,
        threshold,
        binarized_path,
        plot_path,
    }))
}
