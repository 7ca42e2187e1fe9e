// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Schwelle — interactive grayscale binarization.
//
// Entry point. Initialises logging, loads the optional config file, and runs
// one interactive session on stdin/stdout.

mod prompt;
mod session;
mod settings;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use schwelle_core::human_errors::humanize_error;

use prompt::Prompter;

fn main() -> ExitCode {
    // Prompts share the terminal, so only warnings are logged by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Schwelle starting");

    let config = settings::load_config(Path::new(settings::CONFIG_FILE));
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match session::run(&config, &mut prompter) {
        Ok(report) => {
            if let Some(report) = report {
                tracing::info!(
                    source = %report.source.display(),
                    plot = %report.plot_path.display(),
                    mode = %report.mode,
                    threshold = report.threshold,
                    output = %report.binarized_path.display(),
                    "Session complete"
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Session failed");
            eprintln!("{}", humanize_error(&err));
            ExitCode::FAILURE
        }
    }
}
