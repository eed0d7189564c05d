//! bitmosaic runner (default binary).
//!
//! Validates the arguments, generates the whole grid, then streams the
//! rendering to stdout. Errors are mapped to exit codes here and nowhere else.

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use bitmosaic::core::generate;
use bitmosaic::input::{parse_settings, InputError, StdinConfirm};
use bitmosaic::telemetry;
use bitmosaic::term::TerminalRenderer;

fn main() -> ExitCode {
    telemetry::init_tracing("warn");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(input_error) = e.downcast_ref::<InputError>() {
                match input_error {
                    // Clap formats help, version and usage errors itself.
                    InputError::Usage(clap_error) => {
                        let _ = clap_error.print();
                    }
                    other => eprintln!("Error: {other}"),
                }
                if input_error.is_informational() {
                    return ExitCode::SUCCESS;
                }
                return ExitCode::from(input_error.exit_code() as u8);
            }

            // Output piped into something like `head` that stopped reading.
            if is_broken_pipe(&e) {
                return ExitCode::SUCCESS;
            }

            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let settings = parse_settings(std::env::args_os(), &mut StdinConfirm)?;

    let started = Instant::now();
    let grid = generate(settings.side);
    debug!(
        side = grid.side(),
        filled = grid.filled_count(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "grid generated"
    );

    let started = Instant::now();
    let mut term = TerminalRenderer::new();
    term.draw(&grid, &settings.render)?;
    debug!(
        elapsed_us = started.elapsed().as_micros() as u64,
        "mosaic written"
    );

    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_error| io_error.kind() == io::ErrorKind::BrokenPipe)
}
