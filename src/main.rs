use std::io;
use std::process::ExitCode;

use clap::Parser;
use topdigits::config::{Args, Settings};
use topdigits::logging::{setup_logging, DEFAULT_DIRECTIVES};
use topdigits::{top_numbers, write_ascending};

fn main() -> ExitCode {
    let settings = Settings::from(Args::parse());
    setup_logging(DEFAULT_DIRECTIVES, settings.log_format);

    tracing::info!(capacity = settings.capacity.get(), "reading numbers from stdin");

    let result = top_numbers(io::stdin().lock(), settings.capacity.get())
        .and_then(|set| write_ascending(&set, io::BufWriter::new(io::stdout().lock())));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "processing failed");
            ExitCode::from(e.exit_code())
        }
    }
}
