pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod storage;

use config::Config;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging on stderr so stdout only carries the report.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("emergency_toggle_lib={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

pub fn run(config: &Config) -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(config, &mut stdout.lock(), &mut stderr.lock())
}

/// Enable YOLO mode and write the report to `out`.
///
/// In JSON mode failures go to `err` so `out` only ever holds the JSON document.
pub fn run_with(config: &Config, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    info!("Enabling YOLO mode...");

    let result = commands::enable_yolo_mode(&config.db_path);

    let reported = match &result {
        Ok(settings) if config.json => report::write_json(out, settings),
        Ok(settings) => report::write_success(out, settings),
        Err(e) => {
            error!("Failed to enable YOLO mode: {}", e);
            if config.json {
                report::write_failure(err, e)
            } else {
                report::write_failure(out, e)
            }
        }
    };

    if let Err(e) = reported {
        let _ = writeln!(err, "Failed to write report: {}", e);
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
