use clap::Parser;
use emergency_toggle_lib::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    emergency_toggle_lib::init_logging(config.verbose);
    emergency_toggle_lib::run(&config)
}
