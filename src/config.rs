use crate::storage::DEFAULT_DB_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Turn on both emergency protections (hide the green emoji and the EUR symbol).
#[derive(Debug, Clone, Parser)]
#[command(name = "emergency-toggle", version, about)]
pub struct Config {
    /// Path to the shop database
    #[arg(long = "db", env = "SHOP_DB_PATH", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Print the verified settings as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
