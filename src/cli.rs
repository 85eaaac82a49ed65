//! CLI argument parsing.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fiire", version, about = "FIIRE dev server: static files plus a chat proxy")]
pub struct Cli {
    /// Listen host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory to serve static files from
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
