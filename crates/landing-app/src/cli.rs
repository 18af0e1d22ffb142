use std::path::PathBuf;

use clap::Parser;

/// Drive the landing page controllers from a recorded host session.
#[derive(Parser, Debug)]
#[command(name = "landing", version, about)]
pub struct Args {
    /// Config file path. Defaults are used when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override, as a tracing directive (e.g. `landing=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Document snapshot (JSON) to mount before replaying.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Session file with one host message per line. Reads stdin when absent.
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Take intersection batches from the session instead of computing them.
    #[arg(long)]
    pub host_observer: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
