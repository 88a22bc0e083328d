use anyhow::Result;
use clap::Parser;
use remoteconf::{Config, HostEnvironment};
use std::path::PathBuf;
use tracing::Level;

/// Write rclone.conf from a JSON remotes document.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// JSON document with one object per remote
    #[arg(long, default_value = remoteconf::config::DEFAULT_SOURCE)]
    source: PathBuf,

    /// Write here instead of the platform rclone config path
    #[arg(long)]
    destination: Option<PathBuf>,

    /// Print the rendered config instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Log to remoteconf.log in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve paths
    let mut config = match cli.destination {
        Some(destination) => Config::with_destination(destination),
        None => Config::new(&HostEnvironment::detect())?,
    }
    .with_source(cli.source);
    config.log_dir = cli.log_dir;
    config.dry_run = cli.dry_run;

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let _guard = remoteconf::setup_logging(config.log_dir.as_deref(), level)?;

    let result = remoteconf::run(&config);

    // anyhow reports the error on stderr; only a log file needs its own copy
    if let (Err(e), Some(_)) = (&result, &config.log_dir) {
        tracing::error!(error = %format!("{e:#}"), "translation failed");
    }

    result
}
