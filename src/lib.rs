//! remoteconf - Generate rclone.conf from a JSON remotes document
//!
//! Reads one object per remote from a JSON file and writes the equivalent
//! rclone INI config to the platform's rclone config location.

pub mod config;
pub mod destination;
pub mod environment;
pub mod error;
pub mod loader;
pub mod transform;
pub mod translate;
pub mod writer;

pub use config::Config;
pub use environment::{HostEnvironment, Platform};
pub use error::{Error, Stage};
pub use loader::{OptionSet, RemoteConfig};
pub use translate::{TranslateOutcome, Translator};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;

/// Set up logging to `log_dir/remoteconf.log`, or to stderr when no
/// directory is given.
pub fn setup_logging(
    log_dir: Option<&Path>,
    level: Level,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let (non_blocking, guard) = match log_dir {
        Some(dir) => {
            // Ensure log directory exists
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let file_appender = RollingFileAppender::new(Rotation::NEVER, dir, "remoteconf.log");
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    // No ANSI colors, output may be a file
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Translate the configured source into the configured destination.
pub fn run(config: &Config) -> Result<()> {
    let translator = Translator::new(config.source.clone(), config.destination.clone());

    // Print only, leave the destination untouched
    if config.dry_run {
        let document = translator
            .render()
            .with_context(|| format!("Failed to render {}", config.source.display()))?;
        print!("{document}");
        return Ok(());
    }

    let outcome = translator.run().with_context(|| {
        format!(
            "Failed to translate {} into {}",
            config.source.display(),
            config.destination.display()
        )
    })?;

    println!(
        "rclone config written to {} ({} remotes)",
        outcome.destination.display(),
        outcome.remotes
    );
    Ok(())
}
