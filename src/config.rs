//! Configuration and path management

use std::path::PathBuf;

use crate::destination::resolve_destination;
use crate::environment::HostEnvironment;
use crate::error::Result;

/// Source document read when no other path is given, relative to the
/// working directory.
pub const DEFAULT_SOURCE: &str = "remotes.json";

pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl Config {
    /// Defaults: `remotes.json` in the working directory, written to the
    /// rclone config path of `env`.
    pub fn new(env: &HostEnvironment) -> Result<Self> {
        Ok(Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: resolve_destination(env)?,
            log_dir: None,
            dry_run: false,
        })
    }

    /// Config with an explicit destination; the environment is not consulted.
    pub fn with_destination(destination: PathBuf) -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination,
            log_dir: None,
            dry_run: false,
        }
    }

    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = source;
        self
    }
}
