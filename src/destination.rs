//! Where rclone expects its configuration file

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::environment::{HostEnvironment, Platform};
use crate::error::{Error, Result};

/// Path of the config file below the platform base directory.
const RCLONE_CONF: [&str; 2] = ["rclone", "rclone.conf"];

/// Resolve the rclone config path for `env`.
///
/// - Windows: `%APPDATA%\rclone\rclone.conf`
/// - Others:  `$HOME/.config/rclone/rclone.conf`
///
/// Segments are joined with the separator of `env.platform`, not of the
/// host running this code.
pub fn resolve_destination(env: &HostEnvironment) -> Result<PathBuf> {
    let (base, prefix): (&Path, &[&str]) = match env.platform {
        Platform::Windows => (
            env.app_data_dir
                .as_deref()
                .ok_or(Error::ConfigPath { variable: "APPDATA" })?,
            &[],
        ),
        Platform::Unix => (
            env.home_dir
                .as_deref()
                .ok_or(Error::ConfigPath { variable: "HOME" })?,
            &[".config"],
        ),
    };

    let segments: Vec<&str> = prefix.iter().chain(&RCLONE_CONF).copied().collect();
    Ok(join_segments(base, &segments, env.platform.separator()))
}

fn join_segments(base: &Path, segments: &[&str], separator: char) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    for segment in segments {
        let ends_with_separator = path.to_string_lossy().ends_with(['/', '\\']);
        if !ends_with_separator {
            path.push(separator.to_string());
        }
        path.push(segment);
    }
    PathBuf::from(path)
}
