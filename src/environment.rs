//! Host platform and directory lookup
//!
//! Everything the destination resolver needs from the process environment is
//! captured in a [`HostEnvironment`] so resolution can run against a made-up
//! host in tests.

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    /// Every non-Windows family.
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn separator(self) -> char {
        match self {
            Platform::Windows => '\\',
            Platform::Unix => '/',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnvironment {
    pub platform: Platform,
    pub home_dir: Option<PathBuf>,
    pub app_data_dir: Option<PathBuf>,
}

impl HostEnvironment {
    /// Snapshot the running process.
    pub fn detect() -> Self {
        Self::from_vars(Platform::current(), |name| std::env::var_os(name))
    }

    /// Build from an environment variable lookup.
    ///
    /// The home directory comes from `HOME` (`USERPROFILE` on Windows) and
    /// the application data directory from `APPDATA`. There is no fallback
    /// to the account database, and unset or empty variables are `None`.
    pub fn from_vars(platform: Platform, var: impl Fn(&str) -> Option<OsString>) -> Self {
        let home_var = match platform {
            Platform::Windows => "USERPROFILE",
            Platform::Unix => "HOME",
        };

        Self {
            platform,
            home_dir: non_empty(var(home_var)),
            app_data_dir: non_empty(var("APPDATA")),
        }
    }

    pub fn unix(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform: Platform::Unix,
            home_dir: Some(home_dir.into()),
            app_data_dir: None,
        }
    }

    pub fn windows(app_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            platform: Platform::Windows,
            home_dir: None,
            app_data_dir: Some(app_data_dir.into()),
        }
    }
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
