#![allow(dead_code)]

use remoteconf::{OptionSet, RemoteConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `json` to `remotes.json` in a fresh temp dir.
pub fn source_fixture(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("remotes.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

/// Minimal reader for the INI dialect written by remoteconf.
pub fn parse_ini(text: &str) -> RemoteConfig {
    let mut remotes = RemoteConfig::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            remotes.insert(name.to_string(), OptionSet::new());
            current = Some(name.to_string());
            continue;
        }

        let (key, value) = line
            .trim_start()
            .split_once(" = ")
            .unwrap_or_else(|| panic!("malformed option line: {line:?}"));
        let section = current.as_ref().expect("option before any section");
        remotes
            .get_mut(section)
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    remotes
}
