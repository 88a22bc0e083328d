//! Rendering remotes as an rclone INI document

use crate::loader::RemoteConfig;

/// Render `remotes` in rclone's INI dialect.
///
/// Each remote becomes a `[name]` header, one `  key = value` line per option
/// and a blank line. Sections follow the iteration order of `remotes`.
pub fn serialize_remotes(remotes: &RemoteConfig) -> String {
    let mut out = String::new();
    for (name, options) in remotes {
        out.push_str(&format!("[{name}]\n"));
        for (key, value) in options {
            out.push_str(&format!("  {key} = {value}\n"));
        }
        // Blank line between sections
        out.push('\n');
    }
    out
}
