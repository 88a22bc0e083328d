//! Reading the JSON remotes document

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Option key to value for one remote, in document order.
pub type OptionSet = IndexMap<String, String>;

/// Remote name to its options, in document order.
pub type RemoteConfig = IndexMap<String, OptionSet>;

/// Read and parse the remotes document at `path`.
pub fn load_remotes(path: &Path) -> Result<RemoteConfig> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let remotes = parse_remotes(&content, path)?;
    info!(path = %path.display(), remotes = remotes.len(), "loaded remotes");
    Ok(remotes)
}

/// Parse a remotes document; `path` only labels errors.
///
/// The top level must be an object whose values are objects of scalars.
/// Scalars are stored as strings: numbers in their JSON form, booleans as
/// `true`/`false`, and `null` as an empty string.
pub fn parse_remotes(content: &str, path: &Path) -> Result<RemoteConfig> {
    let document: Value = serde_json::from_str(content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;

    remotes_from_value(document).map_err(|reason| Error::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

fn remotes_from_value(document: Value) -> std::result::Result<RemoteConfig, String> {
    let Value::Object(entries) = document else {
        return Err(format!(
            "expected a top-level object, found {}",
            kind_of(&document)
        ));
    };

    let mut remotes = RemoteConfig::with_capacity(entries.len());
    for (name, value) in entries {
        let Value::Object(options) = value else {
            return Err(format!(
                "remote {name:?} must be an object, found {}",
                kind_of(&value)
            ));
        };

        let mut option_set = OptionSet::with_capacity(options.len());
        for (key, value) in options {
            let value = scalar_to_string(&value).ok_or_else(|| {
                format!(
                    "option {key:?} of remote {name:?} must be a scalar, found {}",
                    kind_of(&value)
                )
            })?;
            option_set.insert(key, value);
        }

        debug!(remote = %name, options = option_set.len(), "parsed remote");
        remotes.insert(name, option_set);
    }

    Ok(remotes)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
