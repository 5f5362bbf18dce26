use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use crate::utils::config::VERSION_KEY;
use crate::utils::error::{Result, VersionError};

/// Adapter for `library.json`, the manifest the current version is read from
#[derive(Debug, Clone)]
pub struct LibraryJson {
    path: PathBuf,
}

impl LibraryJson {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current `version` string, or `None` if the file is missing, not JSON, or has no
    /// non-empty string `version` field. Never fails.
    pub fn read_version(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Cannot read {}: {}", self.path.display(), e);
                return None;
            }
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                debug!("Cannot parse {}: {}", self.path.display(), e);
                return None;
            }
        };

        match document.get(VERSION_KEY) {
            Some(Value::String(version)) if !version.is_empty() => Some(version.clone()),
            other => {
                debug!("No usable version field in {}: {:?}", self.path.display(), other);
                None
            }
        }
    }

    /// Raw file contents
    pub fn load(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| VersionError::io(&self.path, e))
    }

    /// New file contents with `version` replaced and everything else kept in order
    pub fn render(&self, original: &str, new_version: &str) -> Result<String> {
        let mut document: Value = serde_json::from_str(original).map_err(|source| VersionError::Json {
            path: self.path.clone(),
            source,
        })?;

        let slot = document
            .as_object_mut()
            .and_then(|map| map.get_mut(VERSION_KEY))
            .ok_or_else(|| VersionError::MissingVersionField {
                path: self.path.clone(),
            })?;
        *slot = Value::String(new_version.to_string());

        to_tab_indented(&document).map_err(|source| VersionError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

/// Pretty JSON with one tab per level and a single trailing newline
pub fn to_tab_indented(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
