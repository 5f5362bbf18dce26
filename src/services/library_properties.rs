use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::utils::error::{Result, VersionError};

/// First `version=` line, without its line terminator
fn version_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^version=[^\r\n]*").expect("version line pattern is valid"))
}

/// Adapter for `library.properties`, the key=value mirror of the version
#[derive(Debug, Clone)]
pub struct LibraryProperties {
    path: PathBuf,
}

impl LibraryProperties {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents
    pub fn load(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| VersionError::io(&self.path, e))
    }

    /// Value of the first `version=` line, if any
    pub fn read_version(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        version_line_regex()
            .find(&content)
            .map(|m| m.as_str()["version=".len()..].to_string())
    }

    /// New file contents with the first `version=` line replaced. Every other byte,
    /// line endings and a missing final newline included, is kept.
    pub fn render(&self, original: &str, new_version: &str) -> Result<String> {
        replace_version_line(original, new_version).ok_or_else(|| VersionError::MissingVersionLine {
            path: self.path.clone(),
        })
    }
}

/// Splice `version=<new_version>` over the first `version=` line. `None` if there is none.
pub fn replace_version_line(content: &str, new_version: &str) -> Option<String> {
    let found = version_line_regex().find(content)?;

    let mut updated = String::with_capacity(content.len() + new_version.len());
    updated.push_str(&content[..found.start()]);
    updated.push_str("version=");
    updated.push_str(new_version);
    updated.push_str(&content[found.end()..]);
    Some(updated)
}
