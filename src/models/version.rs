use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::utils::error::{Result, VersionError};

/// `MAJOR.MINOR.PATCH` plus at most one lowercase letter, nothing else
const VERSION_PATTERN: &str = r"^([0-9]+)\.([0-9]+)\.([0-9]+)([a-z]?)$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Optional single-letter marker after the patch number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Suffix(Option<char>);

impl Suffix {
    /// No suffix
    pub const NONE: Self = Self(None);

    /// Suffix from a single lowercase ASCII letter
    pub fn letter(c: char) -> Result<Self> {
        if c.is_ascii_lowercase() {
            Ok(Self(Some(c)))
        } else {
            Err(VersionError::InvalidSuffix(c.to_string()))
        }
    }

    /// Parse `""` or a single `[a-z]` letter
    pub fn parse(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::NONE),
            (Some(c), None) if c.is_ascii_lowercase() => Ok(Self(Some(c))),
            _ => Err(VersionError::InvalidSuffix(text.to_string())),
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    pub const fn as_char(self) -> Option<char> {
        self.0
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

/// A parsed library version such as `1.0.21` or `1.0.21b`.
///
/// Records are never mutated in place; [`crate::models::increment`] builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Suffix,
}

impl VersionRecord {
    pub const fn new(major: u64, minor: u64, patch: u64, suffix: Suffix) -> Self {
        Self {
            major,
            minor,
            patch,
            suffix,
        }
    }

    /// Parse the canonical textual form. The whole string must match; no whitespace,
    /// no leading `v`, no fourth segment, no pre-release tags.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || VersionError::InvalidFormat(text.to_string());

        let caps = version_regex().captures(text).ok_or_else(invalid)?;
        let component = |idx: usize| -> Result<u64> { caps[idx].parse::<u64>().map_err(|_| invalid()) };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
            suffix: Suffix::parse(&caps[4])?,
        })
    }

    /// Same record with a different suffix
    #[must_use]
    pub const fn with_suffix(self, suffix: Suffix) -> Self {
        Self { suffix, ..self }
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}{}", self.major, self.minor, self.patch, self.suffix)
    }
}

impl FromStr for VersionRecord {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
