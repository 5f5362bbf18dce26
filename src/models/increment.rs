use std::fmt;

use clap::ValueEnum;

use crate::models::version::{Suffix, VersionRecord};
use crate::utils::error::{Result, VersionError};

/// Which part of the version to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum IncrementKind {
    Major,
    Minor,
    #[default]
    Patch,
    Suffix,
}

impl fmt::Display for IncrementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Suffix => "suffix",
        };
        f.write_str(name)
    }
}

/// The `--suffix` argument as given on the command line.
///
/// "Not given" and "given as empty" behave differently for patch bumps, so they
/// are distinct variants rather than one `Option<String>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuffixArg {
    /// No `--suffix` at all
    #[default]
    Absent,
    /// `--suffix ""`
    Clear,
    /// `--suffix <letter>`
    Set(char),
}

impl SuffixArg {
    /// Validate a raw command-line value
    pub fn from_cli(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::Absent),
            Some(text) => Ok(Suffix::parse(text)?.as_char().map_or(Self::Clear, Self::Set)),
        }
    }

    /// The explicit suffix, or no suffix when absent
    fn explicit_or_empty(self) -> Result<Suffix> {
        match self {
            Self::Set(c) => Suffix::letter(c),
            Self::Absent | Self::Clear => Ok(Suffix::NONE),
        }
    }
}

/// Compute the next version. `current` is left untouched.
pub fn increment(current: VersionRecord, kind: IncrementKind, suffix: SuffixArg) -> Result<VersionRecord> {
    let bump = |value: u64, part: IncrementKind| {
        value
            .checked_add(1)
            .ok_or_else(|| VersionError::ComponentOverflow(part.to_string()))
    };

    let next = match kind {
        IncrementKind::Major => VersionRecord::new(
            bump(current.major, kind)?,
            0,
            0,
            suffix.explicit_or_empty()?,
        ),
        IncrementKind::Minor => VersionRecord::new(
            current.major,
            bump(current.minor, kind)?,
            0,
            suffix.explicit_or_empty()?,
        ),
        IncrementKind::Suffix => current.with_suffix(suffix.explicit_or_empty()?),
        IncrementKind::Patch => match suffix {
            SuffixArg::Clear | SuffixArg::Set(_) => current.with_suffix(suffix.explicit_or_empty()?),
            SuffixArg::Absent => advance_patch(current)?,
        },
    };

    Ok(next)
}

/// Auto-advance: `a` -> `b` -> `c`, anything else bumps the patch and drops the suffix
fn advance_patch(current: VersionRecord) -> Result<VersionRecord> {
    match current.suffix.as_char() {
        Some('a') => Ok(current.with_suffix(Suffix::letter('b')?)),
        Some('b') => Ok(current.with_suffix(Suffix::letter('c')?)),
        _ => {
            let patch = current
                .patch
                .checked_add(1)
                .ok_or_else(|| VersionError::ComponentOverflow(IncrementKind::Patch.to_string()))?;
            Ok(VersionRecord::new(current.major, current.minor, patch, Suffix::NONE))
        }
    }
}

/// Text-level convenience: parse, increment, format
pub fn increment_str(current: &str, kind: IncrementKind, suffix: SuffixArg) -> Result<String> {
    let current = VersionRecord::parse(current)?;
    Ok(increment(current, kind, suffix)?.to_string())
}
