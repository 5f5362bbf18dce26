// Common error types for libver

use std::path::PathBuf;

/// Everything that can go wrong while reading, bumping or writing a version
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Text does not match `MAJOR.MINOR.PATCH[a-z]`
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// Suffix is neither empty nor a single lowercase letter
    #[error("Invalid version suffix '{0}' (must be a single lowercase letter or empty)")]
    InvalidSuffix(String),

    /// No version could be read and no explicit target was given
    #[error("Could not read current version from {}", .path.display())]
    MissingCurrentVersion { path: PathBuf },

    /// Structured resource has no `version` key
    #[error("No \"version\" field in {}", .path.display())]
    MissingVersionField { path: PathBuf },

    /// Line-oriented resource has no `version=` line
    #[error("No 'version=' line in {}", .path.display())]
    MissingVersionLine { path: PathBuf },

    /// A version component would not fit in a u64 after incrementing
    #[error("Cannot increment {0} version: component overflow")]
    ComponentOverflow(String),

    /// Reading or writing a resource failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structured resource is not valid JSON
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The second write failed and the first resource was put back
    #[error("Failed to update {} ({source}); {} was restored, nothing changed", .failed.display(), .restored.display())]
    RolledBack {
        restored: PathBuf,
        failed: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The second write failed and the first resource could not be put back
    #[error("Updated {} but failed to update {} ({source}); the files now disagree", .written.display(), .failed.display())]
    PartialWrite {
        written: PathBuf,
        failed: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be produced
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl VersionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by bad input rather than the environment
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_)
                | Self::InvalidSuffix(_)
                | Self::MissingCurrentVersion { .. }
                | Self::MissingVersionField { .. }
                | Self::MissingVersionLine { .. }
                | Self::ComponentOverflow(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;

/// Exit code for I/O and other runtime failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for rejected input (bad version, bad suffix, missing fields)
pub const EXIT_INVALID_INPUT: i32 = 2;

/// User-facing rendering of a [`VersionError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_version_error(err: &VersionError) -> Self {
        let hint = match err {
            VersionError::InvalidFormat(_) => Some(
                "Versions look like MAJOR.MINOR.PATCH with an optional letter:\n  ✓ 1.0.21\n  ✓ 1.0.21b\n  ✗ v1.0.0\n  ✗ 1.0.0-alpha"
                    .to_string(),
            ),
            VersionError::MissingCurrentVersion { .. } => {
                Some("Set one explicitly with --version <x.y.z>, or point --root at the library directory.".to_string())
            }
            VersionError::MissingVersionLine { .. } => {
                Some("Add a line of the form 'version=x.y.z' to library.properties.".to_string())
            }
            VersionError::PartialWrite { .. } => {
                Some("Check both files and fix the version by hand, or rerun with --version.".to_string())
            }
            _ => None,
        };

        let exit_code = if err.is_input_error() {
            EXIT_INVALID_INPUT
        } else {
            EXIT_FAILURE
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, when there is one) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
