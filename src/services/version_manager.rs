use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{increment, IncrementKind, SuffixArg, VersionRecord};
use crate::services::library_json::LibraryJson;
use crate::services::library_properties::LibraryProperties;
use crate::utils::config::ManagerConfig;
use crate::utils::error::{Result, VersionError};
use crate::utils::fs_utils::replace_file;

/// What the caller wants done to the version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub kind: IncrementKind,
    pub suffix: SuffixArg,
    /// Explicit new version; skips reading and incrementing
    pub target: Option<String>,
}

impl UpdateRequest {
    pub fn increment(kind: IncrementKind, suffix: SuffixArg) -> Self {
        Self {
            kind,
            suffix,
            target: None,
        }
    }

    pub fn set<S: Into<String>>(target: S) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::default()
        }
    }
}

/// Result of a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub previous_version: Option<String>,
    pub new_version: String,
    pub updated_files: Vec<PathBuf>,
}

/// Result of `--show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    /// Version from library.json, the source of truth
    pub current_version: Option<String>,
    /// Version from library.properties, for spotting drift
    pub properties_version: Option<String>,
    pub root: PathBuf,
    pub json_file: PathBuf,
    pub properties_file: PathBuf,
}

impl VersionReport {
    /// Both files carry the same version
    pub fn in_sync(&self) -> bool {
        self.current_version.is_some() && self.current_version == self.properties_version
    }
}

/// New contents for both files, computed before anything is written
#[derive(Debug)]
struct StagedWrite {
    json_original: String,
    json_updated: String,
    properties_updated: String,
}

/// Reads, increments and writes the library version across both manifests
#[derive(Debug, Clone)]
pub struct VersionManager {
    config: ManagerConfig,
    json: LibraryJson,
    properties: LibraryProperties,
}

impl VersionManager {
    pub fn new(config: ManagerConfig) -> Self {
        Self {
            json: LibraryJson::new(&config.json_path),
            properties: LibraryProperties::new(&config.properties_path),
            config,
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Current version from library.json, `None` when it cannot be read
    pub fn current_version(&self) -> Option<String> {
        self.json.read_version()
    }

    /// Read-only snapshot of both files
    pub fn report(&self) -> VersionReport {
        let report = VersionReport {
            current_version: self.json.read_version(),
            properties_version: self.properties.read_version(),
            root: self.config.root.clone(),
            json_file: self.json.path().to_path_buf(),
            properties_file: self.properties.path().to_path_buf(),
        };

        if report.current_version.is_some() && !report.in_sync() {
            warn!(
                "{} has {:?} but {} has {:?}",
                report.json_file.display(),
                report.current_version,
                report.properties_file.display(),
                report.properties_version
            );
        }

        report
    }

    /// Work out the new version without touching any file
    pub fn next_version(&self, request: &UpdateRequest) -> Result<(Option<String>, VersionRecord)> {
        if let Some(target) = &request.target {
            debug!("Explicit version {} requested, ignoring --type/--suffix", target);
            let target = VersionRecord::parse(target)?;
            return Ok((self.current_version(), target));
        }

        let current = self
            .current_version()
            .ok_or_else(|| VersionError::MissingCurrentVersion {
                path: self.json.path().to_path_buf(),
            })?;

        let parsed = VersionRecord::parse(&current)?;
        let next = increment(parsed, request.kind, request.suffix)?;
        debug!("{} --{}--> {}", current, request.kind, next);

        Ok((Some(current), next))
    }

    /// Compute the new version and write it to both files
    pub fn update_version(&self, request: &UpdateRequest) -> Result<UpdateOutcome> {
        let (previous_version, next) = self.next_version(request)?;
        let new_version = next.to_string();

        info!("Updating version to: {}", new_version);
        let updated_files = self.write_version(&new_version)?;

        Ok(UpdateOutcome {
            previous_version,
            new_version,
            updated_files,
        })
    }

    /// Write `new_version` to library.json, then library.properties. Both files are
    /// read and checked first; if the second write fails the first is restored.
    pub fn write_version(&self, new_version: &str) -> Result<Vec<PathBuf>> {
        let staged = self.stage(new_version)?;
        self.commit(&staged, replace_file)
    }

    fn stage(&self, new_version: &str) -> Result<StagedWrite> {
        let json_original = self.json.load()?;
        let json_updated = self.json.render(&json_original, new_version)?;

        let properties_original = self.properties.load()?;
        let properties_updated = self.properties.render(&properties_original, new_version)?;

        Ok(StagedWrite {
            json_original,
            json_updated,
            properties_updated,
        })
    }

    fn commit<W>(&self, staged: &StagedWrite, mut write: W) -> Result<Vec<PathBuf>>
    where
        W: FnMut(&Path, &str) -> io::Result<()>,
    {
        let json_path = self.json.path();
        let properties_path = self.properties.path();

        write(json_path, &staged.json_updated).map_err(|e| VersionError::io(json_path, e))?;
        debug!("Wrote {}", json_path.display());

        if let Err(source) = write(properties_path, &staged.properties_updated) {
            warn!("Writing {} failed, restoring {}", properties_path.display(), json_path.display());

            return Err(match write(json_path, &staged.json_original) {
                Ok(()) => VersionError::RolledBack {
                    restored: json_path.to_path_buf(),
                    failed: properties_path.to_path_buf(),
                    source,
                },
                Err(restore_err) => {
                    warn!("Restoring {} failed: {}", json_path.display(), restore_err);
                    VersionError::PartialWrite {
                        written: json_path.to_path_buf(),
                        failed: properties_path.to_path_buf(),
                        source,
                    }
                }
            });
        }
        debug!("Wrote {}", properties_path.display());

        Ok(vec![json_path.to_path_buf(), properties_path.to_path_buf()])
    }
}
