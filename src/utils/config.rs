// Configuration utilities: where the two version files live

use std::path::{Path, PathBuf};

/// Default name of the structured (JSON) manifest
pub const DEFAULT_JSON_FILE: &str = "library.json";

/// Default name of the line-oriented (key=value) manifest
pub const DEFAULT_PROPERTIES_FILE: &str = "library.properties";

/// Key holding the version in both manifests
pub const VERSION_KEY: &str = "version";

/// Resolved locations of the two manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Base directory of the library
    pub root: PathBuf,
    /// Structured manifest, first write target
    pub json_path: PathBuf,
    /// Line-oriented manifest, second write target
    pub properties_path: PathBuf,
}

impl ManagerConfig {
    /// Config with the default file names under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            json_path: root.join(DEFAULT_JSON_FILE),
            properties_path: root.join(DEFAULT_PROPERTIES_FILE),
            root,
        }
    }

    /// Build from optional CLI overrides. Relative file names resolve against the root,
    /// the root itself defaults to the current directory.
    pub fn from_overrides(
        root: Option<PathBuf>,
        json_file: Option<PathBuf>,
        properties_file: Option<PathBuf>,
    ) -> Self {
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let mut config = Self::new(&root);

        if let Some(json_file) = json_file {
            config.json_path = root.join(json_file);
        }
        if let Some(properties_file) = properties_file {
            config.properties_path = root.join(properties_file);
        }

        config
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
