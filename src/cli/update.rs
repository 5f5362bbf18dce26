use serde::Serialize;
use tracing::debug;

use crate::models::{IncrementKind, SuffixArg};
use crate::services::{UpdateOutcome, UpdateRequest, VersionManager};
use crate::utils::config::ManagerConfig;
use crate::utils::error::Result;

/// JSON response format for an update
#[derive(Debug, Serialize)]
pub struct UpdateResponse<'a> {
    pub status: &'static str,
    #[serde(flatten)]
    pub outcome: &'a UpdateOutcome,
}

/// Increment the version, or set it explicitly, in both manifests
#[derive(Debug)]
pub struct UpdateCommand {
    pub config: ManagerConfig,
    pub kind: IncrementKind,
    /// Raw `--suffix` value; `Some("")` means clear
    pub suffix: Option<String>,
    /// Raw `--version` value
    pub version: Option<String>,
    pub json: bool,
}

impl UpdateCommand {
    /// Execute the update command
    pub fn run(&self) -> Result<()> {
        let request = self.request()?;
        debug!("Update request: {:?}", request);

        let manager = VersionManager::new(self.config.clone());
        let outcome = manager.update_version(&request)?;

        if self.json {
            let response = UpdateResponse {
                status: "success",
                outcome: &outcome,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("Successfully updated to version: {}", outcome.new_version);
        }

        Ok(())
    }

    /// Validate raw arguments before any file is read
    fn request(&self) -> Result<UpdateRequest> {
        let suffix = SuffixArg::from_cli(self.suffix.as_deref())?;
        Ok(UpdateRequest {
            kind: self.kind,
            suffix,
            target: self.version.clone(),
        })
    }
}
