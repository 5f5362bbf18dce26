use serde::Serialize;

use crate::services::{VersionManager, VersionReport};
use crate::utils::config::ManagerConfig;
use crate::utils::error::Result;

/// JSON response format for --show
#[derive(Debug, Serialize)]
pub struct ShowResponse<'a> {
    pub status: &'static str,
    #[serde(flatten)]
    pub report: &'a VersionReport,
    pub in_sync: bool,
}

/// Print the current version without touching either file
#[derive(Debug)]
pub struct ShowCommand {
    pub config: ManagerConfig,
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command
    pub fn run(&self) -> Result<()> {
        let manager = VersionManager::new(self.config.clone());
        let report = manager.report();

        if self.json {
            let response = ShowResponse {
                status: "success",
                report: &report,
                in_sync: report.in_sync(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!(
                "Current version: {}",
                report.current_version.as_deref().unwrap_or("unknown")
            );
        }

        Ok(())
    }
}
