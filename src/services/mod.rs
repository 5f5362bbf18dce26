// Services module: manifest adapters and version orchestration
pub mod library_json;
pub mod library_properties;
pub mod version_manager;

pub use version_manager::{UpdateOutcome, UpdateRequest, VersionManager, VersionReport};
