// Shared helpers: errors, configuration, logging, file writes
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod logging;
