// Models module for version data and transforms
pub mod increment;
pub mod version;

pub use increment::{increment, increment_str, IncrementKind, SuffixArg};
pub use version::{Suffix, VersionRecord};
