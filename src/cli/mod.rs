// CLI module for command-line interface

pub mod show;
pub mod update;

use std::path::PathBuf;

use clap::Parser;

use crate::models::IncrementKind;
use crate::utils::config::ManagerConfig;
use crate::utils::error::Result;

use self::show::ShowCommand;
use self::update::UpdateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "libver")]
#[command(about = "Bump the version in library.json and library.properties")]
#[command(long_about = r#"libver keeps the version of an embedded library consistent across its
two manifests: library.json (PlatformIO) and library.properties (Arduino).

The current version is read from library.json, incremented, and written to
both files. Versions look like MAJOR.MINOR.PATCH with an optional single
lowercase letter suffix (1.0.21, 1.0.21b).

Patch bumps without --suffix walk the candidate letters first:
  1.0.21a -> 1.0.21b -> 1.0.21c -> 1.0.22

Examples:
  libver                              Bump patch (or advance a/b suffix)
  libver --type minor                 1.0.21b -> 1.1.0
  libver --type suffix --suffix a     1.0.21 -> 1.0.21a
  libver --suffix ""                  1.0.21b -> 1.0.21
  libver --version 2.0.0              Set an explicit version
  libver --show                       Print the current version"#)]
pub struct Cli {
    /// Which part of the version to increment
    #[arg(long = "type", value_enum, default_value_t = IncrementKind::Patch)]
    pub kind: IncrementKind,

    /// Set or change the suffix letter (a, b, c, ...); "" clears it
    #[arg(long)]
    pub suffix: Option<String>,

    /// Set a specific version directly
    #[arg(long)]
    pub version: Option<String>,

    /// Show the current version and exit without changing anything
    #[arg(long, conflicts_with_all = ["kind", "suffix", "version"])]
    pub show: bool,

    /// Root directory of the library
    #[arg(long, env = "LIBVER_ROOT")]
    pub root: Option<PathBuf>,

    /// Structured manifest, relative to the root
    #[arg(long, value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Line-oriented manifest, relative to the root
    #[arg(long, value_name = "FILE")]
    pub properties_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Log what is being read and written to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// File locations from --root / --json-file / --properties-file
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig::from_overrides(
            self.root.clone(),
            self.json_file.clone(),
            self.properties_file.clone(),
        )
    }
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the command described by the parsed arguments
    pub fn execute(cli: Cli) -> Result<()> {
        let config = cli.manager_config();

        if cli.show {
            let cmd = ShowCommand {
                config,
                json: cli.json,
            };
            return cmd.run();
        }

        let cmd = UpdateCommand {
            config,
            kind: cli.kind,
            suffix: cli.suffix,
            version: cli.version,
            json: cli.json,
        };
        cmd.run()
    }
}
