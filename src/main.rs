// libver - library version manager
// Main CLI entry point

use clap::Parser;
use std::process;
use libver::cli::{Cli, CliDispatcher};
use libver::utils::error::UserError;
use libver::utils::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = CliDispatcher::execute(cli);

    if let Err(err) = result {
        let user_error = UserError::from_version_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
