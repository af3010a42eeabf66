//! Fleet Keeper - local fleet record keeping
//!
//! A CLI tool that manages drivers, vehicles, trips and service events
//! as flat JSON files and tracks KTEO inspection deadlines.

use clap::Parser;
use fleet_keeper::cli::Cli;
use fleet_keeper::commands;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
