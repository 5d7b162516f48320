//! rpcs3-shelf CLI
//!
//! Lists, inspects and launches titles installed in the RPCS3 emulator.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use rpcs3_shelf_lib::LaunchOptions;

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::commands::config::{run_config_path, run_config_set, run_config_show};
use crate::commands::info::run_info;
use crate::commands::launch::run_launch;
use crate::commands::list::run_list;
use crate::commands::resolve_install;
use crate::commands::sfo::run_sfo;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        log::logger().flush();
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { json } => {
            let install = resolve_install(cli.executable, cli.config_dir)?;
            run_list(&install, json)
        }
        Commands::Info { id, json } => {
            let install = resolve_install(cli.executable, cli.config_dir)?;
            run_info(&install, &id, json)
        }
        Commands::Sfo { file, json } => run_sfo(&file, json),
        Commands::Launch {
            id,
            no_gui,
            dry_run,
        } => {
            let install = resolve_install(cli.executable, cli.config_dir)?;
            run_launch(&install, &id, LaunchOptions { no_gui }, dry_run)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(cli.executable, cli.config_dir),
            ConfigAction::Set {
                executable,
                config_dir,
            } => run_config_set(executable, config_dir),
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
        },
    }
}
