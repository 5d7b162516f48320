//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rpcs3-shelf")]
#[command(about = "Browse and launch titles installed in RPCS3", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// RPCS3 executable (overrides settings.toml)
    #[arg(long)]
    pub executable: Option<PathBuf>,

    /// RPCS3 configuration directory holding games.yml (overrides settings.toml)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List installed titles
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every PARAM.SFO attribute of one title
    Info {
        /// Title identifier (e.g. BLUS30443)
        id: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Decode a standalone PARAM.SFO file
    Sfo {
        /// Path to the PARAM.SFO
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Start a title in RPCS3
    Launch {
        /// Title identifier (e.g. BLUS30443)
        id: String,

        /// Boot without the RPCS3 main window
        #[arg(long)]
        no_gui: bool,

        /// Print the command instead of running it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Manage where RPCS3 is installed
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective RPCS3 location and where each value comes from
    Show,

    /// Save the RPCS3 location (an empty value clears it)
    Set {
        /// RPCS3 executable
        #[arg(long)]
        executable: Option<PathBuf>,

        /// RPCS3 configuration directory
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },

    /// Print the settings file path
    Path,
}
