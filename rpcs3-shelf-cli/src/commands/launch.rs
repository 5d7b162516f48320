use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rpcs3_shelf_lib::{LaunchOptions, Rpcs3Install, UNKNOWN_TITLE};

use crate::error::CliError;

pub(crate) fn run_launch(
    install: &Rpcs3Install,
    id: &str,
    options: LaunchOptions,
    dry_run: bool,
) -> Result<(), CliError> {
    let catalog = install.catalog()?;
    let entry = catalog.get(id)?;
    let launcher = install.launcher(options);

    // A title without readable metadata can still boot.
    let title = entry.title().unwrap_or_else(|e| {
        log::debug!("{}", e);
        UNKNOWN_TITLE.to_string()
    });

    if dry_run {
        let cmd = launcher.command_for(entry)?;
        let mut line = cmd.get_program().to_string_lossy().into_owned();
        for arg in cmd.get_args() {
            line.push(' ');
            line.push_str(&quote(&arg.to_string_lossy()));
        }
        log::info!("{}", line);
        return Ok(());
    }

    let child = launcher.launch(entry)?;
    log::info!(
        "Started {} {} (pid {})",
        entry.id().if_supports_color(Stdout, |t| t.bold()),
        title.if_supports_color(Stdout, |t| t.cyan()),
        child.id(),
    );
    Ok(())
}

/// Quote an argument for display when it contains spaces.
fn quote(arg: &str) -> String {
    if arg.contains(char::is_whitespace) {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}
