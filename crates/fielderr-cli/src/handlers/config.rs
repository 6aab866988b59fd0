//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Paths => handle_config_paths(output),
    }
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let rendered = config.render(args.format)?;
    output.writeln(rendered.trim_end())
}

/// Handle config paths subcommand
fn handle_config_paths(output: &mut OutputWriter) -> Result<()> {
    output.section("Configuration search paths")?;
    for path in Config::default_config_paths() {
        let marker = if path.exists() { "✓" } else { " " };
        output.writeln(&format!("{} {}", marker, path.display()))?;
    }
    Ok(())
}
