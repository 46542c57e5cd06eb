//! Config command

use super::Result;
use crate::AlmaError;
use crate::cli::ConfigCommands;
use crate::config::AlmaConfig;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error for malformed settings, unknown keys, or if saving fails.
pub fn execute(mut config: AlmaConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                AlmaError::InvalidInput("Invalid format. Use: alma config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => match config.get(key)? {
            Some(value) => println!("{value}"),
            None if !quiet => println!("{key} is not set"),
            None => {}
        },
        ConfigCommands::Path => {
            println!("{}", AlmaConfig::config_path()?.display());
        }
    }
    Ok(())
}
