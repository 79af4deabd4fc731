use clap::{Args, Subcommand};

use crate::config::{self, Config, FileConfig};
use crate::error::DiffMergeError;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Set a value in the config file
    Set { key: String, value: String },
    /// Remove a value from the config file (reverts to default)
    Unset { key: String },
}

pub fn handle_config(args: &ConfigArgs) -> Result<(), DiffMergeError> {
    match &args.action {
        None => show_effective_config(),
        Some(ConfigAction::Set { key, value }) => {
            let mut file_config = config::load_file_config_public()?;
            set_config_value(&mut file_config, key, Some(value))?;
            config::save_file_config(&file_config)?;
            eprintln!("[diffmerge] Set {} = {}", key, value);
            Ok(())
        }
        Some(ConfigAction::Unset { key }) => {
            let mut file_config = config::load_file_config_public()?;
            set_config_value(&mut file_config, key, None)?;
            config::save_file_config(&file_config)?;
            eprintln!("[diffmerge] Unset {}", key);
            Ok(())
        }
    }
}

fn show_effective_config() -> Result<(), DiffMergeError> {
    let json = serde_json::to_string_pretty(&Config::get().summary())?;
    println!("{}", json);
    Ok(())
}

/// Writes `value` into `key`, or clears it when `value` is `None`.
fn set_config_value(
    file_config: &mut FileConfig,
    key: &str,
    value: Option<&str>,
) -> Result<(), DiffMergeError> {
    match key {
        "default_locale" => file_config.default_locale = value.map(str::to_string),
        "translations_path" => file_config.translations_path = value.map(str::to_string),
        "read_only" => file_config.read_only = value.map(parse_bool).transpose()?,
        "max_refinements" => {
            file_config.max_refinements = value.map(|v| parse_count(key, v)).transpose()?
        }
        "max_input_bytes" => {
            file_config.max_input_bytes = value.map(|v| parse_count(key, v)).transpose()?
        }
        _ => {
            return Err(DiffMergeError::ConfigError(format!(
                "Unknown config key: {}. Valid keys: default_locale, read_only, \
                 translations_path, max_refinements, max_input_bytes",
                key
            )));
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, DiffMergeError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(DiffMergeError::ConfigError(format!(
            "Invalid boolean value: '{}'. Expected true/false",
            value
        ))),
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, DiffMergeError> {
    value.trim().parse::<usize>().map_err(|_| {
        DiffMergeError::ConfigError(format!(
            "Invalid value for {}: '{}'. Expected a non-negative integer",
            key, value
        ))
    })
}
