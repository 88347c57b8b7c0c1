//! Configuration commands.
//!
//! - `config show`: display the current configuration
//! - `config set`: set a value by key
//! - `config get`: print a value by key

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::Result;
use crate::paths::config_path;

/// Show current configuration.
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".cyan().bold());
    println!("  {}: {}", "api_base_url".cyan(), config.api_base_url);
    println!("  {}: {}s", "request_timeout".cyan(), config.request_timeout);
    println!();
    println!("{}", format!("Config file: {}", config_path().display()).dimmed());

    Ok(())
}

/// Set a configuration value and persist it.
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    println!("Set {}", key.cyan());
    Ok(())
}

/// Print a single configuration value.
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}
