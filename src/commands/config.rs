//! Config command - inspect the configuration file

use crate::{FindPlaceError, config::FindPlaceConfig};
use std::path::Path;

type Result<T> = std::result::Result<T, FindPlaceError>;

/// Print the active configuration as TOML
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn show(config: &FindPlaceConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the configuration file location (`explicit` wins over the default)
///
/// # Errors
/// Returns an error if the config directory cannot be determined.
pub fn path(explicit: Option<&Path>) -> Result<()> {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", FindPlaceConfig::config_path()?.display()),
    }
    Ok(())
}
