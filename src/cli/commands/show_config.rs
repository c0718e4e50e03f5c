//! Print the effective configuration

use std::path::Path;

use crate::cli::app::ServerOverrides;

/// Print the configuration the server would run with
pub fn show_config(config_path: Option<&Path>, overrides: &ServerOverrides) -> anyhow::Result<()> {
    let config = super::load_config(config_path, overrides)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
