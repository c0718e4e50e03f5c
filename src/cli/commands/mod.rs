//! Command implementations

mod serve;
mod show_config;

use std::path::Path;

use todoapp::AppConfig;

use super::app::ServerOverrides;

pub use serve::serve;
pub use show_config::show_config;

/// Load file and environment settings, apply flags, then validate
fn load_config(path: Option<&Path>, overrides: &ServerOverrides) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(path)?;
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}
