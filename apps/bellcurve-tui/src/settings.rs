//! Config file discovery for the TUI

use std::path::{Path, PathBuf};

use bellcurve_core::ExplorerConfig;

/// `<config_dir>/bellcurve/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bellcurve").join("config.toml"))
}

/// Load the config at `path`, falling back to defaults when it is absent or
/// invalid
pub fn load_config(path: Option<&Path>) -> ExplorerConfig {
    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("No config file found, using defaults");
        return ExplorerConfig::default();
    };

    match ExplorerConfig::load(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config {:?}: {}, using defaults", path, e);
            ExplorerConfig::default()
        }
    }
}
