//! Reads the `[env]` table of `<config home>/<app>/config.toml`.
//!
//! The config home is `$XDG_CONFIG_HOME` when set, else the platform config dir.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Same as [`load_env_map`] with an explicit config home.
pub(crate) fn load_env_map_in(
    home: &Path,
    app_name: &str,
) -> Result<HashMap<String, String>, LoadError> {
    let path = home.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.env)
}

/// Returns the `[env]` pairs for `app_name`. A missing config home, file, or section yields
/// an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    match config_home() {
        Some(home) => load_env_map_in(&home, app_name),
        None => Ok(HashMap::new()),
    }
}
