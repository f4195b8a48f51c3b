//! Configuration for affirm.
//!
//! Two steps, both run once at process start:
//!
//! 1. [`load_and_apply`] merges a project `.env` and `$XDG_CONFIG_HOME/<app>/config.toml`
//!    (`[env]` table) into the process environment, with priority
//!    **existing env > .env > XDG**.
//! 2. [`Settings::from_env`] reads the merged environment into an immutable [`Settings`];
//!    it fails when `OPENAI_API_KEY` is missing so the server never starts without it.

mod dotenv;
mod settings;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use settings::{
    ApiKey, Settings, SettingsError, DEFAULT_ADDR, DEFAULT_FRONTEND_ORIGIN, DEFAULT_MODEL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT,
};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Picks, for every key known to either file, the value to set: `.env` first, then XDG.
/// Keys for which `is_set` returns true are left out.
fn merge(
    dotenv: &HashMap<String, String>,
    xdg: &HashMap<String, String>,
    is_set: impl Fn(&str) -> bool,
) -> HashMap<String, String> {
    let mut out: HashMap<String, String> = xdg
        .iter()
        .filter(|(k, _)| !is_set(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (k, v) in dotenv {
        if !is_set(k) {
            out.insert(k.clone(), v.clone());
        }
    }
    out
}

/// Loads `.env` (from `dotenv_dir`, else the current directory) and the XDG `config.toml`
/// for `app_name`, then sets every key that is not already present in the environment.
pub fn load_and_apply(app_name: &str, dotenv_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg = xdg_toml::load_env_map(app_name)?;
    let dotenv = dotenv::load_env_map(dotenv_dir).map_err(LoadError::DotenvRead)?;
    for (key, value) in merge(&dotenv, &xdg, |k| std::env::var_os(k).is_some()) {
        std::env::set_var(key, value);
    }
    Ok(())
}
