//! Reads a project `.env` into a key-value map. Nothing is written to the environment here;
//! merging happens in [`crate::load_and_apply`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` inside `dir` if given, else inside the current directory. `None` when there is no file.
fn dotenv_file(dir: Option<&Path>) -> Option<PathBuf> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Strips one pair of matching surrounding quotes. Double quotes honour `\"`.
fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return raw[1..raw.len() - 1].replace("\\\"", "\"");
    }
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    raw.to_string()
}

/// Parses `KEY=VALUE` lines.
///
/// Blank lines and lines starting with `#` are skipped, an optional leading `export ` is
/// ignored, and lines without `=` or with an empty key are dropped. A `#` inside a value is
/// kept. No multiline values.
pub(crate) fn parse(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim())))
        })
        .collect()
}

/// Loads `.env` from `dir` (or the current directory). A missing file yields an empty map.
pub fn load_env_map(dir: Option<&Path>) -> std::io::Result<HashMap<String, String>> {
    let Some(path) = dotenv_file(dir) else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path)?;
    Ok(parse(&content))
}
