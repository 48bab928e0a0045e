use crate::error::{CrsError, Result};
use crate::types::config::CrsConfig;
use crate::types::profile::ApplicantProfile;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "crs.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".crs/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/crs/config.toml";

/// Loads layered settings for profiles stored under `root`.
/// Returns `None` when no settings file exists at any layer.
pub fn load_config(root: &Path) -> Result<Option<CrsConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CrsConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;
    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if !found {
        return Ok(None);
    }

    let cfg: CrsConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CrsError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Reads an applicant profile and refreshes its derived fields.
pub fn load_profile(path: &Path) -> Result<ApplicantProfile> {
    if !path.exists() {
        return Err(CrsError::ProfileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let mut profile: ApplicantProfile = toml::from_str(&content)
        .map_err(|e| CrsError::ProfileParse(format!("{}: {}", path.display(), e)))?;
    profile.refresh_second_language_threshold();
    debug!(path = %path.display(), "loaded applicant profile");
    Ok(profile)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "merged settings layer");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CrsError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
