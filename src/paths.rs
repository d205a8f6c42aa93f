//! Jupyter directory resolution.
//!
//! Follows the standard Jupyter conventions: `JUPYTER_DATA_DIR` and
//! `JUPYTER_CONFIG_DIR` override everything; otherwise user installs go
//! under the per-user data dir (`~/.local/share/jupyter` on Linux) and
//! `~/.jupyter`, prefix installs under `<prefix>/share/jupyter`, and
//! system installs under `/usr/local/share/jupyter`.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::install::Location;

pub const DATA_DIR_ENV: &str = "JUPYTER_DATA_DIR";
pub const CONFIG_DIR_ENV: &str = "JUPYTER_CONFIG_DIR";

const SYSTEM_JUPYTER_DIR: &str = "/usr/local/share/jupyter";

/// Directory holding kernelspec directories for `location`.
pub fn kernels_dir(location: &Location) -> Result<PathBuf> {
    let base = match location {
        Location::User => jupyter_data_dir()?,
        Location::Prefix(prefix) => prefix.join("share/jupyter"),
        Location::System => PathBuf::from(SYSTEM_JUPYTER_DIR),
    };
    Ok(base.join("kernels"))
}

/// Directory holding `custom.css` for `location`.
///
/// User installs edit the stylesheet under the Jupyter config dir; prefix
/// and system installs use the shared `custom/` next to the kernels.
pub fn custom_css_dir(location: &Location) -> Result<PathBuf> {
    let base = match location {
        Location::User => jupyter_config_dir()?,
        Location::Prefix(prefix) => prefix.join("share/jupyter"),
        Location::System => PathBuf::from(SYSTEM_JUPYTER_DIR),
    };
    Ok(base.join("custom"))
}

fn jupyter_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let data = dirs::data_dir().context("cannot resolve the per-user data directory")?;
    Ok(data.join("jupyter"))
}

fn jupyter_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = dirs::home_dir().context("cannot resolve the home directory")?;
    Ok(home.join(".jupyter"))
}
