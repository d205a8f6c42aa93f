//! The `kernel.json` descriptor Jupyter reads to launch the kernel.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{DISPLAY_NAME, KERNEL_BIN, KERNEL_NAME};

/// Descriptor filename inside a kernelspec directory.
pub const KERNEL_JSON: &str = "kernel.json";

/// Environment key the kernel reads for its default log directory.
pub const LOGDIR_DEFAULT_KEY: &str = "LOGDIR_DEFAULT";

/// Flat kernelspec descriptor, serialized once at install time.
#[derive(Debug, Clone, Serialize)]
pub struct KernelSpec {
    pub argv: Vec<String>,
    pub display_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

impl KernelSpec {
    /// Build the descriptor for the SPARQL kernel.
    ///
    /// The launch argv names the kernel executable by absolute path when it
    /// can be found on PATH, so the spec keeps working regardless of the
    /// environment Jupyter itself runs under. `{connection_file}` is the
    /// placeholder Jupyter substitutes at launch time.
    pub fn new(logdir: Option<&str>) -> Self {
        let argv = vec![
            kernel_executable().display().to_string(),
            "-f".to_string(),
            "{connection_file}".to_string(),
        ];

        let env = logdir.map(|dir| {
            let mut env = BTreeMap::new();
            env.insert(LOGDIR_DEFAULT_KEY.to_string(), dir.to_string());
            env
        });

        KernelSpec {
            argv,
            display_name: DISPLAY_NAME.to_string(),
            name: KERNEL_NAME.to_string(),
            env,
        }
    }

    /// Write the descriptor as `kernel.json` under `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(KERNEL_JSON);
        let bytes = serde_json::to_vec_pretty(self).context("serializing kernel spec")?;
        fs::write(&path, bytes)
            .with_context(|| format!("writing kernel spec '{}'", path.display()))?;
        Ok(path)
    }
}

fn kernel_executable() -> PathBuf {
    which::which(KERNEL_BIN).unwrap_or_else(|_| PathBuf::from(KERNEL_BIN))
}
