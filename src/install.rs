//! Install/remove orchestration: kernelspec directory, logo resources and
//! the custom.css splice.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::css::{self, CssInstall, CssRemove};
use crate::{paths, resources, spec::KernelSpec, KERNEL_NAME, PKG_NAME};

/// Where the kernelspec (and its custom.css) goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Per-user Jupyter directories.
    User,
    /// `<prefix>/share/jupyter`, for virtualenv-style installs.
    Prefix(PathBuf),
    /// System-wide `/usr/local/share/jupyter`.
    System,
}

#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub location: Location,
    /// Overwrite an already-installed kernelspec directory.
    pub replace: bool,
    /// Default log directory injected into the kernelspec env block.
    pub logdir: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RemoveOptions {
    pub location: Location,
}

/// Install the kernelspec, its resources and the notebook CSS.
///
/// The spec directory is assembled in a temp directory first and copied
/// into place as one unit, so a half-written kernelspec is never visible
/// under the kernels dir.
pub fn install(opts: &InstallOptions) -> Result<PathBuf> {
    println!("[kernelspec] installing SPARQL kernel");

    let staging = TempDir::new().context("creating staging directory")?;
    make_world_readable(staging.path())?;

    KernelSpec::new(opts.logdir.as_deref()).write_to(staging.path())?;
    resources::install_kernel_resources(staging.path());

    let dest = paths::kernels_dir(&opts.location)?.join(KERNEL_NAME);
    install_spec_dir(staging.path(), &dest, opts.replace)?;
    println!("[kernelspec] installed into {}", dest.display());

    let css_dir = paths::custom_css_dir(&opts.location)?;
    match css::install_custom_css(&css_dir, PKG_NAME, resources::kernel_css())? {
        CssInstall::Installed => {
            println!("[kernelspec] CSS installed into {}", css_dir.display())
        }
        CssInstall::AlreadyInstalled => {
            println!("[kernelspec] CSS already present in {}", css_dir.display())
        }
    }

    Ok(dest)
}

/// Remove the kernelspec directory and un-splice the notebook CSS.
pub fn remove(opts: &RemoveOptions) -> Result<()> {
    let dest = paths::kernels_dir(&opts.location)?.join(KERNEL_NAME);
    if !dest.is_dir() {
        bail!(
            "kernel '{}' is not installed under '{}'",
            KERNEL_NAME,
            dest.display()
        );
    }
    fs::remove_dir_all(&dest)
        .with_context(|| format!("removing kernelspec directory '{}'", dest.display()))?;
    println!("[kernelspec] removed {}", dest.display());

    let css_dir = paths::custom_css_dir(&opts.location)?;
    match css::remove_custom_css(&css_dir, PKG_NAME)? {
        CssRemove::Removed => println!("[kernelspec] CSS removed from {}", css_dir.display()),
        CssRemove::NotFound => {
            println!("[kernelspec] no CSS block found in {}", css_dir.display())
        }
    }

    Ok(())
}

/// Copy the staged kernelspec into `<kernels>/<name>`.
fn install_spec_dir(staging: &Path, dest: &Path, replace: bool) -> Result<()> {
    if dest.exists() {
        if !replace {
            bail!(
                "kernelspec already installed at '{}'; pass --replace to overwrite",
                dest.display()
            );
        }
        fs::remove_dir_all(dest).with_context(|| {
            format!("removing existing kernelspec directory '{}'", dest.display())
        })?;
    }

    copy_dir_recursive(staging, dest)
        .with_context(|| format!("installing kernelspec into '{}'", dest.display()))
}

/// Recursively copy a directory tree.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

// Temp dirs start off as 0700, not world readable.
fn make_world_readable(dir: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("setting permissions on '{}'", dir.display()))?;
    }
    Ok(())
}
