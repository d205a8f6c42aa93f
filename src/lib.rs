//! Setup tool for the SPARQL Jupyter kernel.
//!
//! Installing the kernel means three things:
//!
//! - **Kernelspec** - a `kernel.json` descriptor telling Jupyter how to
//!   launch the kernel, placed under `<kernels-dir>/sparql/`
//! - **Resources** - the two logo PNGs Jupyter shows in the launcher,
//!   copied next to the descriptor
//! - **Custom CSS** - a stylesheet fragment for kernel output, spliced
//!   into the shared `custom.css` between sentinel comment lines
//!
//! Removal undoes all three. The CSS splice is the only edit of a
//! user-owned file, so it is guarded: at most one framed block per package
//! tag, replaced via scratch-file-then-rename, and the inverse operation
//! restores the file to its pre-install bytes.

pub mod css;
pub mod install;
pub mod paths;
pub mod resources;
pub mod spec;

pub use install::{install, remove, InstallOptions, Location, RemoveOptions};

/// Internal kernel name, also the kernelspec directory name.
pub const KERNEL_NAME: &str = "sparql";

/// Name shown in the notebook launcher.
pub const DISPLAY_NAME: &str = "SPARQL";

/// Package tag used in the CSS sentinel comments.
pub const PKG_NAME: &str = "sparqlkernel";

/// Executable the generated kernelspec launches.
pub const KERNEL_BIN: &str = "sparql-kernel";

/// Environment variable supplying the default kernel log directory.
pub const LOGDIR_ENV: &str = "LOGDIR";
