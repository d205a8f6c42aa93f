//! Static resources embedded in the binary: launcher logos and the kernel
//! stylesheet fragment.

use std::fs;
use std::path::Path;

/// Logo files copied into the kernelspec directory.
pub const LOGO_FILES: &[(&str, &[u8])] = &[
    ("logo-64x64.png", include_bytes!("../resources/logo-64x64.png")),
    ("logo-32x32.png", include_bytes!("../resources/logo-32x32.png")),
];

/// CSS fragment spliced into the shared custom.css.
pub fn kernel_css() -> &'static str {
    include_str!("../resources/kernel.css")
}

/// Copy the logo files into `destdir`, best-effort.
///
/// A failed copy is reported on stderr and the batch continues; a missing
/// logo only costs Jupyter a launcher icon, never the install.
pub fn install_kernel_resources(destdir: &Path) {
    for (name, bytes) in LOGO_FILES {
        let dest = destdir.join(name);
        if let Err(e) = fs::write(&dest, bytes) {
            eprintln!("warning: could not install resource '{}': {e}", dest.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn embedded_logos_are_png() {
        for (name, bytes) in LOGO_FILES {
            assert!(bytes.starts_with(PNG_MAGIC), "{name} is not a PNG");
        }
    }

    #[test]
    fn resources_land_in_the_destination() {
        let dir = TempDir::new().unwrap();

        install_kernel_resources(dir.path());

        for (name, bytes) in LOGO_FILES {
            let written = fs::read(dir.path().join(name)).unwrap();
            assert_eq!(&written, bytes);
        }
    }

    #[test]
    fn missing_destination_does_not_abort_the_batch() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("no-such-dir");

        // must not panic; failures go to stderr only
        install_kernel_resources(&gone);
        assert!(!gone.exists());
    }

    #[test]
    fn kernel_css_is_nonempty_and_newline_terminated() {
        let css = kernel_css();
        assert!(!css.is_empty());
        assert!(css.ends_with('\n'));
    }
}
