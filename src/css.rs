//! Sentinel-framed splice of the kernel stylesheet into Jupyter's shared
//! `custom.css`.
//!
//! The inserted fragment is framed by comment lines of the form
//! `/* @{KERNEL} <tag> START ======================== */` (and `END`), so
//! the block can be located and stripped later without disturbing anything
//! the user put in the file. Invariant: at most one framed block per tag.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Shared stylesheet filename inside a Jupyter `custom/` directory.
pub const CSS_FILE: &str = "custom.css";

const START_SUFFIX: &str = "START ======================== */\n";
const END_SUFFIX: &str = "END ======================== */\n";

/// Result of a CSS install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssInstall {
    /// The fragment was spliced in.
    Installed,
    /// The sentinel for this tag is already present; file left untouched.
    AlreadyInstalled,
}

/// Result of a CSS removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssRemove {
    /// The framed block was stripped out.
    Removed,
    /// No START sentinel for this tag; file left untouched.
    NotFound,
}

/// Comment prefix framing a kernel's block inside custom.css.
fn frame_prefix(tag: &str) -> String {
    format!("/* @{{KERNEL}} {tag} ")
}

/// Splice `fragment` into `<destdir>/custom.css`, framed by sentinel
/// comments tagged with `tag`.
///
/// The block goes at the top of the file; existing contents follow it
/// unchanged. A missing custom.css is treated as empty, so the result is
/// just the framed fragment. When the tag is already present anywhere in
/// the file, nothing is written.
///
/// The replacement is staged in a scratch file and renamed into place.
pub fn install_custom_css(destdir: &Path, tag: &str, fragment: &str) -> Result<CssInstall> {
    fs::create_dir_all(destdir)
        .with_context(|| format!("creating custom CSS directory '{}'", destdir.display()))?;

    let custom = destdir.join(CSS_FILE);
    let prefix = frame_prefix(tag);

    let existing = match fs::read_to_string(&custom) {
        Ok(contents) => {
            if contents.lines().any(|line| line.contains(&prefix)) {
                return Ok(CssInstall::AlreadyInstalled);
            }
            contents
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("reading custom CSS '{}'", custom.display()))
        }
    };

    let mut out = String::with_capacity(
        prefix.len() * 2 + START_SUFFIX.len() + END_SUFFIX.len() + fragment.len() + existing.len() + 1,
    );
    out.push_str(&prefix);
    out.push_str(START_SUFFIX);
    out.push_str(fragment);
    if !fragment.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&prefix);
    out.push_str(END_SUFFIX);
    out.push_str(&existing);

    replace_via_scratch(&custom, &out)?;
    Ok(CssInstall::Installed)
}

/// Strip the framed block tagged with `tag` from `<destdir>/custom.css`.
///
/// Lines from the START sentinel through the END sentinel (inclusive) are
/// dropped; every other line passes through byte-identical. A missing
/// custom.css is a hard error: there is no file to scan.
pub fn remove_custom_css(destdir: &Path, tag: &str) -> Result<CssRemove> {
    let custom = destdir.join(CSS_FILE);
    let source = fs::read_to_string(&custom)
        .with_context(|| format!("reading custom CSS '{}'", custom.display()))?;

    let prefix = frame_prefix(tag);
    let start_marker = format!("{prefix}START");
    let end_marker = format!("{prefix}END");

    let mut out = String::with_capacity(source.len());
    let mut copying = true;
    let mut found = false;
    for line in source.split_inclusive('\n') {
        if line.starts_with(&start_marker) {
            copying = false;
            found = true;
        } else if line.starts_with(&end_marker) {
            copying = true;
        } else if copying {
            out.push_str(line);
        }
    }

    if !found {
        return Ok(CssRemove::NotFound);
    }

    replace_via_scratch(&custom, &out)?;
    Ok(CssRemove::Removed)
}

/// Write `contents` to `<target>-new` and rename it over `target`.
fn replace_via_scratch(target: &Path, contents: &str) -> Result<()> {
    let mut scratch = target.as_os_str().to_owned();
    scratch.push("-new");
    let scratch = Path::new(&scratch);

    fs::write(scratch, contents)
        .with_context(|| format!("writing scratch file '{}'", scratch.display()))?;
    fs::rename(scratch, target).with_context(|| {
        format!(
            "renaming '{}' over '{}'",
            scratch.display(),
            target.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TAG: &str = "sparqlkernel";
    const FRAGMENT: &str = ".krn-spql th { color: #fff; }\n";

    fn css_path(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join(CSS_FILE)
    }

    #[test]
    fn install_into_missing_file_writes_framed_fragment() {
        let dir = TempDir::new().unwrap();

        let outcome = install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();
        assert_eq!(outcome, CssInstall::Installed);

        let written = fs::read_to_string(css_path(&dir)).unwrap();
        assert_eq!(
            written,
            "/* @{KERNEL} sparqlkernel START ======================== */\n\
             .krn-spql th { color: #fff; }\n\
             /* @{KERNEL} sparqlkernel END ======================== */\n"
        );
    }

    #[test]
    fn install_prepends_before_existing_content() {
        let dir = TempDir::new().unwrap();
        fs::write(css_path(&dir), "body { margin: 0; }\n").unwrap();

        install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();

        let written = fs::read_to_string(css_path(&dir)).unwrap();
        assert!(written.starts_with("/* @{KERNEL} sparqlkernel START"));
        assert!(written.ends_with("body { margin: 0; }\n"));
    }

    #[test]
    fn second_install_is_a_noop() {
        let dir = TempDir::new().unwrap();

        install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();
        let after_first = fs::read(css_path(&dir)).unwrap();

        let outcome = install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();
        assert_eq!(outcome, CssInstall::AlreadyInstalled);
        assert_eq!(fs::read(css_path(&dir)).unwrap(), after_first);
    }

    #[test]
    fn remove_restores_pre_install_bytes() {
        let dir = TempDir::new().unwrap();
        let original = "/* user rules */\nbody { color: #111; }\n\n.cell { padding: 2px; }\n";
        fs::write(css_path(&dir), original).unwrap();

        install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();
        let outcome = remove_custom_css(dir.path(), TAG).unwrap();

        assert_eq!(outcome, CssRemove::Removed);
        assert_eq!(fs::read_to_string(css_path(&dir)).unwrap(), original);
    }

    #[test]
    fn remove_without_sentinel_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "body { margin: 0; }\n";
        fs::write(css_path(&dir), original).unwrap();

        let outcome = remove_custom_css(dir.path(), TAG).unwrap();

        assert_eq!(outcome, CssRemove::NotFound);
        assert_eq!(fs::read_to_string(css_path(&dir)).unwrap(), original);
        assert!(
            !dir.path().join("custom.css-new").exists(),
            "no scratch file may survive a not-found removal"
        );
    }

    #[test]
    fn remove_on_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(remove_custom_css(dir.path(), TAG).is_err());
    }

    #[test]
    fn remove_only_strips_the_matching_tag() {
        let dir = TempDir::new().unwrap();

        install_custom_css(dir.path(), "otherkernel", ".other { }\n").unwrap();
        install_custom_css(dir.path(), TAG, FRAGMENT).unwrap();

        remove_custom_css(dir.path(), TAG).unwrap();

        let written = fs::read_to_string(css_path(&dir)).unwrap();
        assert!(!written.contains("sparqlkernel"));
        assert!(written.contains("/* @{KERNEL} otherkernel START"));
        assert!(written.contains(".other { }"));
    }

    #[test]
    fn fragment_without_trailing_newline_still_frames_cleanly() {
        let dir = TempDir::new().unwrap();

        install_custom_css(dir.path(), TAG, ".krn-spql td { padding: 1px; }").unwrap();

        let written = fs::read_to_string(css_path(&dir)).unwrap();
        assert!(written.contains(".krn-spql td { padding: 1px; }\n/* @{KERNEL} sparqlkernel END"));

        // and the block still strips out completely
        remove_custom_css(dir.path(), TAG).unwrap();
        assert_eq!(fs::read_to_string(css_path(&dir)).unwrap(), "");
    }
}
