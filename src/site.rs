//! # Site Assets and Redirect Page
//!
//! Filesystem plumbing for a publish run: copying the freshly built site
//! into the version-named subdirectory of the checkout, and regenerating the
//! root `index.html` that redirects visitors to the default version.
//!
//! Both operations fully overwrite whatever a previous run left behind; no
//! file is ever patched in place.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy the built site from `src` into `dst`, overwriting.
///
/// Intermediate directories are created as needed. Returns the number of
/// files copied. Republishing the same version label replaces its prior
/// contents file by file.
pub fn copy_assets(src: &Path, dst: &Path) -> Result<u64> {
    if !src.is_dir() {
        return Err(Error::Assets {
            src: src.display().to_string(),
            dst: dst.display().to_string(),
            message: "source is not a directory".to_string(),
        });
    }

    let mut copied = 0u64;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Path {
                message: format!("{}: {}", entry.path().display(), e),
            })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::Assets {
                src: entry.path().display().to_string(),
                dst: target.display().to_string(),
                message: e.to_string(),
            })?;
            copied += 1;
        }
    }

    log::info!(
        "Copied {} files from {} to {}",
        copied,
        src.display(),
        dst.display()
    );
    Ok(copied)
}

/// Regenerate the root redirect page in `dir`.
///
/// Writes an `index.html` that sends visitors to `<default_version>/` via a
/// meta refresh, a script redirect (which preserves the URL hash), and a
/// manual fallback link. Prior content is fully replaced.
pub fn write_redirect(dir: &Path, default_version: &str) -> Result<()> {
    let html = redirect_page(default_version);
    fs::write(dir.join("index.html"), html)?;
    Ok(())
}

fn redirect_page(default_version: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Redirecting</title>
    <meta http-equiv="refresh" content="0; url=./{v}/">
    <script>window.location.replace("./{v}/" + window.location.hash);</script>
  </head>
  <body>
    <p>If you are not redirected automatically, follow
      <a href="./{v}/">this link to the {v} documentation</a>.</p>
  </body>
</html>
"#,
        v = default_version
    )
}
