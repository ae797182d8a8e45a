//! # Reference Normalization
//!
//! Maps the raw git reference that triggered a build (`GITHUB_REF` or the
//! `--ref` flag) into a short, filesystem-safe version label that names the
//! subdirectory a site build is published under.
//!
//! Three reference shapes are recognized:
//!
//! - `refs/tags/<tag>`: release tags. Slashes in the tag are replaced with
//!   `-`, then the result is canonicalized through semver cleaning when it
//!   parses (`v1.2.3` becomes `1.2.3`). Tags that are not valid semver keep
//!   the slash-substituted text and produce a warning.
//! - `refs/heads/<branch>`: branch builds. Every run of characters outside
//!   `[A-Za-z0-9._-]` collapses to a single `-`.
//! - `refs/pull/<n>/merge`: pull-request previews, labeled `pr-<n>`.
//!
//! Anything else passes through unchanged with a warning. Normalization is
//! total: it never fails, and warnings go through the `log` facade rather
//! than the return value.

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

/// Characters outside this class are collapsed to `-` in branch labels.
static BRANCH_SANITIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("hardcoded pattern"));

/// Parse a version string as semver, tolerating a leading `v`.
///
/// Common tag formats: `v1.0.0`, `1.0.0`, `v2.1.3-alpha`. Returns `None` for
/// anything the `semver` crate rejects (including two-component versions like
/// `1.0`).
pub fn clean_semver(text: &str) -> Option<Version> {
    let version_str = text.strip_prefix('v').unwrap_or(text);
    Version::parse(version_str).ok()
}

/// Derive the version label for a raw trigger reference.
///
/// Total over all inputs: unrecognized reference shapes are returned
/// unchanged after a warning. The label for any recognized shape is
/// filesystem-safe (no path separators) and non-empty.
pub fn version_label(git_ref: &str) -> String {
    if let Some(tag) = git_ref.strip_prefix("refs/tags/") {
        if tag.is_empty() {
            return fallback_label(git_ref);
        }
        let label = tag.replace('/', "-");
        match clean_semver(&label) {
            Some(version) => version.to_string(),
            None => {
                log::warn!("{} is not a valid semver. More info: https://semver.org/", label);
                label
            }
        }
    } else if let Some(branch) = git_ref.strip_prefix("refs/heads/") {
        if branch.is_empty() {
            return fallback_label(git_ref);
        }
        BRANCH_SANITIZE.replace_all(branch, "-").into_owned()
    } else if let Some(pull) = git_ref.strip_prefix("refs/pull/") {
        if pull.is_empty() {
            return fallback_label(git_ref);
        }
        let number = pull.strip_suffix("/merge").unwrap_or(pull);
        // Non-merge pull refs (e.g. 42/head) would otherwise leak a slash
        // into the label.
        format!("pr-{}", number.replace('/', "-"))
    } else {
        log::warn!("{} is not a recognized ref", git_ref);
        git_ref.to_string()
    }
}

/// Last-resort label for refs whose recognized prefix has an empty residue
/// (e.g. a literal `refs/heads/`). Keeps the label non-empty and free of
/// path separators.
fn fallback_label(git_ref: &str) -> String {
    log::warn!("{} is not a recognized ref", git_ref);
    git_ref.replace('/', "-")
}
