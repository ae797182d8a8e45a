//! # Version Manifest Reconciliation
//!
//! The publishing branch carries a small JSON manifest, `versions.json`,
//! tracking every version label published so far and which one is "stable"
//! (the default redirect target). Each publish run loads the manifest from
//! the checkout, inserts the new label if absent, recomputes `stable`, and
//! writes the whole document back.
//!
//! ## The stable rule
//!
//! `stable` only moves when the freshly published label is itself a valid
//! semantic version *and* the maximum of the valid-semver subset of all known
//! labels. Branch builds and PR previews (`pr-N`) are transient and unordered
//! relative to releases, so they never become the default redirect target,
//! except through the seeded-manifest fallback, where the new label is all we
//! have.
//!
//! ## Fail-soft loading
//!
//! A missing or unparsable manifest is not an error: the run synthesizes a
//! fresh one seeded with [`SEED_VERSIONS`] and continues. Only the final
//! write can fail the run. The write fully replaces the file from the
//! in-memory value, so a crash mid-run leaves either the old document or the
//! new one, never a torn mix.

use crate::error::Result;
use crate::refs::clean_semver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the manifest inside the publishing-branch checkout.
pub const MANIFEST_FILE: &str = "versions.json";

/// Placeholder labels used when synthesizing a manifest from scratch.
///
/// Kept verbatim from the original action's behavior; note `v0.2.0rc1` is
/// intentionally not valid semver and will never influence `stable`.
pub const SEED_VERSIONS: [&str; 3] = ["v0.0.1", "v0.1.0", "v0.2.0rc1"];

/// The persisted version manifest.
///
/// Serialized as `{"stable": "<label>", "versions": ["<label>", ...]}`. Both
/// fields default permissively so partially formed documents still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// The version label default visitors are redirected to.
    #[serde(default)]
    pub stable: String,
    /// All known version labels, in insertion order, each at most once.
    #[serde(default)]
    pub versions: Vec<String>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Returns `None` when the file is missing or does not parse as a
    /// manifest; callers must consciously branch on that case.
    pub fn load(path: &Path) -> Option<Manifest> {
        let text = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&text) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                log::warn!("Ignoring unparsable manifest {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Synthesize a fresh manifest for a checkout that has none.
    ///
    /// The new label becomes stable and the version list starts from the
    /// seed placeholders.
    pub fn seeded(label: &str) -> Manifest {
        Manifest {
            stable: label.to_string(),
            versions: SEED_VERSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append `label` to the version list unless it is already present.
    fn insert(&mut self, label: &str) {
        if self.versions.is_empty() {
            self.versions.push(label.to_string());
        } else if !self.versions.iter().any(|v| v == label) {
            self.versions.push(label.to_string());
        }
    }

    /// The subset of known labels that parse as semver, ascending.
    pub fn semver_versions(&self) -> Vec<semver::Version> {
        let mut parsed: Vec<semver::Version> = self
            .versions
            .iter()
            .filter_map(|v| clean_semver(v))
            .collect();
        parsed.sort();
        parsed
    }

    /// Recompute `stable` after inserting `label`.
    ///
    /// `stable` moves to `label` only when `label` is the maximum of the
    /// valid-semver subset; an empty `stable` is backfilled with `label`
    /// unconditionally so the field is always populated.
    fn recompute_stable(&mut self, label: &str) {
        if let Some(new_version) = clean_semver(label) {
            if let Some(max) = self.semver_versions().into_iter().next_back() {
                if new_version == max {
                    self.stable = label.to_string();
                }
            }
        }
        if self.stable.is_empty() {
            self.stable = label.to_string();
        }
    }

    /// Persist the manifest to `path`, fully replacing prior contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Reconcile the manifest in `checkout_dir` with a freshly published label.
///
/// Loads `versions.json` from the checkout (seeding a fresh manifest when it
/// is missing or corrupt), records `label`, recomputes `stable`, writes the
/// manifest back, and returns it for logging by the caller. Idempotent on
/// the version list: reconciling the same label twice adds it once.
pub fn reconcile(checkout_dir: &Path, label: &str) -> Result<Manifest> {
    let path = checkout_dir.join(MANIFEST_FILE);
    let mut manifest = Manifest::load(&path).unwrap_or_else(|| {
        log::warn!(
            "No usable manifest at {}; starting a fresh one",
            path.display()
        );
        Manifest::seeded(label)
    });

    manifest.insert(label);
    manifest.recompute_stable(label);
    manifest.save(&path)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, json: &str) {
        fs::write(dir.join(MANIFEST_FILE), json).unwrap();
    }

    fn read_manifest(dir: &Path) -> Manifest {
        Manifest::load(&dir.join(MANIFEST_FILE)).unwrap()
    }

    #[test]
    fn test_new_release_becomes_stable() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"1.0.0","versions":["1.0.0"]}"#);

        let manifest = reconcile(temp.path(), "1.1.0").unwrap();

        assert_eq!(manifest.stable, "1.1.0");
        assert_eq!(manifest.versions, vec!["1.0.0", "1.1.0"]);
        assert_eq!(read_manifest(temp.path()), manifest);
    }

    #[test]
    fn test_older_release_does_not_take_stable() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"2.0.0","versions":["2.0.0"]}"#);

        let manifest = reconcile(temp.path(), "1.5.0").unwrap();

        assert_eq!(manifest.stable, "2.0.0");
        assert_eq!(manifest.versions, vec!["2.0.0", "1.5.0"]);
    }

    #[test]
    fn test_pr_label_never_becomes_stable() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"2.0.0","versions":["2.0.0"]}"#);

        let manifest = reconcile(temp.path(), "pr-7").unwrap();

        assert_eq!(manifest.stable, "2.0.0");
        assert_eq!(manifest.versions, vec!["2.0.0", "pr-7"]);
    }

    #[test]
    fn test_branch_label_never_becomes_stable() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{"stable":"1.0.0","versions":["1.0.0","feature-x"]}"#,
        );

        let manifest = reconcile(temp.path(), "main").unwrap();

        assert_eq!(manifest.stable, "1.0.0");
        assert_eq!(manifest.versions, vec!["1.0.0", "feature-x", "main"]);
    }

    #[test]
    fn test_missing_manifest_is_seeded() {
        let temp = TempDir::new().unwrap();

        let manifest = reconcile(temp.path(), "0.3.0").unwrap();

        assert_eq!(manifest.stable, "0.3.0");
        assert_eq!(
            manifest.versions,
            vec!["v0.0.1", "v0.1.0", "v0.2.0rc1", "0.3.0"]
        );
        // And the seeded manifest is persisted
        assert_eq!(read_manifest(temp.path()), manifest);
    }

    #[test]
    fn test_corrupt_manifest_is_seeded() {
        testing_logger::setup();
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "{not json");

        let manifest = reconcile(temp.path(), "pr-12").unwrap();

        assert_eq!(manifest.stable, "pr-12");
        assert!(manifest.versions.contains(&"pr-12".to_string()));
        testing_logger::validate(|captured| {
            assert!(captured
                .iter()
                .any(|l| l.level == log::Level::Warn && l.body.contains("fresh one")));
        });
    }

    #[test]
    fn test_reconcile_is_idempotent_on_versions() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"1.0.0","versions":["1.0.0"]}"#);

        reconcile(temp.path(), "1.1.0").unwrap();
        let manifest = reconcile(temp.path(), "1.1.0").unwrap();

        let count = manifest.versions.iter().filter(|v| *v == "1.1.0").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_missing_versions_field_defaults_to_label() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"1.0.0"}"#);

        let manifest = reconcile(temp.path(), "1.1.0").unwrap();

        assert_eq!(manifest.versions, vec!["1.1.0"]);
        assert_eq!(manifest.stable, "1.1.0");
    }

    #[test]
    fn test_missing_stable_is_backfilled() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"versions":["feature-a"]}"#);

        let manifest = reconcile(temp.path(), "feature-b").unwrap();

        assert_eq!(manifest.stable, "feature-b");
        assert_eq!(manifest.versions, vec!["feature-a", "feature-b"]);
    }

    #[test]
    fn test_stable_always_populated() {
        for (json, label) in [
            (r#"{}"#, "pr-1"),
            (r#"{"versions":[]}"#, "main"),
            (r#"{"stable":"","versions":["x"]}"#, "y"),
        ] {
            let temp = TempDir::new().unwrap();
            write_manifest(temp.path(), json);
            let manifest = reconcile(temp.path(), label).unwrap();
            assert!(!manifest.stable.is_empty(), "input {:?}", json);
        }
    }

    #[test]
    fn test_v_prefixed_versions_participate_in_stable_rule() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{"stable":"v0.1.0","versions":["v0.0.1","v0.1.0"]}"#,
        );

        let manifest = reconcile(temp.path(), "0.2.0").unwrap();

        assert_eq!(manifest.stable, "0.2.0");
    }

    #[test]
    fn test_prerelease_ordering() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"1.0.0","versions":["1.0.0"]}"#);

        // A prerelease of a later version is still greater than 1.0.0
        let manifest = reconcile(temp.path(), "1.1.0-rc.1").unwrap();
        assert_eq!(manifest.stable, "1.1.0-rc.1");

        // ...but the final release then supersedes it
        let manifest = reconcile(temp.path(), "1.1.0").unwrap();
        assert_eq!(manifest.stable, "1.1.0");
    }

    #[test]
    fn test_semver_versions_sorted_ascending() {
        let manifest = Manifest {
            stable: "2.0.0".to_string(),
            versions: vec![
                "2.0.0".to_string(),
                "v1.0.0".to_string(),
                "main".to_string(),
                "1.5.0".to_string(),
            ],
        };

        let sorted = manifest.semver_versions();
        let rendered: Vec<String> = sorted.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["1.0.0", "1.5.0", "2.0.0"]);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(Manifest::load(&temp.path().join(MANIFEST_FILE)).is_none());
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"stable":"old","versions":["old"]}"#);

        let manifest = Manifest {
            stable: "1.0.0".to_string(),
            versions: vec!["1.0.0".to_string()],
        };
        manifest.save(&temp.path().join(MANIFEST_FILE)).unwrap();

        let text = fs::read_to_string(temp.path().join(MANIFEST_FILE)).unwrap();
        assert!(!text.contains("old"));
        assert!(text.contains("1.0.0"));
    }
}
