//! Versions command implementation
//!
//! Inspects the version manifest of a publishing-branch checkout: prints the
//! stable label and every known version, marking which entries order as
//! valid semantic versions.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use versioned_pages::manifest::{Manifest, MANIFEST_FILE};
use versioned_pages::output::{emoji, OutputConfig};
use versioned_pages::refs::clean_semver;

/// Arguments for the versions command
#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Publishing-branch checkout to read the manifest from
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// Execute the versions command
pub fn execute(args: VersionsArgs, out: &OutputConfig) -> Result<()> {
    let path = args.dir.join(MANIFEST_FILE);
    let Some(manifest) = Manifest::load(&path) else {
        anyhow::bail!("No readable manifest at {}", path.display());
    };

    println!("{} Stable: {}", emoji(out, "⭐", "[STABLE]"), manifest.stable);
    println!("{} Versions:", emoji(out, "📚", "[VERSIONS]"));
    for version in &manifest.versions {
        let kind = if clean_semver(version).is_some() {
            "release"
        } else {
            "preview"
        };
        println!("   {} ({})", version, kind);
    }

    Ok(())
}
