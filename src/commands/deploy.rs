//! Deploy command implementation
//!
//! The deploy command executes the full publish flow:
//! 1. Skip checks (fork-originated trigger, missing source directory)
//! 2. Normalizing the trigger reference into a version label
//! 3. Checking out the publishing branch (or starting fresh)
//! 4. Reconciling the versions.json manifest
//! 5. Copying the built site into the version subdirectory
//! 6. Regenerating the root redirect page
//!
//! A skip is a clean exit: the run reports `skip=true` and succeeds without
//! touching the publishing branch. Committing and pushing the resulting
//! checkout is left to the surrounding workflow; the run reports the
//! checkout directory as its `outputDirectory`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use versioned_pages::output::{emoji, set_output, OutputConfig};
use versioned_pages::{event, git, manifest, refs, site};

/// Arguments for the deploy command
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Directory containing the built site to publish
    #[arg(short, long, value_name = "PATH")]
    pub path: PathBuf,

    /// Trigger reference (refs/tags/..., refs/heads/..., refs/pull/.../merge)
    #[arg(long = "ref", value_name = "REF", env = "GITHUB_REF")]
    pub git_ref: String,

    /// Repository slug as owner/name
    #[arg(long, value_name = "OWNER/NAME", env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Access token used to clone the publishing branch
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Branch the versioned site is published to
    #[arg(long, value_name = "BRANCH", default_value = "gh-pages")]
    pub target_branch: String,

    /// Version label the root redirect points to (defaults to the
    /// reconciled stable version)
    #[arg(long, value_name = "LABEL")]
    pub default_version: Option<String>,

    /// Path to the CI event payload, used for fork detection
    #[arg(long, value_name = "PATH", env = "GITHUB_EVENT_PATH")]
    pub event_payload: Option<PathBuf>,

    /// Directory to create the checkout under (defaults to the system temp dir)
    #[arg(long, value_name = "PATH", env = "RUNNER_TEMP")]
    pub temp_root: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the deploy command
pub fn execute(args: DeployArgs, out: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    // Never exercise repository credentials on behalf of a fork
    if let Some(payload) = &args.event_payload {
        if event::is_fork(payload) {
            log::warn!("Skip deployment on fork");
            set_output("skip", "true");
            if !args.quiet {
                println!("{} Skipped: fork-originated trigger", emoji(out, "⏭️", "[SKIP]"));
            }
            return Ok(());
        }
    }

    if !args.path.is_dir() {
        log::warn!("The source directory {} doesn't exist", args.path.display());
        set_output("skip", "true");
        if !args.quiet {
            println!(
                "{} Skipped: source directory {} doesn't exist",
                emoji(out, "⏭️", "[SKIP]"),
                args.path.display()
            );
        }
        return Ok(());
    }

    // Extract the version label. This will be a tag, branch, or PR label.
    let label = refs::version_label(&args.git_ref);
    if !args.quiet {
        println!("{} Working on version: {}", emoji(out, "🔖", "[VERSION]"), label);
    }

    let Some((owner, repo)) = args.repository.split_once('/') else {
        anyhow::bail!(
            "Repository slug must be owner/name, got: {}",
            args.repository
        );
    };
    let url = git::remote_url(owner, repo, &args.token);

    // Check out the existing publishing branch if possible
    let temp_root = args.temp_root.clone().unwrap_or_else(std::env::temp_dir);
    let checkout = git::checkout_branch(&url, &args.repository, &args.target_branch, &temp_root)?;

    // Update the version manifest
    let manifest = manifest::reconcile(checkout.path(), &label)?;
    if !args.quiet {
        println!(
            "{} Versions: {}",
            emoji(out, "📚", "[VERSIONS]"),
            manifest.versions.join(", ")
        );
    }

    // Copy over the built site and regenerate the redirect
    let copied = site::copy_assets(&args.path, &checkout.path().join(&label))?;
    let default_version = args
        .default_version
        .clone()
        .unwrap_or_else(|| manifest.stable.clone());
    site::write_redirect(checkout.path(), &default_version)?;

    set_output("outputDirectory", &checkout.path().display().to_string());

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Published {} ({} files) in {:.2}s",
            emoji(out, "✅", "[OK]"),
            label,
            copied,
            duration.as_secs_f64()
        );
        println!("   Redirecting to: {}", default_version);
        println!("   Output directory: {}", checkout.path().display());
    }

    Ok(())
}
