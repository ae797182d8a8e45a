//! Resolve command implementation
//!
//! Normalizes a trigger reference into the version label it would publish
//! under and prints it. Useful for previewing labels in workflow scripts
//! without running a deploy.

use anyhow::Result;
use clap::Args;

use versioned_pages::refs;

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Trigger reference to normalize (refs/tags/..., refs/heads/...,
    /// refs/pull/.../merge)
    #[arg(value_name = "REF", env = "GITHUB_REF")]
    pub git_ref: String,
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    println!("{}", refs::version_label(&args.git_ref));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_prints_label() {
        let args = ResolveArgs {
            git_ref: "refs/tags/v1.2.3".to_string(),
        };
        assert!(execute(args).is_ok());
    }
}
