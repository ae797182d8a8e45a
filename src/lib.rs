//! # Versioned Pages Library
//!
//! This library provides the core functionality for publishing versioned
//! documentation sites to a dedicated publishing branch (the familiar
//! "gh-pages" multi-version pattern). It is designed to be used by the
//! `versioned-pages` command-line tool but can also be integrated into other
//! release tooling.
//!
//! ## Quick Example
//!
//! ```
//! use versioned_pages::refs;
//!
//! // A release tag becomes a semver-cleaned version label
//! assert_eq!(refs::version_label("refs/tags/v2.0.0"), "2.0.0");
//!
//! // Branch builds and pull-request previews get filesystem-safe labels
//! assert_eq!(refs::version_label("refs/heads/feature/x"), "feature-x");
//! assert_eq!(refs::version_label("refs/pull/42/merge"), "pr-42");
//! ```
//!
//! ## Core Concepts
//!
//! - **Reference Normalization (`refs`)**: Turns the raw trigger reference
//!   (tag, branch, or pull request) into a short, filesystem-safe version
//!   label that names the published subdirectory.
//! - **Manifest Reconciliation (`manifest`)**: Maintains `versions.json` on
//!   the publishing branch: the set of all known version labels and the
//!   "stable" label default visitors are redirected to. Stable only moves to
//!   a new label when that label is the highest valid semantic version.
//! - **Branch Checkout (`git`)**: Shallow-clones the publishing branch into
//!   a fresh temporary directory, treating a branch that does not exist yet
//!   as a normal "start fresh" condition.
//! - **Site Output (`site`)**: Copies the built site into the version
//!   subdirectory and regenerates the root redirect page.
//! - **Event Payload (`event`)**: Permissive fork detection from the CI
//!   event payload, so fork-originated triggers are skipped.
//!
//! ## Execution Flow
//!
//! A publish run, orchestrated by the `deploy` command, performs:
//!
//! 1. **Skip checks**: fork-originated trigger or missing source directory
//!    end the run early as a clean skip.
//! 2. **Normalize**: derive the version label from the trigger reference.
//! 3. **Checkout**: clone the publishing branch (or start fresh).
//! 4. **Reconcile**: update `versions.json` with the new label.
//! 5. **Copy**: place the built site under `<checkout>/<label>/`.
//! 6. **Redirect**: regenerate the root `index.html`.
//! 7. **Report**: expose the checkout directory as the run's output.
//!
//! Every run operates on its own freshly created temporary directory; no
//! state is shared across runs within this library.

pub mod error;
pub mod event;
pub mod git;
pub mod manifest;
pub mod output;
pub mod refs;
pub mod site;

#[cfg(test)]
mod refs_proptest;
