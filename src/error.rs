//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `versioned-pages` application. It uses the `thiserror` library to create a
//! single `Error` enum covering the failure modes a publish run can hit,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! Note that the soft-fail conditions of a publish run (unrecognized ref
//! shape, unreadable manifest, publishing branch not yet created) are *not*
//! errors; they are handled in-band by the relevant modules and surface only
//! as warnings. The variants below are the conditions that genuinely abort a
//! run.

use thiserror::Error;

/// Main error type for versioned-pages operations
#[derive(Error, Debug)]
pub enum Error {
    /// Cloning the publishing branch failed for a reason other than the
    /// branch not existing yet.
    ///
    /// Includes the repository slug, branch, error message, and an optional
    /// hint for resolution. The access token is redacted from all fields.
    #[error("Git clone error for {repo}@{branch}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        repo: String,
        branch: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// The git binary could not be spawned at all.
    #[error("Git command failed: {command} - {message}")]
    GitCommand { command: String, message: String },

    /// An error occurred while copying built site assets into the checkout.
    #[error("Asset copy error: {src} -> {dst}: {message}")]
    Assets {
        src: String,
        dst: String,
        message: String,
    },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory-walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
