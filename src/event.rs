//! # Trigger-Event Payload
//!
//! Permissive reader for the CI event payload (the JSON document CI exposes
//! via `GITHUB_EVENT_PATH`). The only fact a publish run needs from it is
//! whether the triggering repository is a fork. Fork triggers are skipped
//! so repository credentials are never exercised on behalf of untrusted
//! code.
//!
//! Reading is deliberately fail-open-to-false: a missing payload, invalid
//! JSON, or an absent `repository.fork` field all mean "not a fork".

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    repository: Option<EventRepository>,
}

#[derive(Debug, Deserialize)]
struct EventRepository {
    #[serde(default)]
    fork: bool,
}

/// Whether the event payload at `path` describes a fork-originated trigger.
pub fn is_fork(path: &Path) -> bool {
    let Ok(text) = fs::read_to_string(path) else {
        return false;
    };
    match serde_json::from_str::<EventPayload>(&text) {
        Ok(payload) => payload.repository.map(|r| r.fork).unwrap_or(false),
        Err(e) => {
            log::warn!("Ignoring unparsable event payload {}: {}", path.display(), e);
            false
        }
    }
}
