// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transcript file naming and path builders.
//!
//! A transcript is named after its session:
//!   `<session_id>.jsonl`, or `<session_id>-topic-<topic>.jsonl`
//! for one topic inside a session.

use std::path::{Path, PathBuf};

use clawpath_core::{SessionId, TopicId};
use clawpath_env::Environment;

use crate::containment::ContainmentOptions;
use crate::error::PathError;
use crate::session_paths::SessionPaths;

/// Transcript file name for a session, optionally scoped to a topic.
pub fn transcript_file_name(session_id: &SessionId, topic: Option<&TopicId>) -> String {
    match topic {
        Some(topic) => format!("{}-topic-{}.jsonl", session_id, topic.encoded()),
        None => session_id.transcript_file_name(),
    }
}

impl<E: Environment> SessionPaths<E> {
    /// Transcript path for `session_id` inside `sessions_dir`.
    pub fn transcript_path_in_dir(
        &self,
        session_id: &str,
        sessions_dir: &Path,
        topic: Option<&TopicId>,
    ) -> Result<PathBuf, PathError> {
        let session_id = SessionId::parse(session_id)?;
        let file_name = transcript_file_name(&session_id, topic);
        self.resolve_within_sessions_dir(sessions_dir, &file_name, &ContainmentOptions::default())
    }

    /// Transcript path for `session_id` in the sessions directory of
    /// `agent_id` (default agent when `None`).
    pub fn transcript_path(
        &self,
        session_id: &str,
        agent_id: Option<&str>,
        topic: Option<&TopicId>,
    ) -> Result<PathBuf, PathError> {
        let sessions_dir = self.agent_sessions_dir(agent_id)?;
        self.transcript_path_in_dir(session_id, &sessions_dir, topic)
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
