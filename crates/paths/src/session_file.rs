// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session file lookup for persisted session store entries.

use std::path::{Path, PathBuf};

use clawpath_core::lexical;
use clawpath_env::Environment;
use serde::{Deserialize, Serialize};

use crate::containment::ContainmentOptions;
use crate::error::PathError;
use crate::session_paths::SessionPaths;

/// The part of a `sessions.json` entry this crate cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Transcript location as written by the runtime. May be relative to the
    /// sessions directory or an absolute path from an older install.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,
}

impl SessionEntry {
    /// Non-blank stored transcript location, trimmed.
    pub fn stored_file(&self) -> Option<&str> {
        self.session_file
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Where to look for a session's files. `sessions_dir` wins over `agent_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilePathOptions {
    pub agent_id: Option<String>,
    pub sessions_dir: Option<PathBuf>,
}

impl SessionFilePathOptions {
    /// Options for a session store file and/or agent.
    ///
    /// A store path pins the sessions directory to the store's parent. With
    /// neither a store path nor an agent id there is nothing to override.
    pub fn from_store(agent_id: Option<&str>, store_path: Option<&str>) -> Option<Self> {
        let agent_id = agent_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let store_path = store_path.map(str::trim).filter(|s| !s.is_empty());

        if let Some(store) = store_path {
            let store = lexical::absolutize(Path::new(store));
            let sessions_dir = store.parent().map(Path::to_path_buf).unwrap_or(store);
            return Some(Self {
                agent_id,
                sessions_dir: Some(sessions_dir),
            });
        }
        agent_id.map(|agent_id| Self {
            agent_id: Some(agent_id),
            sessions_dir: None,
        })
    }
}

impl<E: Environment> SessionPaths<E> {
    /// Sessions directory selected by `opts`.
    ///
    /// An explicit (non-blank) sessions directory is absolutized; otherwise
    /// the agent's directory is computed, falling back to the default agent.
    pub fn sessions_dir_for(
        &self,
        opts: Option<&SessionFilePathOptions>,
    ) -> Result<PathBuf, PathError> {
        let explicit = opts
            .and_then(|o| o.sessions_dir.as_deref())
            .filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = explicit {
            return Ok(lexical::absolutize(dir));
        }
        Ok(self.agent_sessions_dir(opts.and_then(|o| o.agent_id.as_deref()))?)
    }

    /// Path of the transcript file for a stored session.
    ///
    /// A stored `sessionFile` is resolved through the containment rules
    /// (so legacy absolute paths get healed); without one the default
    /// `<session_id>.jsonl` name is used.
    pub fn session_file_path(
        &self,
        session_id: &str,
        entry: Option<&SessionEntry>,
        opts: Option<&SessionFilePathOptions>,
    ) -> Result<PathBuf, PathError> {
        let sessions_dir = self.sessions_dir_for(opts)?;
        match entry.and_then(SessionEntry::stored_file) {
            Some(stored) => {
                let containment = ContainmentOptions {
                    agent_id: opts.and_then(|o| o.agent_id.clone()),
                    ..ContainmentOptions::default()
                };
                self.resolve_within_sessions_dir(&sessions_dir, stored, &containment)
            }
            None => self.transcript_path_in_dir(session_id, &sessions_dir, None),
        }
    }
}

#[cfg(test)]
#[path = "session_file_tests.rs"]
mod tests;
