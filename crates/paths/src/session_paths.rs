// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-bound entry point for session path resolution.

use std::path::PathBuf;

use clawpath_core::{lexical, normalize_optional_agent_id};
use clawpath_env::{expand_home_prefix, state_dir, EnvError, Environment, ProcessEnv};

use crate::layout::{sessions_dir_under, store_path_in};

/// Placeholder substituted with the normalized agent id in store paths.
pub const AGENT_ID_PLACEHOLDER: &str = "{agentId}";

/// Resolves session directories and files against one environment.
///
/// Holds no state besides the environment; every call recomputes from it.
#[derive(Debug, Clone, Default)]
pub struct SessionPaths<E = ProcessEnv> {
    env: E,
}

impl SessionPaths<ProcessEnv> {
    /// Resolve against the live process environment.
    pub fn process() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: Environment> SessionPaths<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Root state directory for this environment.
    pub fn state_dir(&self) -> Result<PathBuf, EnvError> {
        state_dir(&self.env)
    }

    /// Sessions directory for `agent_id` (default agent when `None`).
    ///
    /// Structure: `{state_dir}/agents/{normalized agent_id}/sessions`
    pub fn agent_sessions_dir(&self, agent_id: Option<&str>) -> Result<PathBuf, EnvError> {
        let root = self.state_dir()?;
        Ok(sessions_dir_under(
            &root,
            &normalize_optional_agent_id(agent_id),
        ))
    }

    /// Transcripts directory of the default agent.
    pub fn transcripts_dir(&self) -> Result<PathBuf, EnvError> {
        self.agent_sessions_dir(None)
    }

    /// Transcripts directory of `agent_id` (default agent when `None`).
    pub fn transcripts_dir_for_agent(&self, agent_id: Option<&str>) -> Result<PathBuf, EnvError> {
        self.agent_sessions_dir(agent_id)
    }

    /// Default session store file for `agent_id`.
    ///
    /// Structure: `{state_dir}/agents/{agent_id}/sessions/sessions.json`
    pub fn default_store_path(&self, agent_id: Option<&str>) -> Result<PathBuf, EnvError> {
        Ok(store_path_in(&self.agent_sessions_dir(agent_id)?))
    }

    /// Resolve a configured session store location.
    ///
    /// Without `store` this is [`Self::default_store_path`]. Otherwise every
    /// `{agentId}` is replaced with the normalized agent id, a leading `~`
    /// is expanded and the result is made absolute.
    pub fn resolve_store_path(
        &self,
        store: Option<&str>,
        agent_id: Option<&str>,
    ) -> Result<PathBuf, EnvError> {
        let agent = normalize_optional_agent_id(agent_id);
        let Some(store) = store.map(str::trim).filter(|s| !s.is_empty()) else {
            return self.default_store_path(Some(agent.as_str()));
        };

        let expanded = store.replace(AGENT_ID_PLACEHOLDER, agent.as_str());
        let path = if expanded.starts_with('~') {
            expand_home_prefix(&expanded, &self.env)?
        } else {
            PathBuf::from(expanded)
        };
        Ok(lexical::absolutize(&path))
    }
}

#[cfg(test)]
#[path = "session_paths_tests.rs"]
mod tests;
