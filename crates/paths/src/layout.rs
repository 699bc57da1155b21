// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for the per-agent sessions layout.
//!
//! Every agent keeps its transcripts and session store under
//!   `<state_dir>/agents/<agent_id>/sessions/`
//!
//! The helpers here are pure: they only look at path structure.

use std::path::{Path, PathBuf};

use clawpath_core::{lexical, normalize_agent_id, AgentId};

use crate::platform::split_segments;

/// Directory under the state root holding one directory per agent.
pub const AGENTS_DIR: &str = "agents";

/// Directory under an agent's directory holding its transcripts.
pub const SESSIONS_DIR: &str = "sessions";

/// Session store file inside a sessions directory.
pub const SESSION_STORE_FILE: &str = "sessions.json";

/// Build the path to an agent's sessions directory.
///
/// Structure: `{state_root}/agents/{agent_id}/sessions`
pub fn sessions_dir_under(state_root: &Path, agent_id: &AgentId) -> PathBuf {
    state_root
        .join(AGENTS_DIR)
        .join(agent_id.as_str())
        .join(SESSIONS_DIR)
}

/// Build the path to the session store inside a sessions directory.
///
/// Structure: `{sessions_dir}/sessions.json`
pub fn store_path_in(sessions_dir: &Path) -> PathBuf {
    sessions_dir.join(SESSION_STORE_FILE)
}

/// Derive another agent's sessions directory from a known one.
///
/// Only works when `known` is shaped `<root>/agents/<id>/sessions`; the
/// agent segment is swapped for the normalized `other_agent_id` and the
/// root is kept. Returns `None` for any other shape.
pub fn derive_sibling_sessions_dir(known: &Path, other_agent_id: &str) -> Option<PathBuf> {
    let resolved = lexical::absolutize(known);
    if resolved.file_name()? != SESSIONS_DIR {
        return None;
    }
    let agents_dir = resolved.parent()?.parent()?;
    if agents_dir.file_name()? != AGENTS_DIR {
        return None;
    }
    let root = agents_dir.parent()?;
    Some(sessions_dir_under(root, &normalize_agent_id(other_agent_id)))
}

/// Recover the agent id embedded in a path shaped `…/agents/<id>/sessions/…`.
///
/// Splits on both separator styles and anchors on the last `sessions`
/// segment. The id is returned raw; callers normalize it.
pub fn extract_agent_id(candidate: &str) -> Option<&str> {
    let parts = split_segments(candidate);
    let sessions_index = parts.iter().rposition(|part| *part == SESSIONS_DIR)?;
    if sessions_index < 2 || parts[sessions_index - 2] != AGENTS_DIR {
        return None;
    }
    Some(parts[sessions_index - 1])
}

/// Segments after the last `sessions` segment, if there are any.
pub fn segments_after_sessions(candidate: &str) -> Option<Vec<&str>> {
    let parts = split_segments(candidate);
    let sessions_index = parts.iter().rposition(|part| *part == SESSIONS_DIR)?;
    let rest = parts.get(sessions_index + 1..)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_vec())
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
