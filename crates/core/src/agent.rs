// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent identifiers.
//!
//! An AgentId is always the output of [`normalize_agent_id`], which makes it
//! safe to use as a single path segment (`<state>/agents/<id>/sessions`).

use regex::Regex;
use std::sync::LazyLock;

/// Agent used when a caller does not name one.
pub const DEFAULT_AGENT_ID: &str = "main";

/// Upper bound on a normalized agent id.
pub const MAX_AGENT_ID_LEN: usize = 64;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static VALID_AGENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,63}$").expect("constant regex pattern is valid")
});

crate::define_id! {
    #[checked]
    /// Normalized agent identifier.
    ///
    /// Lowercase, 1-64 characters drawn from `[a-z0-9_-]`, never starting or
    /// ending with `-`.
    pub struct AgentId;
}

impl AgentId {
    /// The default agent (`main`).
    pub fn default_agent() -> Self {
        Self::from_trusted(DEFAULT_AGENT_ID)
    }

    pub fn is_default(&self) -> bool {
        self.as_str() == DEFAULT_AGENT_ID
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::default_agent()
    }
}

/// Canonicalize a raw agent identifier.
///
/// Blank input maps to the default agent. Ids that already fit the grammar
/// are only lowercased; anything else has each run of characters outside
/// `[a-z0-9_-]` collapsed to `-`, surrounding dashes trimmed and the result
/// truncated to [`MAX_AGENT_ID_LEN`]. Falls back to the default agent when
/// nothing usable remains.
pub fn normalize_agent_id(raw: &str) -> AgentId {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return AgentId::default_agent();
    }
    if VALID_AGENT_ID.is_match(trimmed) {
        return AgentId::from_trusted(trimmed.to_ascii_lowercase());
    }

    let lower = trimmed.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut last_was_dash = false;
    for ch in lower.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            slug.push(ch);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    let mut result = slug.trim_matches('-').to_string();
    // ASCII only at this point, so byte truncation is char-safe
    if result.len() > MAX_AGENT_ID_LEN {
        result.truncate(MAX_AGENT_ID_LEN);
        result.truncate(result.trim_end_matches('-').len());
    }

    if result.is_empty() {
        AgentId::default_agent()
    } else {
        AgentId::from_trusted(result)
    }
}

/// Normalize an optional agent id, defaulting when absent.
pub fn normalize_optional_agent_id(raw: Option<&str>) -> AgentId {
    raw.map(normalize_agent_id).unwrap_or_default()
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
