// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session identifier type.
//!
//! SessionIds are minted by the agent runtime and re-validated whenever they
//! cross into path construction, since they end up as transcript file names.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum length of a session id.
pub const MAX_SESSION_ID_LEN: usize = 128;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static SAFE_SESSION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]{0,127}$").expect("constant regex pattern is valid")
});

/// Errors from session id validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionIdError {
    #[error("invalid session id: {raw}")]
    Invalid { raw: String },
}

crate::define_id! {
    #[checked]
    /// Validated session identifier.
    ///
    /// 1-128 characters; the first is an ASCII letter or digit, the rest are
    /// letters, digits, `.`, `_` or `-`. Never contains a path separator.
    pub struct SessionId;
}

impl SessionId {
    /// Validate a raw session id. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, SessionIdError> {
        let trimmed = raw.trim();
        if !SAFE_SESSION_ID.is_match(trimmed) {
            return Err(SessionIdError::Invalid {
                raw: raw.to_string(),
            });
        }
        Ok(Self::from_trusted(trimmed))
    }

    /// File name of this session's main transcript: `<id>.jsonl`.
    pub fn transcript_file_name(&self) -> String {
        format!("{}.jsonl", self.as_str())
    }
}

impl std::str::FromStr for SessionId {
    type Err = SessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SessionId {
    type Error = SessionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl<'de> serde::Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Validate a raw session id, returning the trimmed form.
pub fn validate_session_id(raw: &str) -> Result<SessionId, SessionIdError> {
    SessionId::parse(raw)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
