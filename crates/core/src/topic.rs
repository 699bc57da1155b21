// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Topic qualifiers for sub-conversations within a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters `encodeURIComponent` leaves alone that `urlencoding` escapes.
/// Transcript names written by older runtimes keep them literal.
const LITERAL_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Identifies a topic (thread) inside a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicId {
    Number(i64),
    Text(String),
}

impl TopicId {
    /// Render the topic for use inside a file name.
    ///
    /// Numbers are written in decimal. Text is percent-encoded so it can
    /// never introduce a path separator or a `..` segment of its own.
    pub fn encoded(&self) -> String {
        match self {
            TopicId::Number(n) => n.to_string(),
            TopicId::Text(s) => {
                let mut out = urlencoding::encode(s).into_owned();
                for (escaped, literal) in LITERAL_MARKS {
                    if out.contains(escaped) {
                        out = out.replace(escaped, literal);
                    }
                }
                out
            }
        }
    }

    /// Parse a topic given on a command line: all-digit input is numeric.
    pub fn from_arg(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if raw.bytes().all(|b| b.is_ascii_digit()) => TopicId::Number(n),
            _ => TopicId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicId::Number(n) => write!(f, "{n}"),
            TopicId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TopicId {
    fn from(n: i64) -> Self {
        TopicId::Number(n)
    }
}

impl From<&str> for TopicId {
    fn from(s: &str) -> Self {
        TopicId::Text(s.to_string())
    }
}

impl From<String> for TopicId {
    fn from(s: String) -> Self {
        TopicId::Text(s)
    }
}

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;
