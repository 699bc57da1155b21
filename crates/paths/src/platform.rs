// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform-agnostic path classification.
//!
//! Persisted paths may have been written on another OS. These helpers look
//! at the raw string so a Windows path is still recognized as absolute on a
//! POSIX host (and vice versa for the native check).

use std::path::Path;

/// How a stored path candidate relates to the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// No platform treats it as absolute.
    Relative,
    /// Absolute under the running platform's rules.
    NativeAbsolute,
    /// Absolute only under another platform's syntax (drive letter, UNC).
    ForeignAbsolute,
}

impl CandidateKind {
    pub fn is_absolute(self) -> bool {
        !matches!(self, CandidateKind::Relative)
    }
}

/// `C:` style drive prefix (case-insensitive).
pub fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// `\\server\share` style prefix.
pub fn has_unc_prefix(s: &str) -> bool {
    s.starts_with("\\\\")
}

/// Absolute under any supported platform.
pub fn is_absolute_any_platform(s: &str) -> bool {
    Path::new(s).is_absolute() || has_drive_prefix(s) || has_unc_prefix(s)
}

/// Classify a (trimmed) candidate.
pub fn classify(s: &str) -> CandidateKind {
    if Path::new(s).is_absolute() {
        CandidateKind::NativeAbsolute
    } else if is_absolute_any_platform(s) {
        CandidateKind::ForeignAbsolute
    } else {
        CandidateKind::Relative
    }
}

/// Split on both `/` and `\`, dropping empty segments.
pub fn split_segments(s: &str) -> Vec<&str> {
    s.split(['/', '\\']).filter(|seg| !seg.is_empty()).collect()
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod tests;
