// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clawpath-paths: per-agent session directories, transcript paths and
//! containment of stored session file paths

pub mod containment;
mod error;
pub mod layout;
pub mod platform;
pub mod session_file;
pub mod session_paths;
pub mod transcript;

pub use containment::{ContainmentOptions, ContainmentPolicy, Recovery, Resolved};
pub use error::PathError;
pub use layout::{
    derive_sibling_sessions_dir, extract_agent_id, AGENTS_DIR, SESSIONS_DIR, SESSION_STORE_FILE,
};
pub use platform::{classify, is_absolute_any_platform, CandidateKind};
pub use session_file::{SessionEntry, SessionFilePathOptions};
pub use session_paths::{SessionPaths, AGENT_ID_PLACEHOLDER};
pub use transcript::transcript_file_name;
