// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for session path resolution

use clawpath_core::SessionIdError;
use clawpath_env::EnvError;
use thiserror::Error;

/// Errors that can occur while resolving session file paths
#[derive(Debug, Error)]
pub enum PathError {
    #[error(transparent)]
    InvalidSessionId(#[from] SessionIdError),
    #[error("session file path must not be empty")]
    EmptyPath,
    #[error("session file path must be within sessions directory: {candidate}")]
    PathEscape { candidate: String },
    #[error("session file path is outside the sessions directory and strict mode refused it: {candidate}")]
    Unresolved { candidate: String },
    #[error(transparent)]
    Env(#[from] EnvError),
}
