// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for environment-derived directories

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving directories from the environment
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("could not determine home directory (HOME / USERPROFILE unset)")]
    NoHomeDir,
    #[error("failed to load env file {path}: {source}")]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
