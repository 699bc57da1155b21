// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment access for the CLI crate.

use anyhow::Result;
use clawpath_env::{load_process_env, MapEnv};

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `CLAWPATH_NO_DOTENV=1` has the same effect as `--no-dotenv`.
pub fn no_dotenv() -> bool {
    std::env::var("CLAWPATH_NO_DOTENV").is_ok_and(|v| v == "1")
}

/// Snapshot the environment the path operations resolve against.
///
/// Process variables always win; `.env` files only fill gaps.
pub fn load(skip_dotenv: bool) -> Result<MapEnv> {
    if skip_dotenv || no_dotenv() {
        tracing::debug!("skipping .env files");
        return Ok(MapEnv::from_process());
    }
    Ok(load_process_env(None)?)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
