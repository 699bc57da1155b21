// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered `.env` loading.
//!
//! Precedence, highest first:
//!   1. the base environment (normally the process environment)
//!   2. `<cwd>/.env`
//!   3. `<state_dir>/.env`, with the state directory computed from 1 + 2
//!
//! Lower layers never override a key already present. The result is a
//! [`MapEnv`]; the process environment itself is never modified.

use std::path::{Path, PathBuf};

use crate::error::EnvError;
use crate::lookup::MapEnv;
use crate::state::{state_dir, state_env_path};

/// Name of the env file looked up in each layer.
pub const DOTENV_FILE: &str = ".env";

/// Read a dotenv file into ordered key-value pairs.
/// Returns an empty list if the file doesn't exist.
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, EnvError> {
    let to_error = |source: dotenvy::Error| EnvError::Dotenv {
        path: path.to_path_buf(),
        source,
    };
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(Vec::new()),
        Err(e) => return Err(to_error(e)),
    };
    iter.map(|item| item.map_err(to_error)).collect()
}

/// Merge one env file under `env` without overriding. Returns the number of keys added.
fn merge_file(env: &mut MapEnv, path: &Path) -> Result<usize, EnvError> {
    let mut added = 0;
    for (key, value) in read_env_file(path)? {
        if env.set_if_absent(key, value) {
            added += 1;
        }
    }
    if added > 0 {
        tracing::debug!(path = %path.display(), added, "loaded env file");
    }
    Ok(added)
}

/// Build the layered environment on top of `base`.
pub fn load_layered(base: MapEnv, cwd: &Path) -> Result<MapEnv, EnvError> {
    let mut env = base;
    merge_file(&mut env, &cwd.join(DOTENV_FILE))?;

    // The global file lives in the state dir; if that can't be resolved
    // there is simply no global layer.
    let state = match state_dir(&env) {
        Ok(dir) => dir,
        Err(EnvError::NoHomeDir) => return Ok(env),
        Err(e) => return Err(e),
    };
    merge_file(&mut env, &state_env_path(&state))?;
    Ok(env)
}

/// Snapshot the process environment and layer the `.env` files under it.
pub fn load_process_env(cwd: Option<PathBuf>) -> Result<MapEnv, EnvError> {
    let cwd = cwd
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default();
    load_layered(MapEnv::from_process(), &cwd)
}

#[cfg(test)]
#[path = "dotenv_tests.rs"]
mod tests;
