// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State directory resolution.

use std::path::{Path, PathBuf};

use clawpath_core::lexical;

use crate::error::EnvError;
use crate::home::{expand_home_prefix, required_home_dir};
use crate::lookup::Environment;

/// Overrides the state directory.
pub const STATE_DIR_ENV: &str = "OPENCLAW_STATE_DIR";

/// Older name for [`STATE_DIR_ENV`], still honored.
pub const LEGACY_STATE_DIR_ENV: &str = "CLAWDBOT_STATE_DIR";

/// State directory name under the home directory.
pub const DEFAULT_STATE_DIR_NAME: &str = ".openclaw";

/// Resolve state directory: OPENCLAW_STATE_DIR > CLAWDBOT_STATE_DIR > ~/.openclaw
///
/// Overrides may start with `~` and may be relative to the working
/// directory; the result is always absolute and normalized.
pub fn state_dir(env: &dyn Environment) -> Result<PathBuf, EnvError> {
    if let Some(dir) = state_dir_override(env) {
        let expanded = expand_home_prefix(&dir, env)?;
        return Ok(lexical::absolutize(&expanded));
    }
    let home = required_home_dir(env)?;
    Ok(lexical::absolutize(&home.join(DEFAULT_STATE_DIR_NAME)))
}

/// Raw state directory override, if any (for diagnostics)
pub fn state_dir_override(env: &dyn Environment) -> Option<String> {
    env.non_empty_var(STATE_DIR_ENV)
        .or_else(|| env.non_empty_var(LEGACY_STATE_DIR_ENV))
}

/// Resolve the path to the state directory's env file.
pub fn state_env_path(state_dir: &Path) -> PathBuf {
    state_dir.join(crate::dotenv::DOTENV_FILE)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
