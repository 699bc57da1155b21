// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Home directory resolution and `~` expansion.

use std::path::PathBuf;

use crate::error::EnvError;
use crate::lookup::Environment;

/// Resolve the home directory: HOME > USERPROFILE > OS lookup.
pub fn required_home_dir(env: &dyn Environment) -> Result<PathBuf, EnvError> {
    if let Some(home) = env.non_empty_var("HOME") {
        return Ok(PathBuf::from(home));
    }
    if let Some(profile) = env.non_empty_var("USERPROFILE") {
        return Ok(PathBuf::from(profile));
    }
    env.os_home_dir()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(EnvError::NoHomeDir)
}

/// Expand a leading `~` (alone, or followed by `/` or `\`) to the home directory.
///
/// Anything else, including `~user`, is returned unchanged and never
/// requires a home directory.
pub fn expand_home_prefix(input: &str, env: &dyn Environment) -> Result<PathBuf, EnvError> {
    if input == "~" {
        return required_home_dir(env);
    }
    match input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        Some(rest) => Ok(required_home_dir(env)?.join(rest)),
        None => Ok(PathBuf::from(input)),
    }
}

#[cfg(test)]
#[path = "home_tests.rs"]
mod tests;
