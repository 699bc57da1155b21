// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment lookups.
//!
//! Everything that derives a directory from the environment goes through
//! [`Environment`], so callers that need determinism can hand in a
//! [`MapEnv`] snapshot instead of the live process environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Read-only view of environment variables plus the OS home directory.
pub trait Environment: Send + Sync {
    /// Raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Home directory as reported by the operating system.
    fn os_home_dir(&self) -> Option<PathBuf>;

    /// Trimmed value of `key`; blank values count as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl<T: Environment + ?Sized> Environment for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn os_home_dir(&self) -> Option<PathBuf> {
        (**self).os_home_dir()
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn os_home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// In-memory environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
    home: Option<PathBuf>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current process environment and OS home directory.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
            home: dirs::home_dir(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Insert `key` only if it is not present yet. Returns whether it was inserted.
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.vars.contains_key(&key) {
            return false;
        }
        self.vars.insert(key, value.into());
        true
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn os_home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
