// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Containment of stored session file paths.
//!
//! A candidate path read from a session store is mapped to an absolute path
//! under the sessions directory. Relative candidates are joined and must not
//! escape. Absolute candidates (written by older versions, possibly under a
//! different state root or on another OS) that fall outside the directory
//! go through an ordered list of [`Recovery`] strategies:
//!
//! 1. `ExplicitAgent`: retry against the caller-supplied agent's directory
//! 2. `ExtractedAgent`: retry against the agent named inside the path
//! 3. `Reroot`: keep what follows `sessions/` and re-base it here
//! 4. `Passthrough`: nothing follows `sessions/`, return the candidate verbatim
//!    (not contained)
//!
//! The first strategy to produce a path wins. `Passthrough` can be turned
//! off with [`ContainmentPolicy::Strict`].

use std::path::{Component, Path, PathBuf};

use clawpath_core::{lexical, normalize_agent_id, AgentId};
use clawpath_env::Environment;
use serde::Serialize;

use crate::error::PathError;
use crate::layout::{
    derive_sibling_sessions_dir, extract_agent_id, segments_after_sessions, sessions_dir_under,
};
use crate::platform::{classify, CandidateKind};
use crate::session_paths::SessionPaths;

/// Whether the unsafe verbatim fallback is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainmentPolicy {
    /// Prefer returning some path over failing.
    #[default]
    Lenient,
    /// Never return a path outside a sessions directory.
    Strict,
}

/// Options for [`SessionPaths::resolve_within_sessions_dir`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainmentOptions {
    /// Agent the caller knows the candidate belongs to.
    pub agent_id: Option<String>,
    pub policy: ContainmentPolicy,
}

impl ContainmentOptions {
    pub fn for_agent(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: Some(agent_id.into()),
            ..Self::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.policy = ContainmentPolicy::Strict;
        self
    }

    fn explicit_agent(&self) -> Option<&str> {
        self.agent_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Healing strategy that produced a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recovery {
    ExplicitAgent,
    ExtractedAgent,
    Reroot,
    Passthrough,
}

impl Recovery {
    /// Strategies in the order they are attempted.
    pub const ORDER: [Recovery; 4] = [
        Recovery::ExplicitAgent,
        Recovery::ExtractedAgent,
        Recovery::Reroot,
        Recovery::Passthrough,
    ];

    /// Whether paths from this strategy are guaranteed to sit in a sessions directory.
    pub fn is_contained(self) -> bool {
        !matches!(self, Recovery::Passthrough)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recovery::ExplicitAgent => "explicit_agent",
            Recovery::ExtractedAgent => "extracted_agent",
            Recovery::Reroot => "reroot",
            Recovery::Passthrough => "passthrough",
        }
    }
}

impl std::fmt::Display for Recovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved path and the healing strategy used, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub path: PathBuf,
    pub recovery: Option<Recovery>,
}

impl Resolved {
    fn direct(path: PathBuf) -> Self {
        Self {
            path,
            recovery: None,
        }
    }
}

/// Candidate after the first normalization pass.
enum Normalized {
    /// Path relative to the sessions directory.
    Relative(PathBuf),
    /// Absolute under another platform's syntax; never comparable to the
    /// sessions directory, so it is treated as escaped outright.
    PlatformMismatch,
}

/// First component is `..`, a root or a drive prefix.
fn leaves_base(relative: &Path) -> bool {
    matches!(
        relative.components().next(),
        Some(Component::ParentDir | Component::RootDir | Component::Prefix(_))
    ) || relative.is_absolute()
}

/// `candidate` re-expressed under `sessions_dir`, if it lies strictly inside it.
fn contained_in(sessions_dir: &Path, candidate: &Path) -> Option<PathBuf> {
    let base = lexical::absolutize(sessions_dir);
    let relative = lexical::relative_to(&base, candidate);
    if lexical::escapes(&relative) {
        return None;
    }
    Some(lexical::absolutize_from(&base, &relative))
}

/// Re-base everything after the last `sessions` segment under `sessions_dir`.
fn reroot_under(sessions_dir: &Path, candidate: &str) -> Option<PathBuf> {
    let rest: PathBuf = segments_after_sessions(candidate)?.into_iter().collect();
    let rest = lexical::normalize(&rest);
    if lexical::escapes(&rest) {
        return None;
    }
    Some(sessions_dir.join(rest))
}

/// Everything a recovery strategy gets to look at.
struct Attempt<'a, E> {
    paths: &'a SessionPaths<E>,
    base: &'a Path,
    candidate: &'a str,
    kind: CandidateKind,
    explicit_agent: Option<&'a str>,
    extracted_agent: Option<&'a str>,
}

impl<E: Environment> Attempt<'_, E> {
    fn run(&self, recovery: Recovery) -> Option<PathBuf> {
        match recovery {
            Recovery::ExplicitAgent => {
                let agent = normalize_agent_id(self.explicit_agent?);
                self.retry_for_agent(&agent)
                    .or_else(|| self.reroot_under_explicit_sibling(&agent))
            }
            Recovery::ExtractedAgent => {
                self.retry_for_agent(&normalize_agent_id(self.extracted_agent?))
            }
            Recovery::Reroot => {
                self.extracted_agent?;
                reroot_under(self.base, self.candidate)
            }
            // Only when there is nothing after `sessions/` to re-root.
            Recovery::Passthrough => {
                self.extracted_agent?;
                if segments_after_sessions(self.candidate).is_some() {
                    return None;
                }
                Some(PathBuf::from(self.candidate))
            }
        }
    }

    /// Try the agent's sibling directory, then its directory computed from
    /// the live environment. Only native-absolute candidates can be
    /// compared against either.
    fn retry_for_agent(&self, agent: &AgentId) -> Option<PathBuf> {
        if self.kind != CandidateKind::NativeAbsolute {
            return None;
        }
        let candidate = Path::new(self.candidate);
        if let Some(path) = derive_sibling_sessions_dir(self.base, agent.as_str())
            .and_then(|sibling| contained_in(&sibling, candidate))
        {
            return Some(path);
        }
        match self.paths.state_dir() {
            Ok(root) => contained_in(&sessions_dir_under(&root, agent), candidate),
            Err(e) => {
                tracing::debug!(error = %e, agent = %agent, "no state dir to retry against");
                None
            }
        }
    }

    /// When the caller vouches for the agent the path itself names, keep the
    /// file under that agent's sibling directory rather than ours.
    fn reroot_under_explicit_sibling(&self, agent: &AgentId) -> Option<PathBuf> {
        let embedded = normalize_agent_id(self.extracted_agent?);
        if embedded != *agent {
            return None;
        }
        let sibling = derive_sibling_sessions_dir(self.base, agent.as_str())?;
        reroot_under(&sibling, self.candidate)
    }
}

impl<E: Environment> SessionPaths<E> {
    /// Resolve `candidate` to an absolute path under `sessions_dir`.
    ///
    /// See the module docs for the healing applied to absolute candidates.
    pub fn resolve_within_sessions_dir(
        &self,
        sessions_dir: &Path,
        candidate: &str,
        opts: &ContainmentOptions,
    ) -> Result<PathBuf, PathError> {
        self.resolve_within_sessions_dir_detailed(sessions_dir, candidate, opts)
            .map(|resolved| resolved.path)
    }

    /// Like [`Self::resolve_within_sessions_dir`], also reporting which
    /// recovery strategy (if any) produced the path.
    pub fn resolve_within_sessions_dir_detailed(
        &self,
        sessions_dir: &Path,
        candidate: &str,
        opts: &ContainmentOptions,
    ) -> Result<Resolved, PathError> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let base = lexical::absolutize(sessions_dir);
        let kind = classify(trimmed);

        // Older versions stored absolute paths; turn them into paths
        // relative to the sessions directory so the containment check applies.
        let normalized = match kind {
            CandidateKind::NativeAbsolute => {
                Normalized::Relative(lexical::relative_to(&base, Path::new(trimmed)))
            }
            CandidateKind::ForeignAbsolute => Normalized::PlatformMismatch,
            CandidateKind::Relative => Normalized::Relative(lexical::normalize(Path::new(trimmed))),
        };

        let escaped = match &normalized {
            Normalized::PlatformMismatch => true,
            Normalized::Relative(relative) => leaves_base(relative),
        };

        if escaped && kind.is_absolute() {
            let attempt = Attempt {
                paths: self,
                base: &base,
                candidate: trimmed,
                kind,
                explicit_agent: opts.explicit_agent(),
                extracted_agent: extract_agent_id(trimmed),
            };
            for recovery in Recovery::ORDER {
                let Some(path) = attempt.run(recovery) else {
                    continue;
                };
                if recovery.is_contained() {
                    tracing::debug!(
                        candidate = trimmed,
                        path = %path.display(),
                        %recovery,
                        "healed session path"
                    );
                } else if opts.policy == ContainmentPolicy::Strict {
                    tracing::warn!(
                        candidate = trimmed,
                        sessions_dir = %base.display(),
                        "refusing session path outside sessions directory"
                    );
                    return Err(PathError::Unresolved {
                        candidate: trimmed.to_string(),
                    });
                } else {
                    tracing::warn!(
                        candidate = trimmed,
                        sessions_dir = %base.display(),
                        "session path left outside sessions directory"
                    );
                }
                return Ok(Resolved {
                    path,
                    recovery: Some(recovery),
                });
            }
        }

        match normalized {
            Normalized::Relative(relative) if !leaves_base(&relative) => {
                // A native-absolute candidate naming the directory itself is not a file in it
                if kind == CandidateKind::NativeAbsolute && relative.as_os_str().is_empty() {
                    return Err(PathError::PathEscape {
                        candidate: trimmed.to_string(),
                    });
                }
                Ok(Resolved::direct(lexical::absolutize_from(&base, &relative)))
            }
            _ => Err(PathError::PathEscape {
                candidate: trimmed.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "containment_tests.rs"]
mod tests;
