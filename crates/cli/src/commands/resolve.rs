// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clawpath resolve` runs a stored `sessionFile` value through the
//! containment rules and reports how it was resolved.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clawpath_env::Environment;
use clawpath_paths::{
    ContainmentOptions, ContainmentPolicy, Resolved, SessionFilePathOptions, SessionPaths,
};

use crate::output::{format_resolved, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    /// Stored session file path (relative or absolute)
    pub candidate: String,
    /// Agent the session belongs to
    #[arg(long)]
    pub agent: Option<String>,
    /// Sessions directory to resolve against
    #[arg(long, conflicts_with = "store")]
    pub sessions_dir: Option<PathBuf>,
    /// Session store file; its directory is the sessions directory
    #[arg(long)]
    pub store: Option<String>,
    /// Fail instead of returning a path outside any sessions directory
    #[arg(long)]
    pub strict: bool,
}

impl ResolveArgs {
    fn file_options(&self) -> Option<SessionFilePathOptions> {
        let mut opts = SessionFilePathOptions::from_store(self.agent.as_deref(), self.store.as_deref());
        if let Some(dir) = &self.sessions_dir {
            opts.get_or_insert_with(SessionFilePathOptions::default)
                .sessions_dir = Some(dir.clone());
        }
        opts
    }

    fn containment(&self) -> ContainmentOptions {
        ContainmentOptions {
            agent_id: self.agent.clone(),
            policy: if self.strict {
                ContainmentPolicy::Strict
            } else {
                ContainmentPolicy::Lenient
            },
        }
    }
}

pub fn resolve<E: Environment>(args: &ResolveArgs, paths: &SessionPaths<E>) -> Result<Resolved> {
    let sessions_dir = paths.sessions_dir_for(args.file_options().as_ref())?;
    Ok(paths.resolve_within_sessions_dir_detailed(
        &sessions_dir,
        &args.candidate,
        &args.containment(),
    )?)
}

pub fn handle<E: Environment>(
    args: ResolveArgs,
    paths: &SessionPaths<E>,
    format: OutputFormat,
) -> Result<()> {
    let resolved = resolve(&args, paths)?;
    println!("{}", format_resolved(&resolved, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
