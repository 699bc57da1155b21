// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clawpath sessions-dir` and `clawpath store-path`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clawpath_env::Environment;
use clawpath_paths::SessionPaths;

use crate::output::{print_path, OutputFormat};

#[derive(Args)]
pub struct SessionsDirArgs {
    /// Agent id (default agent when omitted)
    #[arg(long)]
    pub agent: Option<String>,
}

#[derive(Args)]
pub struct StorePathArgs {
    /// Configured store location; `{agentId}` and a leading `~` are expanded
    #[arg(long)]
    pub store: Option<String>,
    /// Agent id (default agent when omitted)
    #[arg(long)]
    pub agent: Option<String>,
}

pub fn sessions_dir<E: Environment>(
    args: &SessionsDirArgs,
    paths: &SessionPaths<E>,
) -> Result<PathBuf> {
    Ok(paths.agent_sessions_dir(args.agent.as_deref())?)
}

pub fn store_path<E: Environment>(args: &StorePathArgs, paths: &SessionPaths<E>) -> Result<PathBuf> {
    Ok(paths.resolve_store_path(args.store.as_deref(), args.agent.as_deref())?)
}

pub fn handle_sessions_dir<E: Environment>(
    args: SessionsDirArgs,
    paths: &SessionPaths<E>,
    format: OutputFormat,
) -> Result<()> {
    print_path(&sessions_dir(&args, paths)?, format)
}

pub fn handle_store_path<E: Environment>(
    args: StorePathArgs,
    paths: &SessionPaths<E>,
    format: OutputFormat,
) -> Result<()> {
    print_path(&store_path(&args, paths)?, format)
}

#[cfg(test)]
#[path = "dirs_tests.rs"]
mod tests;
