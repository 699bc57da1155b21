// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clawpath transcript`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use clawpath_core::TopicId;
use clawpath_env::Environment;
use clawpath_paths::SessionPaths;

use crate::output::{print_path, OutputFormat};

#[derive(Args)]
pub struct TranscriptArgs {
    /// Session id
    pub session_id: String,
    /// Topic within the session (all digits = numeric topic)
    #[arg(long)]
    pub topic: Option<String>,
    /// Agent whose sessions directory holds the transcript
    #[arg(long, conflicts_with = "sessions_dir")]
    pub agent: Option<String>,
    /// Explicit sessions directory
    #[arg(long)]
    pub sessions_dir: Option<PathBuf>,
}

pub fn transcript_path<E: Environment>(
    args: &TranscriptArgs,
    paths: &SessionPaths<E>,
) -> Result<PathBuf> {
    let topic = args.topic.as_deref().map(TopicId::from_arg);
    let path = match args.sessions_dir.as_deref() {
        Some(dir) => paths.transcript_path_in_dir(&args.session_id, dir, topic.as_ref())?,
        None => paths.transcript_path(&args.session_id, args.agent.as_deref(), topic.as_ref())?,
    };
    Ok(path)
}

pub fn handle<E: Environment>(
    args: TranscriptArgs,
    paths: &SessionPaths<E>,
    format: OutputFormat,
) -> Result<()> {
    let path = transcript_path(&args, paths)?;
    tracing::debug!(session_id = %args.session_id, path = %path.display(), "transcript path");
    print_path(&path, format)
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod tests;
