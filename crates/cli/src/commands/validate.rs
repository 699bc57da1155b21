// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `clawpath validate`

use anyhow::Result;
use clap::Args;
use clawpath_core::SessionId;

use crate::output::OutputFormat;

#[derive(Args)]
pub struct ValidateArgs {
    /// Session id to check
    pub session_id: String,
}

pub fn format_valid(id: &SessionId, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(id.to_string()),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "session_id": id,
                "transcript": id.transcript_file_name(),
            });
            Ok(serde_json::to_string_pretty(&obj)?)
        }
    }
}

pub fn handle(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let id = SessionId::parse(&args.session_id)?;
    println!("{}", format_valid(&id, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
