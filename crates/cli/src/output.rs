// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use clap::ValueEnum;
use clawpath_paths::{Recovery, Resolved};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a single path: the bare path as text, `{"path": ...}` as JSON.
pub fn format_path(path: &Path, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(path.display().to_string()),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "path": path.to_string_lossy() });
            Ok(serde_json::to_string_pretty(&obj)?)
        }
    }
}

/// Render a containment result. Text output adds a note for healed paths.
pub fn format_resolved(resolved: &Resolved, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let path = resolved.path.display();
            Ok(match resolved.recovery {
                None => path.to_string(),
                Some(Recovery::Passthrough) => format!("{} (passthrough, not contained)", path),
                Some(recovery) => format!("{} (healed: {})", path, recovery),
            })
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "path": resolved.path.to_string_lossy(),
                "recovery": resolved.recovery,
                "contained": resolved.recovery.map_or(true, Recovery::is_contained),
            });
            Ok(serde_json::to_string_pretty(&obj)?)
        }
    }
}

pub fn print_path(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", format_path(path, format)?);
    Ok(())
}
