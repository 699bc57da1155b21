//! CLI error handling specs
//!
//! Verify error messages and exit codes for rejected input.

use crate::prelude::*;

#[test]
fn invalid_session_id_shows_error() {
    let temp = Project::empty();
    let run = temp
        .clawpath()
        .args(&["transcript", "../escape"])
        .fails()
        .stderr_eq("Error: invalid session id: ../escape\n");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn validate_rejects_bad_id() {
    cli()
        .args(&["validate", "-leading-dash"])
        .fails()
        .stderr_has("Error: invalid session id: -leading-dash");
}

#[test]
fn relative_escape_shows_error() {
    let temp = Project::empty();
    temp.clawpath()
        .args(&["resolve", "../../etc/passwd"])
        .fails()
        .stderr_has("Error: session file path must be within sessions directory: ../../etc/passwd");
}

#[test]
fn blank_candidate_shows_error() {
    let temp = Project::empty();
    temp.clawpath()
        .args(&["resolve", "   "])
        .fails()
        .stderr_has("Error: session file path must not be empty");
}

#[test]
fn conflicting_flags_are_rejected() {
    let temp = Project::empty();
    let run = temp
        .clawpath()
        .args(&["resolve", "x.jsonl", "--sessions-dir", "/d", "--store", "/s.json"])
        .fails();
    assert_eq!(run.code(), Some(2));
}
