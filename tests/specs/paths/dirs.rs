//! Sessions directory and store path specs

use crate::prelude::*;

#[test]
fn sessions_dir_defaults_to_main_agent() {
    let temp = Project::empty();
    let expected = format!("{}\n", temp.sessions_dir("main"));
    temp.clawpath()
        .args(&["sessions-dir"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn sessions_dir_normalizes_agent_id() {
    let temp = Project::empty();
    let expected = format!("{}\n", temp.sessions_dir("ops-bot"));
    temp.clawpath()
        .args(&["sessions-dir", "--agent", "Ops Bot!"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn sessions_dir_falls_back_to_home() {
    let temp = Project::empty();
    let expected = temp.home_path().join(".openclaw/agents/main/sessions");
    temp.clawpath_without_state_dir()
        .args(&["sessions-dir"])
        .passes()
        .stdout_eq(&format!("{}\n", expected.display()));
}

#[test]
fn legacy_state_dir_variable_is_honored() {
    let temp = Project::empty();
    let expected = format!("{}\n", temp.sessions_dir("main"));
    temp.clawpath_without_state_dir()
        .env("CLAWDBOT_STATE_DIR", temp.state_path())
        .args(&["sessions-dir"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn sessions_dir_as_json() {
    let temp = Project::empty();
    let run = temp
        .clawpath()
        .args(&["sessions-dir", "--agent", "bob", "-o", "json"])
        .passes();
    assert_eq!(run.json()["path"], temp.sessions_dir("bob"));
}

#[test]
fn default_store_path() {
    let temp = Project::empty();
    let expected = format!("{}/sessions.json\n", temp.sessions_dir("bob"));
    temp.clawpath()
        .args(&["store-path", "--agent", "bob"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn store_path_expands_agent_placeholder_and_tilde() {
    let temp = Project::empty();
    let expected = temp.home_path().join("stores/research/sessions.json");
    temp.clawpath()
        .args(&[
            "store-path",
            "--store",
            "~/stores/{agentId}/sessions.json",
            "--agent",
            "Research",
        ])
        .passes()
        .stdout_eq(&format!("{}\n", expected.display()));
}

#[test]
fn relative_store_path_is_made_absolute() {
    let temp = Project::empty();
    let expected = temp.path().join("data/sessions.json");
    temp.clawpath()
        .args(&["store-path", "--store", "./data/sessions.json"])
        .passes()
        .stdout_eq(&format!("{}\n", expected.display()));
}
