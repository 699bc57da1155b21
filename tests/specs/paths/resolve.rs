//! Stored session file resolution specs

use crate::prelude::*;

#[test]
fn relative_file_joins_sessions_dir() {
    let temp = Project::empty();
    let expected = format!("{}/alice.jsonl\n", temp.sessions_dir("alice"));
    temp.clawpath()
        .args(&["resolve", "alice.jsonl", "--agent", "alice"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn store_directory_is_the_sessions_dir() {
    let temp = Project::empty();
    let store = temp.path().join("store/sessions.json");
    let expected = format!("{}\n", temp.path().join("store/s1.jsonl").display());
    temp.clawpath()
        .args(&["resolve", "s1.jsonl", "--store"])
        .args(&[&store.display().to_string()])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn moved_state_dir_is_healed() {
    let temp = Project::empty();
    let expected = format!("{}/alice.jsonl (healed: reroot)\n", temp.sessions_dir("alice"));
    temp.clawpath()
        .args(&[
            "resolve",
            "/old-state/agents/alice/sessions/alice.jsonl",
            "--agent",
            "alice",
        ])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn explicit_agent_heals_into_its_own_dir() {
    let temp = Project::empty();
    let store = format!("{}/sessions.json", temp.sessions_dir("alice"));
    let run = temp
        .clawpath()
        .args(&[
            "-o",
            "json",
            "resolve",
            "/old-state/agents/bob/sessions/bob.jsonl",
            "--agent",
            "bob",
            "--store",
            &store,
        ])
        .passes();
    let value = run.json();
    assert_eq!(value["path"], format!("{}/bob.jsonl", temp.sessions_dir("bob")));
    assert_eq!(value["recovery"], "explicit_agent");
    assert_eq!(value["contained"], true);
}

#[test]
fn windows_path_is_rerooted() {
    let temp = Project::empty();
    let expected = format!("{}/abc.jsonl (healed: reroot)\n", temp.sessions_dir("main"));
    temp.clawpath()
        .args(&["resolve", r"C:\Users\me\.openclaw\agents\main\sessions\abc.jsonl"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn passthrough_warns_on_stderr() {
    let temp = Project::empty();
    temp.clawpath()
        .args(&["resolve", "/elsewhere/agents/x/sessions"])
        .passes()
        .stdout_eq("/elsewhere/agents/x/sessions (passthrough, not contained)\n")
        .stderr_has("WARN")
        .stderr_has("session path left outside sessions directory");
}

#[test]
fn strict_refuses_passthrough() {
    let temp = Project::empty();
    temp.clawpath()
        .args(&["resolve", "--strict", "/elsewhere/agents/x/sessions"])
        .fails()
        .stderr_has("strict mode refused it: /elsewhere/agents/x/sessions");
}

#[test]
fn rust_log_can_silence_warnings() {
    let temp = Project::empty();
    temp.clawpath()
        .env("RUST_LOG", "error")
        .args(&["resolve", "/elsewhere/agents/x/sessions"])
        .passes()
        .stderr_lacks("WARN");
}

#[test]
fn unstructured_absolute_path_is_rejected() {
    let temp = Project::empty();
    temp.clawpath()
        .args(&["resolve", "/etc/passwd"])
        .fails()
        .stderr_has("must be within sessions directory: /etc/passwd");
}
