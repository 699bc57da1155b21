//! Transcript path specs

use crate::prelude::*;

#[test]
fn transcript_in_default_agent_dir() {
    let temp = Project::empty();
    let expected = format!("{}/s1.jsonl\n", temp.sessions_dir("main"));
    temp.clawpath()
        .args(&["transcript", "s1"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn numeric_topic_is_rendered_in_decimal() {
    let temp = Project::empty();
    let dir = temp.path().join("sessions");
    let expected = format!("{}\n", dir.join("s1-topic-42.jsonl").display());
    temp.clawpath()
        .args(&["transcript", "s1", "--topic", "42", "--sessions-dir"])
        .args(&[&dir.display().to_string()])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn text_topic_is_percent_encoded() {
    let temp = Project::empty();
    let expected = format!("{}/s1-topic-a%2Fb%20c.jsonl\n", temp.sessions_dir("bob"));
    temp.clawpath()
        .args(&["transcript", "s1", "--topic", "a/b c", "--agent", "bob"])
        .passes()
        .stdout_eq(&expected);
}

#[test]
fn transcript_as_json() {
    let temp = Project::empty();
    let run = temp
        .clawpath()
        .args(&["-o", "json", "transcript", "  s1  "])
        .passes();
    assert_eq!(
        run.json()["path"],
        format!("{}/s1.jsonl", temp.sessions_dir("main"))
    );
}

#[test]
fn validate_prints_trimmed_id() {
    cli()
        .args(&["validate", "  Session.01  "])
        .passes()
        .stdout_eq("Session.01\n");
}
