//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the clawpath CLI against an isolated
//! home, state directory and working directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Variables that would leak the developer's setup into a spec.
const SCRUBBED_ENV: &[&str] = &[
    "OPENCLAW_STATE_DIR",
    "CLAWDBOT_STATE_DIR",
    "USERPROFILE",
    "RUST_LOG",
    "CLAWPATH_NO_DOTENV",
];

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR points at a different target directory.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>, so its
    // grandparent is target/debug/ where clawpath is built.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Returns a Command configured to run the clawpath binary
pub fn clawpath_cmd() -> Command {
    Command::new(binary_path("clawpath"))
}

/// Create a CLI builder for clawpath commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = clawpath_cmd();
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e})\nstdout: {}", self.stdout())
        })
    }

    /// Exit code of the process
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    pub fn stderr_eq(self, expected: &str) -> Self {
        let stderr = self.stderr();
        similar_asserts::assert_eq!(stderr, expected);
        self
    }

    /// Assert stdout contains substring.
    /// Use when exact comparison isn't practical.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary working directory with its own home and state directory.
pub struct Project {
    dir: tempfile::TempDir,
    /// Isolated home directory (HOME)
    home: tempfile::TempDir,
    /// Isolated state directory (OPENCLAW_STATE_DIR)
    state_dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
            state_dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project (working directory) path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the isolated home directory path
    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    /// Get the isolated state directory path
    pub fn state_path(&self) -> &Path {
        self.state_dir.path()
    }

    /// Write a file relative to the project (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        write_file(&self.dir.path().join(path.as_ref()), content);
    }

    /// Write a file relative to the home directory
    pub fn home_file(&self, path: impl AsRef<Path>, content: &str) {
        write_file(&self.home.path().join(path.as_ref()), content);
    }

    /// Write a file relative to the state directory
    pub fn state_file(&self, path: impl AsRef<Path>, content: &str) {
        write_file(&self.state_dir.path().join(path.as_ref()), content);
    }

    /// `<state>/agents/<agent>/sessions` as a display string
    pub fn sessions_dir(&self, agent: &str) -> String {
        self.state_path()
            .join("agents")
            .join(agent)
            .join("sessions")
            .display()
            .to_string()
    }

    /// Run clawpath with HOME and the state directory isolated
    pub fn clawpath(&self) -> CliBuilder {
        self.clawpath_without_state_dir()
            .env("OPENCLAW_STATE_DIR", self.state_path())
    }

    /// Run clawpath with an isolated HOME but no state directory override
    pub fn clawpath_without_state_dir(&self) -> CliBuilder {
        cli().pwd(self.path()).env("HOME", self.home_path())
    }
}

fn write_file(full_path: &Path, content: &str) {
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full_path, content).unwrap();
}
