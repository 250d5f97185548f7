//! Shared helpers for CLI specs.
//!
//! ```ignore
//! let harbor = Harbor::empty();
//! harbor.ferry().args(&["vessel", "list"]).passes().stdout_has("No vessels");
//! ```

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// A scratch data directory the CLI runs against
pub struct Harbor {
    dir: TempDir,
}

impl Harbor {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// One vessel `Spirit` (100 passengers, 20 m high, 50 m low) sailing `WIN-24-15`
    pub fn with_sailing() -> Self {
        let harbor = Self::empty();
        harbor
            .ferry()
            .args(&[
                "vessel",
                "create",
                "Spirit",
                "--passengers",
                "100",
                "--high-lane",
                "20",
                "--low-lane",
                "50",
            ])
            .passes();
        harbor
            .ferry()
            .args(&[
                "sailing",
                "create",
                "--vessel",
                "Spirit",
                "--terminal",
                "Winnipeg",
                "--day",
                "24",
                "--hour",
                "15",
            ])
            .passes()
            .stdout_has("WIN-24-15");
        harbor
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).unwrap();
    }

    /// The CLI pointed at this harbor's data directory
    pub fn ferry(&self) -> CliBuilder {
        CliBuilder {
            args: vec![
                "--data-dir".to_string(),
                self.path().join("data").display().to_string(),
            ],
        }
    }

    /// The CLI with no `--data-dir`, for config-file specs
    pub fn ferry_bare(&self) -> CliBuilder {
        CliBuilder { args: Vec::new() }
    }
}

pub struct CliBuilder {
    args: Vec<String>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    fn run(self) -> std::process::Output {
        Command::cargo_bin("ferry")
            .unwrap()
            .args(&self.args)
            .env_remove("FERRY_LOG")
            .output()
            .unwrap()
    }

    /// Run and require exit code 0
    pub fn passes(self) -> RunAssert {
        let output = self.run();
        let run = RunAssert::from(output);
        assert!(
            run.success,
            "expected success\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let output = self.run();
        let run = RunAssert::from(output);
        assert!(
            !run.success,
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }
}

pub struct RunAssert {
    success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    /// Compare stdout exactly, with a readable diff on mismatch
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
