//! Common test utilities for stagehand CLI tests.
//!
//! Provides `TestEnv`: an isolated project directory plus helpers to run the
//! stagehand binary inside it. A stub `npx` is placed on the child's PATH so
//! prepare runs never reach a real transpiler.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a stagehand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temp project directory.
pub struct TestEnv {
    pub project_root: TempDir,
    shim_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("failed to create project temp dir");
        let shim_dir = TempDir::new().expect("failed to create shim temp dir");
        write_npx_shim(shim_dir.path());

        Self {
            project_root,
            shim_dir,
        }
    }

    /// Get path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file into the project, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&full_path, content).expect("failed to write file");
    }

    /// Read a project file's content
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    /// Read and parse a project JSON file
    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative))
            .unwrap_or_else(|e| panic!("failed to parse {}: {}", relative, e))
    }

    /// Write the default-named rules file
    pub fn write_rules(&self, content: &str) {
        self.write_file(".stagehandrc.json", content);
    }

    /// Run stagehand in this environment from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let path_var = match std::env::var("PATH") {
            Ok(existing) => format!(
                "{}{}{}",
                self.shim_dir.path().display(),
                path_separator(),
                existing
            ),
            Err(_) => self.shim_dir.path().display().to_string(),
        };

        let output = Command::new(env!("CARGO_BIN_EXE_stagehand"))
            .current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("PATH", path_var)
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute stagehand");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn path_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

#[cfg(unix)]
fn write_npx_shim(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let shim = dir.join("npx");
    std::fs::write(&shim, "#!/bin/sh\nexit 0\n").expect("failed to write npx shim");
    std::fs::set_permissions(&shim, std::fs::Permissions::from_mode(0o755))
        .expect("failed to mark npx shim executable");
}

#[cfg(not(unix))]
fn write_npx_shim(dir: &Path) {
    let shim = dir.join("npx.cmd");
    std::fs::write(&shim, "@exit /b 0\r\n").expect("failed to write npx shim");
}
