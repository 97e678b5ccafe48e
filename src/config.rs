//! Invocation options and the project-local rules file.
//!
//! `Options` is built once from the parsed CLI and passed explicitly into
//! every operation; nothing in the crate reads flags from globals.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{StagehandError, StagehandResult};

/// Fixed name of the staging folder under the project root.
pub const STAGING_DIR: &str = ".stagehand-build";

/// Default rules file name, relative to the project root.
pub const RULES_FILE: &str = ".stagehandrc.json";

/// Suffix appended to the manifest filename for the backup copy.
pub const BACKUP_SUFFIX: &str = ".stagehand-backup";

/// Manifest filenames probed under the project root, in priority order.
pub const MANIFEST_NAMES: &[&str] = &["app.json", "package.json"];

/// Selected action for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Prepare,
    Revert,
}

/// Immutable per-invocation options.
#[derive(Debug, Clone)]
pub struct Options {
    pub mode: Mode,
    pub project_root: PathBuf,
    /// Rules file path, relative to the project root.
    pub rules_file: String,
    /// Strip comments from JSON files before parsing.
    pub sanitize: bool,
}

impl Options {
    pub fn new(
        mode: Mode,
        project_root: PathBuf,
        rules_file: Option<String>,
        sanitize: bool,
    ) -> Self {
        Self {
            mode,
            project_root,
            rules_file: rules_file.unwrap_or_else(|| RULES_FILE.to_string()),
            sanitize,
        }
    }

    pub fn rules_path(&self) -> PathBuf {
        self.project_root.join(&self.rules_file)
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.project_root.join(STAGING_DIR)
    }

    /// Options for recursing into an external project: same mode and sanitize
    /// flag, default rules file, the external's directory as project root.
    pub fn for_external(&self, root: PathBuf) -> Self {
        Self {
            mode: self.mode,
            project_root: root,
            rules_file: RULES_FILE.to_string(),
            sanitize: self.sanitize,
        }
    }
}

/// Non-fatal rules-file warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Parsed rules file.
///
/// `map` names the manifest fields holding source directory lists; the
/// enumerations drive placeholder expansion; `externals` lists sibling
/// projects carrying their own rules file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub map: Vec<String>,

    #[serde(default)]
    pub toolkits: Vec<String>,

    #[serde(default)]
    pub builds: Vec<String>,

    #[serde(default)]
    pub externals: Vec<String>,
}

impl Rules {
    /// Load the rules file.
    pub fn load(path: &Path, sanitize: bool) -> StagehandResult<Self> {
        let (rules, _warnings) = Self::load_with_warnings(path, sanitize)?;
        Ok(rules)
    }

    /// Load the rules file and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(
        path: &Path,
        sanitize: bool,
    ) -> StagehandResult<(Self, Vec<RuleWarning>)> {
        if !path.exists() {
            return Err(StagehandError::MissingRules {
                path: path.to_path_buf(),
            });
        }

        let mut content = fs::read_to_string(path)?;
        if sanitize {
            content = strip_json_comments(&content);
        }

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = &mut serde_json::Deserializer::from_str(&content);

        let rules: Self = serde_ignored::deserialize(deserializer, |ignored| {
            unknown_paths.push(ignored.to_string());
        })
        .map_err(|e| StagehandError::RulesParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| RuleWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((rules, warnings))
    }
}

/// Remove `//` line comments and `/* */` block comments from `input`.
///
/// Comment markers inside string literals are left untouched. Newlines that
/// terminate a line comment are kept so parse errors still point at the
/// right line.
pub fn strip_json_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}
