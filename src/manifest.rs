//! Project manifest access.
//!
//! Discovery (`app.json` wins over `package.json`), total dotted-path
//! lookups over the raw JSON value, the one-time backup copy, and the
//! in-place pretty-printed rewrite.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::config::{strip_json_comments, BACKUP_SUFFIX, MANIFEST_NAMES};
use crate::error::{StagehandError, StagehandResult};

/// The host project's JSON descriptor, held in memory alongside its path.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    value: Value,
}

impl Manifest {
    pub fn new(path: PathBuf, value: Value) -> Self {
        Self { path, value }
    }

    /// Locate the manifest file under `root`. The app-specific manifest takes
    /// priority over the generic package manifest when both exist.
    pub fn locate(root: &Path) -> StagehandResult<PathBuf> {
        MANIFEST_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| StagehandError::MissingManifest {
                root: root.to_path_buf(),
            })
    }

    /// Locate and parse the manifest under `root`.
    pub fn load(root: &Path, sanitize: bool) -> StagehandResult<Self> {
        let path = Self::locate(root)?;
        let mut content = fs::read_to_string(&path)?;
        if sanitize {
            content = strip_json_comments(&content);
        }

        let value =
            serde_json::from_str(&content).map_err(|e| StagehandError::ManifestParse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self { path, value })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Path of the backup copy: the manifest filename with the fixed suffix.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    /// Copy the manifest file to its backup sibling, overwriting any prior
    /// backup. Never rotated.
    pub fn write_backup(&self) -> StagehandResult<PathBuf> {
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        Ok(backup)
    }

    /// Total dotted-path lookup of a list-of-strings field.
    ///
    /// Returns `None` for missing segments, non-container intermediates,
    /// non-list targets, and lists holding non-string items. Never errors.
    pub fn get_paths(&self, expr: &str) -> Option<Vec<String>> {
        let node = expr.split('.').try_fold(&self.value, lookup_segment)?;

        let list = node.as_array()?;
        list.iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }

    /// Write `values` back at `expr`. A no-op when the path does not resolve;
    /// intermediate containers are never created.
    pub fn set_paths(&mut self, expr: &str, values: Vec<String>) {
        let mut segments: Vec<&str> = expr.split('.').collect();
        let Some(last) = segments.pop() else { return };

        let mut node = &mut self.value;
        for segment in segments {
            node = match lookup_segment_mut(node, segment) {
                Some(next) => next,
                None => return,
            };
        }

        let list = Value::Array(values.into_iter().map(Value::String).collect());
        match node {
            Value::Object(map) => {
                if map.contains_key(last) {
                    map.insert(last.to_string(), list);
                }
            }
            Value::Array(items) => {
                if let Some(slot) = last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                    *slot = list;
                }
            }
            _ => {}
        }
    }

    /// Pretty-print (four-space indent) and overwrite the manifest file in
    /// place. Destructive and non-atomic; the backup copy is the only
    /// recovery path.
    pub fn save(&self) -> StagehandResult<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.value.serialize(&mut ser)?;
        buf.push(b'\n');

        fs::write(&self.path, buf)?;
        Ok(())
    }
}

fn lookup_segment<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn lookup_segment_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}
