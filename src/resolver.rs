//! Source path resolution.
//!
//! Expands placeholder markers in the manifest's mapped path lists against
//! the configured enumerations and flattens the result into one ordered,
//! deduplicated list of project-relative directories.

use crate::config::{Rules, STAGING_DIR};
use crate::manifest::Manifest;

/// Marker expanded against the `toolkits` enumeration.
pub const TOOLKIT_MARKER: &str = "${toolkit.name}";

/// Marker expanded against the `builds` enumeration.
pub const BUILD_MARKER: &str = "${build.id}";

/// Marker standing for the package directory itself.
pub const PACKAGE_DIR_MARKER: &str = "${package.dir}";

/// Resolve the rules' map expressions against the manifest.
///
/// Handles entries of the following form:
///   `${package.dir}/src`
///   `${package.dir}/${toolkit.name}/src`
///   `app/shared/src`
///   `app/${build.id}/src`
///
/// Toolkit names expand before build ids; the order is observable whenever
/// both markers occur in one entry and must not change.
pub fn resolve_source_paths(rules: &Rules, manifest: &Manifest) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();

    for expr in &rules.map {
        let Some(entries) = manifest.get_paths(expr) else {
            continue;
        };

        let entries = expand_marker(entries, TOOLKIT_MARKER, &rules.toolkits);
        let entries = expand_marker(entries, BUILD_MARKER, &rules.builds);

        for entry in entries {
            if !output.contains(&entry) {
                output.push(entry);
            }
        }
    }

    output
        .into_iter()
        .map(|dir| {
            let dir = dir.replacen(STAGING_DIR, "", 1);
            let dir = dir.replacen(PACKAGE_DIR_MARKER, ".", 1);
            normalize_separators(&dir)
        })
        .collect()
}

/// Expand one marker: an entry containing it becomes one entry per
/// enumeration value; entries without it pass through unchanged.
fn expand_marker(entries: Vec<String>, marker: &str, values: &[String]) -> Vec<String> {
    let mut result = Vec::new();
    for entry in entries {
        if entry.contains(marker) {
            for value in values {
                result.push(entry.replacen(marker, value, 1));
            }
        } else {
            result.push(entry);
        }
    }
    result
}

/// Normalize path separators: backslashes become `/`, runs of `/` collapse,
/// and a leading `/` left behind by prefix stripping is dropped.
pub fn normalize_separators(dir: &str) -> String {
    let mut out = String::with_capacity(dir.len());
    for c in dir.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    match out.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}
