//! Manifest path-list rewriting.
//!
//! Stage mode points every mapped entry into the staging folder; revert mode
//! strips the staging folder name back out. Both are driven by the same map
//! expressions as the resolver.

use crate::config::{Mode, Rules};
use crate::manifest::Manifest;
use crate::resolver::{normalize_separators, PACKAGE_DIR_MARKER};

/// Rewrite one entry for staging.
///
/// Any existing staging prefix is stripped first, so staging an
/// already-staged manifest never double-prefixes. Entries carrying the
/// package-directory marker get the staging folder inserted right after the
/// marker; everything else is prefixed with the staging folder.
pub fn stage_entry(entry: &str, staging: &str) -> String {
    let stripped = entry.replacen(staging, "", 1);

    let prefixed = if stripped.contains(PACKAGE_DIR_MARKER) {
        stripped.replacen(
            PACKAGE_DIR_MARKER,
            &format!("{PACKAGE_DIR_MARKER}/{staging}/"),
            1,
        )
    } else {
        format!("{staging}/{stripped}")
    };

    normalize_separators(&prefixed)
}

/// Rewrite one entry for revert: strip the staging folder name, nothing else.
pub fn revert_entry(entry: &str, staging: &str) -> String {
    normalize_separators(&entry.replacen(staging, "", 1))
}

/// Apply stage or revert rewriting across every map expression, writing the
/// rewritten lists back into the manifest. Expressions that do not resolve
/// leave the manifest untouched.
pub fn rewrite_paths(manifest: &mut Manifest, rules: &Rules, staging: &str, mode: Mode) {
    for expr in &rules.map {
        let Some(entries) = manifest.get_paths(expr) else {
            continue;
        };

        let rewritten = entries
            .iter()
            .map(|entry| match mode {
                Mode::Prepare => stage_entry(entry, staging),
                Mode::Revert => revert_entry(entry, staging),
            })
            .collect();

        manifest.set_paths(expr, rewritten);
    }
}
