//! Revert pipeline: restore manifest paths, recurse into externals.
//!
//! The staging folder is left in place; only the manifest changes.

use anyhow::{Context, Result};

use crate::config::{Mode, Options, STAGING_DIR};
use crate::delegate;
use crate::manifest::Manifest;
use crate::rewriter::rewrite_paths;
use crate::ui;

pub fn revert(opts: &Options) -> Result<()> {
    let rules = super::load_rules(opts)?;
    let mut manifest = Manifest::load(&opts.project_root, opts.sanitize)?;

    rewrite_paths(&mut manifest, &rules, STAGING_DIR, Mode::Revert);
    ui::info(&format!(
        "restoring source directories in {}...",
        manifest.path().display()
    ));
    manifest.save().context("failed to write the manifest")?;

    delegate::process_externals(opts, &rules.externals);

    Ok(())
}
