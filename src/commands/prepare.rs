//! Prepare pipeline: bootstrap templates, stage sources, rewrite the
//! manifest, recurse into externals, transpile.

use anyhow::{Context, Result};

use crate::config::{Mode, Options, STAGING_DIR};
use crate::delegate;
use crate::manifest::Manifest;
use crate::resolver::resolve_source_paths;
use crate::rewriter::rewrite_paths;
use crate::stager::stage_sources;
use crate::templates::ensure_templates;
use crate::ui;

pub fn prepare(opts: &Options) -> Result<()> {
    ensure_templates(&opts.project_root).context("failed to bootstrap configuration templates")?;

    let rules = super::load_rules(opts)?;
    let mut manifest = Manifest::load(&opts.project_root, opts.sanitize)?;

    let dirs = resolve_source_paths(&rules, &manifest);
    stage_sources(&opts.project_root, &opts.staging_dir(), &dirs)
        .context("failed to stage source directories")?;

    let backup = manifest
        .write_backup()
        .context("failed to back up the manifest")?;
    ui::warn(&format!("creating manifest backup at {}", backup.display()));

    rewrite_paths(&mut manifest, &rules, STAGING_DIR, Mode::Prepare);
    ui::info(&format!(
        "updating {} with staged source directories...",
        manifest.path().display()
    ));
    manifest.save().context("failed to write the manifest")?;

    delegate::process_externals(opts, &rules.externals);
    delegate::run_transpiler(&opts.project_root, &opts.staging_dir());

    Ok(())
}
