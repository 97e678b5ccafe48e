//! First-install flow: seed the project's Babel configuration.
//!
//! The overwrite confirmation is the only interactive prompt in the tool;
//! without a terminal the default answer (no) applies.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use crate::delegate::TRANSPILER_CONFIG;
use crate::templates::BABELRC_TEMPLATE;
use crate::ui;

pub fn init(root: &Path) -> Result<()> {
    let target = root.join(TRANSPILER_CONFIG);
    ui::info(&format!("checking if {TRANSPILER_CONFIG} exists..."));

    if target.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Found {TRANSPILER_CONFIG} in the project directory. Okay to overwrite?"
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !overwrite {
            ui::dim("nothing to see here, move along");
            return Ok(());
        }

        ui::warn(&format!("removing old {TRANSPILER_CONFIG} and copying new..."));
        fs::remove_file(&target)
            .with_context(|| format!("failed to remove {}", target.display()))?;
    }

    fs::write(&target, BABELRC_TEMPLATE)
        .with_context(|| format!("failed to write {}", target.display()))?;
    ui::success(&format!("created {}", target.display()));

    Ok(())
}
