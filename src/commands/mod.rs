//! Action pipelines behind the CLI flags.

mod init;
mod prepare;
mod revert;

pub use init::init;
pub use prepare::prepare;
pub use revert::revert;

use anyhow::Result;

use crate::config::{Mode, Options, Rules};
use crate::ui;

/// Dispatch an invocation to its pipeline. Recursion into external projects
/// re-enters here with the external's directory as project root.
pub fn run(opts: &Options) -> Result<()> {
    match opts.mode {
        Mode::Prepare => prepare(opts),
        Mode::Revert => revert(opts),
    }
}

/// Load the rules file for this invocation, reporting unknown keys.
pub(crate) fn load_rules(opts: &Options) -> crate::error::StagehandResult<Rules> {
    let (rules, warnings) = Rules::load_with_warnings(&opts.rules_path(), opts.sanitize)?;
    for warning in &warnings {
        ui::warn(&format!(
            "unknown key '{}' in {}",
            warning.key,
            warning.file.display()
        ));
    }
    Ok(rules)
}
