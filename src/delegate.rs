//! External delegate invocation.
//!
//! Hands the staged tree to Babel and recurses into configured external
//! projects. Delegate failures never become this tool's exit code; the run
//! is reported as successful regardless.

use std::path::Path;
use std::process::Command;

use crate::config::{Mode, Options, RULES_FILE};
use crate::ui;

/// The transpiler launched against the staging folder.
pub const TRANSPILER_BIN: &str = "babel";

/// Transpiler configuration file expected at the project root.
pub const TRANSPILER_CONFIG: &str = ".babelrc";

/// Run the transpiler over the staging tree, in place: the staging folder is
/// both the input and the output directory.
pub fn run_transpiler(root: &Path, staging: &Path) {
    let config = root.join(TRANSPILER_CONFIG);

    ui::info(&format!("processing {}", staging.display()));
    ui::info(&format!(
        "npx {} {} -d {} --config-file {}",
        TRANSPILER_BIN,
        staging.display(),
        staging.display(),
        config.display()
    ));

    let status = Command::new("npx")
        .arg(TRANSPILER_BIN)
        .arg(staging)
        .arg("-d")
        .arg(staging)
        .arg("--config-file")
        .arg(&config)
        .status();

    if let Err(err) = status {
        ui::warn(&format!("could not launch {}: {}", TRANSPILER_BIN, err));
    }
}

/// Recurse into each configured external project, sequentially and in
/// configuration order.
///
/// Externals without their own rules file are skipped with a warning. An
/// external that fails is also only warned about; processing continues with
/// the next one.
pub fn process_externals(opts: &Options, externals: &[String]) {
    for external in externals {
        let root = opts.project_root.join(external);

        if !root.join(RULES_FILE).exists() {
            ui::warn(&format!("{external} has no {RULES_FILE} configured, skipping"));
            continue;
        }

        match opts.mode {
            Mode::Prepare => ui::success(&format!("{external} has {RULES_FILE}, preparing...")),
            Mode::Revert => ui::success(&format!("{external} has {RULES_FILE}, reverting...")),
        }

        if let Err(err) = crate::commands::run(&opts.for_external(root)) {
            ui::warn(&format!("{external}: {err:#}"));
        }
    }
}
