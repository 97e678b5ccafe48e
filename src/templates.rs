//! Bundled configuration templates and project bootstrapping.

use std::fs;
use std::path::Path;

use crate::config::RULES_FILE;
use crate::delegate::TRANSPILER_CONFIG;
use crate::error::StagehandResult;
use crate::ui;

/// Default Babel configuration seeded into new projects.
pub const BABELRC_TEMPLATE: &str = r#"{
    "presets": [
        [
            "@babel/preset-env",
            {
                "targets": {
                    "browsers": ["last 2 versions", "ie >= 11"]
                }
            }
        ]
    ],
    "compact": false
}
"#;

/// Default rules file seeded into new projects.
pub const RULES_TEMPLATE: &str = r#"{
    "map": [
        "classpath",
        "overrides"
    ],
    "toolkits": ["classic", "modern"],
    "builds": [],
    "externals": []
}
"#;

/// Copy each bundled template into the project when absent.
///
/// Existing files are never overwritten here; the interactive overwrite path
/// belongs to `--init`.
pub fn ensure_templates(root: &Path) -> StagehandResult<()> {
    let templates = [
        (TRANSPILER_CONFIG, BABELRC_TEMPLATE),
        (RULES_FILE, RULES_TEMPLATE),
    ];

    for (name, content) in templates {
        let target = root.join(name);
        ui::info(&format!("checking if configuration file {name} exists..."));

        if target.exists() {
            ui::dim(&format!("{} exists, skipping", target.display()));
        } else {
            ui::success(&format!("creating {}", target.display()));
            fs::write(&target, content)?;
        }
    }

    Ok(())
}
