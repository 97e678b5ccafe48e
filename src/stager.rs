//! Copies resolved source directories into the staging folder.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::StagehandResult;
use crate::ui;

/// Stage each resolved directory under `staging`.
///
/// A stale copy at the target is deleted first, so re-staging is idempotent.
/// Missing origins are skipped without error; source trees legitimately omit
/// optional directories such as overrides.
pub fn stage_sources(root: &Path, staging: &Path, dirs: &[String]) -> StagehandResult<()> {
    for dir in dirs {
        let origin = root.join(dir);
        let target = staging.join(dir);

        if target.exists() {
            ui::warn(&format!("...removing stale copy: {}", target.display()));
            fs::remove_dir_all(&target)?;
        }

        if !origin.exists() {
            continue;
        }

        // A target inside its own origin would recurse forever.
        if target.starts_with(&origin) {
            ui::warn(&format!("...skipping {}: contains the staging folder", dir));
            continue;
        }

        ui::info(&format!("...copying source: {}", origin.display()));
        copy_dir_all(&origin, &target)?;
    }

    Ok(())
}

fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
