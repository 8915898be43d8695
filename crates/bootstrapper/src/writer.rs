use crate::guard;
use crate::prelude::*;
use bootstrapper_core::plan::WritePlan;
use bootstrapper_core::types::FileRecord;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Plan and check everything but leave the filesystem untouched.
    pub dry_run: bool,
}

/// Resolve every record under `output_root` and decide create vs overwrite.
///
/// Fails on the first path that escapes the root; nothing is written.
pub fn plan(output_root: &Path, files: &[FileRecord]) -> Result<Vec<WritePlan>> {
    files
        .iter()
        .map(|file| {
            let path = guard::resolve(output_root, &file.path)?;
            let exists = path.exists();
            Ok(WritePlan::new(path, &file.content, exists))
        })
        .collect()
}

/// Plan the writes and, unless this is a dry run, perform them in order.
///
/// The overwrite check runs per file right before its write and aborts the
/// batch on the first conflict. Files written earlier in the same batch stay
/// on disk.
pub fn materialize(
    output_root: &Path,
    files: &[FileRecord],
    options: WriteOptions,
) -> Result<Vec<WritePlan>> {
    let plans = plan(output_root, files)?;

    if options.dry_run {
        log::debug!("dry run: {} planned writes", plans.len());
        return Ok(plans);
    }

    fs::create_dir_all(output_root).with_context(|| {
        format!(
            "Failed to create output directory {}",
            output_root.display()
        )
    })?;

    for (plan, file) in plans.iter().zip(files) {
        if let Some(parent) = plan.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        if plan.path.exists() && !options.force {
            log::warn!("refusing to overwrite {}", plan.path.display());
            return Err(Error::AlreadyExists {
                path: plan.path.clone(),
            }
            .into());
        }

        fs::write(&plan.path, &file.content)
            .with_context(|| format!("Failed to write {}", plan.path.display()))?;
        log::debug!("{} {} ({} bytes)", plan.action, plan.path.display(), plan.bytes);
    }

    Ok(plans)
}
