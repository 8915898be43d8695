//! Path safety guard: maps untrusted relative paths onto an output root.

use crate::prelude::*;
use bootstrapper_core::paths::{is_contained, normalize_relative};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolve `relative` under `output_root`, refusing anything that lands outside it.
///
/// The input is normalized first (backslashes, leading slashes), then joined
/// and canonicalized. The result must be the root itself or a descendant.
pub fn resolve(output_root: &Path, relative: &str) -> Result<PathBuf> {
    let root = canonical_root(output_root)?;
    let normalized = normalize_relative(relative);
    let candidate = canonicalize_lenient(&root.join(&normalized))?;

    if !is_contained(&root, &candidate) {
        log::warn!("rejected path outside {}: {}", root.display(), relative);
        return Err(Error::PathEscape { path: normalized }.into());
    }

    Ok(candidate)
}

/// Canonical form of the output root. The root does not need to exist.
pub fn canonical_root(output_root: &Path) -> Result<PathBuf> {
    canonicalize_lenient(output_root)
}

/// Symlink hops followed through dangling links before giving up.
const MAX_SYMLINK_HOPS: usize = 40;

/// Canonicalize a path that may not exist yet.
///
/// Existing prefixes go through the filesystem so symlinks are followed;
/// segments that do not exist are resolved lexically. A dangling symlink is
/// replaced by its fully resolved target, following chains of links, so a
/// later write cannot follow it out of the root.
fn canonicalize_lenient(path: &Path) -> Result<PathBuf> {
    let mut hops = 0;
    resolve_components(path, &mut hops)
}

fn resolve_components(path: &Path, hops: &mut usize) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read current directory")?
            .join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                let Ok(metadata) = fs::symlink_metadata(&resolved) else {
                    continue;
                };
                resolved = match fs::canonicalize(&resolved) {
                    Ok(canonical) => canonical,
                    Err(_) if metadata.file_type().is_symlink() => {
                        *hops += 1;
                        if *hops > MAX_SYMLINK_HOPS {
                            return Err(eyre!(
                                "Too many levels of symbolic links at {}",
                                resolved.display()
                            ));
                        }
                        let target = fs::read_link(&resolved).with_context(|| {
                            format!("Failed to read symlink {}", resolved.display())
                        })?;
                        let parent = resolved.parent().unwrap_or(Path::new("/"));
                        resolve_components(&parent.join(target), hops)?
                    }
                    Err(e) => {
                        return Err(e)
                            .with_context(|| format!("Failed to resolve {}", resolved.display()))
                    }
                };
            }
        }
    }

    Ok(resolved)
}
