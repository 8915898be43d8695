use std::path::Path;

/// Normalize an agent-supplied path into a relative POSIX path.
///
/// Backslashes become forward slashes and leading slashes are stripped, so
/// `\\src\\pkg` and `/src/pkg` both become `src/pkg`. Parent segments are left
/// in place; rejecting them is the guard's job once the path is resolved.
pub fn normalize_relative(raw: &str) -> String {
    raw.replace('\\', "/").trim_start_matches('/').to_string()
}

/// True when `candidate` is `root` itself or a strict descendant of it.
///
/// Comparison is component-wise, so `/out-other` is not inside `/out`.
pub fn is_contained(root: &Path, candidate: &Path) -> bool {
    candidate.starts_with(root)
}
