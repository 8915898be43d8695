use std::collections::BTreeSet;

/// Scaffold paths every generation must produce, independent of the package.
pub const REQUIRED_PATHS: [&str; 6] = [
    "README.md",
    "AGENTS.md",
    ".gitignore",
    "pyproject.toml",
    "ROADMAP.md",
    "tests/test_smoke.py",
];

/// Error returned when produced output lacks required paths.
///
/// `missing` is sorted so messages are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Agent output missing required files:\n- {}", .missing.join("\n- "))]
pub struct MissingPaths {
    pub missing: Vec<String>,
}

/// Package root marker for `package`.
pub fn package_init_path(package: &str) -> String {
    format!("src/{package}/__init__.py")
}

/// Full required-path set for `package`, in lexicographic order.
pub fn required_paths(package: &str) -> BTreeSet<String> {
    let mut required: BTreeSet<String> = REQUIRED_PATHS.iter().map(|p| p.to_string()).collect();
    required.insert(package_init_path(package));
    required
}

/// Required paths absent from `produced`, sorted.
pub fn missing_paths(package: &str, produced: &BTreeSet<String>) -> Vec<String> {
    required_paths(package)
        .into_iter()
        .filter(|p| !produced.contains(p))
        .collect()
}

/// Succeeds iff every required path for `package` appears in `produced`.
///
/// Only presence is checked; content is never inspected.
pub fn validate(package: &str, produced: &BTreeSet<String>) -> Result<(), MissingPaths> {
    let missing = missing_paths(package, produced);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingPaths { missing })
    }
}
