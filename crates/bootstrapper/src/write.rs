use crate::output::{output_report, MaterializeReport};
use crate::prelude::{eprintln, *};
use crate::writer::{materialize, WriteOptions};
use bootstrapper_core::extract::parse_generation;
use bootstrapper_core::required::validate;
use bootstrapper_core::types::{validate_package_name, GenerationResult};
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, Clone)]
pub struct WriteArgs {
    /// Saved agent result (JSON) to materialize
    #[arg(long)]
    pub from: PathBuf,

    /// Output directory to write the repo into
    #[arg(long, env = "BOOTSTRAPPER_OUT")]
    pub out: PathBuf,

    /// Python package name the result was generated for
    #[arg(long)]
    pub package: String,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load a saved result and check it against the required-path checklist.
pub fn load_result(path: &Path, package: &str) -> Result<GenerationResult> {
    validate_package_name(package)?;

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read result file {}", path.display()))?;
    let result = parse_generation(&raw)
        .with_context(|| format!("Failed to parse result file {}", path.display()))?;

    validate(package, &result.paths())?;

    Ok(result)
}

pub async fn run(args: WriteArgs, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Reading {}", args.from.display());
    }

    let result = load_result(&args.from, &args.package)?;

    let options = WriteOptions {
        force: args.force,
        dry_run: args.dry_run,
    };
    let plans = materialize(&args.out, &result.files, options)?;

    let report = MaterializeReport::new(&args.out, plans, result.notes, args.dry_run)?;
    output_report(&report, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrapper_core::required::{required_paths, MissingPaths};
    use bootstrapper_core::types::FileRecord;

    fn save(dir: &Path, result: &GenerationResult) -> PathBuf {
        let path = dir.join("result.json");
        std::fs::write(&path, serde_json::to_string(result).unwrap()).unwrap();
        path
    }

    fn scaffold(package: &str) -> GenerationResult {
        GenerationResult {
            files: required_paths(package)
                .into_iter()
                .map(|p| FileRecord::new(p, "x"))
                .collect(),
            notes: None,
        }
    }

    #[test]
    fn test_load_result_accepts_complete_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), &scaffold("demo_repo"));
        let result = load_result(&path, "demo_repo").unwrap();
        assert_eq!(result.files.len(), 7);
    }

    #[test]
    fn test_load_result_rejects_incomplete_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let mut result = scaffold("demo_repo");
        result.files.retain(|f| f.path != "ROADMAP.md");
        let path = save(dir.path(), &result);

        let err = load_result(&path, "demo_repo").unwrap_err();
        let missing = err.downcast_ref::<MissingPaths>().unwrap();
        assert_eq!(missing.missing, vec!["ROADMAP.md".to_string()]);
    }

    #[test]
    fn test_load_result_rejects_bad_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), &scaffold("demo_repo"));
        assert!(load_result(&path, "../demo").is_err());
    }

    #[test]
    fn test_load_result_accepts_fenced_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.md");
        let body = serde_json::to_string(&scaffold("pkg")).unwrap();
        std::fs::write(&path, format!("```json\n{body}\n```\n")).unwrap();
        assert!(load_result(&path, "pkg").is_ok());
    }
}
