use crate::required::{package_init_path, required_paths};
use crate::types::GenerationRequest;

/// System preamble for the scaffold agent.
pub const INSTRUCTIONS: &str = "\
You are RepoBootstrapper.

Goal: generate a minimal, clean Python repo scaffold.

Output MUST be a single JSON object matching the provided schema exactly:
  {\"files\": [{\"path\": ..., \"content\": ...}, ...], \"notes\": optional string}

HARD REQUIREMENTS (do not violate):
- All paths must be RELATIVE (no leading \"/\") and must NOT include \"..\".
- Use forward slashes in paths (POSIX style), even on Windows.
- Text files only (no binaries, no base64).
- Do not include secrets, tokens, API keys, or environment values.
- Keep files small, practical, and runnable.

You MUST include at least the required paths that the user provides in the prompt.
Before returning, CHECK your own output and ensure every required path exists.
If any are missing, ADD them before returning.";

fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the first-attempt prompt from a generation request.
///
/// Embeds the repo metadata, the full required-path checklist and the
/// per-file content expectations.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let required = bullet_list(required_paths(&request.package));
    let package_init = package_init_path(&request.package);

    let parts = [
        format!(
            "Generate a repo scaffold with:\n\nrepo_name: {}\npurpose: {}\npackage: {}\nlicense: {}",
            request.repo_name, request.purpose, request.package, request.license
        ),
        format!("REQUIRED PATHS (you MUST include EVERY item exactly as written):\n{required}"),
        format!(
            "Content expectations:\n\
             - README.md: brief overview + how to run tests + example usage blurb\n\
             - .gitignore: include Python/venv ignores and _scratch/\n\
             - pyproject.toml: minimal modern config (project metadata + pytest in dev deps)\n\
             - tests/test_smoke.py: a tiny pytest smoke test\n\
             - {package_init}: minimal package init"
        ),
        "Keep it minimal, clean, and consistent.".to_string(),
    ];

    parts.join("\n\n")
}

/// Build the follow-up prompt for a retry.
///
/// Only the previously missing paths are restated as context, together with
/// the full checklist; the agent is asked for a complete result, not a diff.
pub fn build_repair_prompt(request: &GenerationRequest, missing: &[String]) -> String {
    let parts = [
        "Your previous output was missing required files.".to_string(),
        format!("Missing paths you MUST add:\n{}", bullet_list(missing)),
        format!(
            "Return a COMPLETE result again that includes EVERY required path:\n{}",
            bullet_list(required_paths(&request.package))
        ),
        "Keep existing files minimal; do not add extras unless necessary.".to_string(),
    ];

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new("demo", "Show off the bootstrapper", "demo_repo")
    }

    #[test]
    fn test_prompt_embeds_metadata() {
        let prompt = build_prompt(&request().with_license("Apache-2.0"));
        assert!(prompt.starts_with("Generate a repo scaffold with:"));
        assert!(prompt.contains("repo_name: demo\n"));
        assert!(prompt.contains("purpose: Show off the bootstrapper\n"));
        assert!(prompt.contains("package: demo_repo\n"));
        assert!(prompt.contains("license: Apache-2.0"));
    }

    #[test]
    fn test_prompt_lists_every_required_path() {
        let prompt = build_prompt(&request());
        for path in required_paths("demo_repo") {
            assert!(prompt.contains(&format!("- {path}\n")) || prompt.contains(&format!("- {path}:")));
        }
        assert!(prompt.contains("you MUST include EVERY item exactly as written"));
    }

    #[test]
    fn test_prompt_required_block_is_sorted() {
        let prompt = build_prompt(&request());
        let block = prompt
            .split("exactly as written):\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert_eq!(
            block,
            "- .gitignore\n- AGENTS.md\n- README.md\n- ROADMAP.md\n- pyproject.toml\n- src/demo_repo/__init__.py\n- tests/test_smoke.py"
        );
    }

    #[test]
    fn test_prompt_mentions_package_init_expectation() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("- src/demo_repo/__init__.py: minimal package init"));
    }

    #[test]
    fn test_repair_prompt_names_only_missing_paths() {
        let missing = vec!["tests/test_smoke.py".to_string()];
        let prompt = build_repair_prompt(&request(), &missing);
        let block = prompt
            .split("Missing paths you MUST add:\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert_eq!(block, "- tests/test_smoke.py");
    }

    #[test]
    fn test_repair_prompt_restates_full_checklist() {
        let prompt = build_repair_prompt(&request(), &["README.md".to_string()]);
        assert!(prompt.contains("Return a COMPLETE result again"));
        for path in required_paths("demo_repo") {
            assert!(prompt.contains(&format!("- {path}")));
        }
    }

    #[test]
    fn test_repair_prompt_omits_repo_metadata() {
        let prompt = build_repair_prompt(&request(), &["README.md".to_string()]);
        assert!(!prompt.contains("Show off the bootstrapper"));
        assert!(!prompt.contains("repo_name:"));
    }
}
