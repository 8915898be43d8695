use crate::agent::{BootstrapAgent, Provider, RigAgent};
use crate::output::{output_report, MaterializeReport};
use crate::prelude::{eprintln, *};
use crate::writer::{materialize, WriteOptions};
use bootstrapper_core::attempts::{RepairLoop, Step, MAX_ATTEMPTS};
use bootstrapper_core::types::{output_schema_json, GenerationRequest, GenerationResult};
use std::path::PathBuf;

#[derive(Debug, clap::Args, Clone)]
pub struct GenerateOptions {
    /// Output directory to generate the repo into
    #[arg(long, env = "BOOTSTRAPPER_OUT")]
    pub out: PathBuf,

    /// Name of the repository
    #[arg(long)]
    pub repo_name: String,

    /// One-line purpose of the repository
    #[arg(long)]
    pub purpose: String,

    /// Python package name (becomes src/<package>/)
    #[arg(long)]
    pub package: String,

    /// License identifier
    #[arg(long, default_value = "MIT")]
    pub license: String,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also save the agent's structured result to this file
    #[arg(long)]
    pub save_result: Option<PathBuf>,

    /// Number of agent attempts before giving up
    #[arg(long, default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Model provider
    #[arg(long, value_enum, env = "BOOTSTRAPPER_PROVIDER", default_value = "ollama")]
    pub provider: Provider,

    /// Model name (defaults to a provider-specific model)
    #[arg(long, env = "BOOTSTRAPPER_MODEL")]
    pub model: Option<String>,

    /// Ollama base URL
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,
}

/// Drive the agent through the repair loop until the output is complete.
///
/// Agent errors abort immediately; only missing paths are retried.
pub async fn generate<A: BootstrapAgent>(
    agent: &A,
    request: &GenerationRequest,
    max_attempts: usize,
) -> Result<GenerationResult> {
    let schema = output_schema_json().context("Failed to render the output schema")?;
    let mut repair = RepairLoop::with_max_attempts(request.clone(), max_attempts);

    while let Some((attempt, prompt)) = repair.next_prompt() {
        log::info!(
            "attempt {}/{}: prompting agent ({} chars)",
            attempt,
            repair.max_attempts(),
            prompt.len()
        );

        let result = agent.invoke(&prompt, &schema).await?;

        match repair.observe(result) {
            Step::Satisfied(result) => {
                log::info!("attempt {}: all required paths present", attempt);
                return Ok(result);
            }
            Step::Retry { missing } => {
                log::warn!("attempt {}: missing {}", attempt, missing.join(", "));
            }
            Step::Exhausted { missing } => {
                return Err(Error::GenerationFailed { missing }.into());
            }
        }
    }

    Err(Error::GenerationFailed {
        missing: repair.missing().to_vec(),
    }
    .into())
}

/// Pick the model: explicit flag (or `BOOTSTRAPPER_MODEL`), then
/// `OPENAI_MODEL` for the openai provider, then the provider default.
fn resolve_model(model: Option<String>, provider: Provider, openai_model: Option<String>) -> String {
    let openai_model = match provider {
        Provider::Openai => openai_model.filter(|m| !m.is_empty()),
        Provider::Ollama => None,
    };

    model
        .filter(|m| !m.is_empty())
        .or(openai_model)
        .unwrap_or_else(|| provider.default_model().to_string())
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let request = GenerationRequest::new(&options.repo_name, &options.purpose, &options.package)
        .with_license(&options.license);
    request.validate()?;

    let agent = RigAgent {
        provider: options.provider,
        model: resolve_model(
            options.model.clone(),
            options.provider,
            std::env::var("OPENAI_MODEL").ok(),
        ),
        ollama_url: options.ollama_url.clone(),
    };

    if global.verbose {
        eprintln!("Provider: {:?}", agent.provider);
        eprintln!("Model: {}", agent.model);
        if agent.provider == Provider::Ollama {
            eprintln!("Ollama URL: {}", agent.ollama_url);
        }
        eprintln!("Output: {}", options.out.display());
    }

    let result = generate(&agent, &request, options.max_attempts).await?;

    if let Some(path) = &options.save_result {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to save result to {}", path.display()))?;
    }

    let write_options = WriteOptions {
        force: options.force,
        dry_run: options.dry_run,
    };
    let plans = materialize(&options.out, &result.files, write_options)?;

    let report = MaterializeReport::new(&options.out, plans, result.notes, options.dry_run)?;
    output_report(&report, options.json)
}
