use crate::prelude::*;
use bootstrapper_core::extract::parse_generation;
use bootstrapper_core::prompt::INSTRUCTIONS;
use bootstrapper_core::types::GenerationResult;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::{ollama, openai};

/// Something that turns a prompt into a structured scaffold.
///
/// Errors are transport or provider failures; callers propagate them as-is.
#[allow(async_fn_in_trait)]
pub trait BootstrapAgent {
    async fn invoke(&self, prompt: &str, schema: &str) -> Result<GenerationResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Provider {
    Ollama,
    Openai,
}

impl Provider {
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Ollama => "llama3.1",
            Provider::Openai => "gpt-4o-mini",
        }
    }
}

/// Agent backed by a rig completion model.
#[derive(Debug, Clone)]
pub struct RigAgent {
    pub provider: Provider,
    pub model: String,
    pub ollama_url: String,
}

fn create_ollama_client(ollama_url: &str) -> Result<ollama::Client> {
    use rig::client::Nothing;

    ollama::Client::builder()
        .api_key(Nothing)
        .base_url(ollama_url)
        .build()
        .map_err(|e| eyre!("Failed to create Ollama client: {}", e))
}

fn create_openai_client() -> Result<openai::Client> {
    use rig::client::ProviderClient;

    if std::env::var("OPENAI_API_KEY").map_or(true, |key| key.is_empty()) {
        return Err(eyre!("OPENAI_API_KEY must be set to use the openai provider"));
    }

    Ok(openai::Client::from_env())
}

fn preamble(schema: &str) -> String {
    format!("{INSTRUCTIONS}\n\nJSON Schema of the required output:\n{schema}")
}

impl BootstrapAgent for RigAgent {
    async fn invoke(&self, prompt: &str, schema: &str) -> Result<GenerationResult> {
        let preamble = preamble(schema);

        let response = match self.provider {
            Provider::Ollama => {
                let client = create_ollama_client(&self.ollama_url)?;
                let agent = client.agent(&self.model).preamble(&preamble).build();
                agent.prompt(prompt.to_string()).await
            }
            Provider::Openai => {
                let client = create_openai_client()?;
                let agent = client.agent(&self.model).preamble(&preamble).build();
                agent.prompt(prompt.to_string()).await
            }
        }
        .map_err(|e| eyre!("Model generation failed: {}", e))?;

        log::debug!("agent response: {} chars", response.len());

        parse_generation(&response).context("Failed to read structured output from the agent")
    }
}
