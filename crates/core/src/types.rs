use regex::Regex;
use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single UTF-8 text file to write to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct FileRecord {
    /// Relative path inside the generated repo (POSIX style), e.g. `README.md`
    /// or `src/demo_repo/__init__.py`.
    pub path: String,
    /// UTF-8 text content for the file.
    pub content: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Structured output returned by one agent invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct GenerationResult {
    pub files: Vec<FileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GenerationResult {
    /// Set of paths exactly as the agent produced them.
    pub fn paths(&self) -> BTreeSet<String> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}

/// Input parameters for a scaffold generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub repo_name: String,
    pub purpose: String,
    pub package: String,
    #[serde(default = "default_license")]
    pub license: String,
}

fn default_license() -> String {
    "MIT".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid package name '{0}': expected an identifier like demo_repo")]
pub struct InvalidPackage(pub String);

impl GenerationRequest {
    pub fn new(
        repo_name: impl Into<String>,
        purpose: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            repo_name: repo_name.into(),
            purpose: purpose.into(),
            package: package.into(),
            license: default_license(),
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// The package name becomes a directory under `src/`, so it must be a
    /// plain identifier.
    pub fn validate(&self) -> Result<(), InvalidPackage> {
        validate_package_name(&self.package)
    }
}

pub fn validate_package_name(package: &str) -> Result<(), InvalidPackage> {
    let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    if re.is_match(package) {
        Ok(())
    } else {
        Err(InvalidPackage(package.to_string()))
    }
}

/// JSON Schema of [`GenerationResult`], handed to the agent as its output contract.
pub fn output_schema() -> RootSchema {
    schema_for!(GenerationResult)
}

/// Pretty JSON rendering of [`output_schema`] for embedding in prompts.
pub fn output_schema_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&output_schema())
}
