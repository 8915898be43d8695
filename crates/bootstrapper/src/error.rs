use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Unsafe path (escapes output dir): {path}")]
    PathEscape { path: String },

    #[error("Refusing to overwrite existing file: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Agent output missing required files after retries:\n- {}", .missing.join("\n- "))]
    GenerationFailed { missing: Vec<String> },
}
