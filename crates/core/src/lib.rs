//! Core library for bootstrapper
//!
//! This crate implements the **Functional Core** of the bootstrapper
//! application, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! - **`bootstrapper_core`** (this crate): Pure transformation functions with zero I/O
//! - **`bootstrapper`**: Filesystem writes, agent calls, and orchestration (the Imperative Shell)
//!
//! Everything here is deterministic and can be tested with fixture data: the
//! shell decides *when* to call the agent or touch the disk, this crate decides
//! *what* to ask for and whether the answer is good enough.
//!
//! # Module Organization
//!
//! - [`types`]: Data model (`FileRecord`, `GenerationRequest`, `GenerationResult`) and the output schema
//! - [`paths`]: Path normalization and containment checks used by the path guard
//! - [`required`]: Required-path checklist and completeness validation
//! - [`prompt`]: Initial and repair prompts for the scaffold agent
//! - [`extract`]: Turning a raw model reply into a `GenerationResult`
//! - [`attempts`]: The bounded repair-loop state machine
//! - [`plan`]: Write plans and reporting summaries
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use bootstrapper_core::attempts::{RepairLoop, Step};
//! use bootstrapper_core::types::GenerationRequest;
//!
//! let mut repair = RepairLoop::new(GenerationRequest::new("demo", "testing", "demo_repo"));
//! while let Some((attempt, prompt)) = repair.next_prompt() {
//!     let result = call_agent(&prompt)?;
//!     match repair.observe(result) {
//!         Step::Satisfied(result) => return Ok(result),
//!         Step::Retry { missing } => log::warn!("attempt {attempt} missing {missing:?}"),
//!         Step::Exhausted { missing } => return Err(failed(missing)),
//!     }
//! }
//! ```

pub mod attempts;
pub mod extract;
pub mod paths;
pub mod plan;
pub mod prompt;
pub mod required;
pub mod types;
