//! Generate Markdown cheat sheets and practice exercises with an LLM.
//!
//! A request flows through four stages:
//!
//! - **Prompt**: [`prompt::build_prompt`] turns a [`GenerationRequest`] into model instructions
//! - **Client**: a [`CompletionClient`] makes exactly one call to the completion service
//! - **Output**: [`output::write_document`] writes the result to a timestamped file
//! - **CLI**: flag-driven and interactive commands wire the stages together

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod types;

pub use client::{create_client, CompletionClient, OpenAiClient};
pub use config::{Config, ConfigOverrides};
pub use error::GenerationError;
pub use pipeline::Generator;
pub use prompt::{build_prompt, Prompt};
pub use types::{Difficulty, DocumentKind, Format, GeneratedDocument, GenerationRequest};
