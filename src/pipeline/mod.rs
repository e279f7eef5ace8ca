use chrono::Local;
use std::path::{Path, PathBuf};

use crate::client::CompletionClient;
use crate::error::GenerationError;
use crate::output::write_document;
use crate::prompt::build_prompt;
use crate::types::{GeneratedDocument, GenerationRequest};

/// Runs one request through prompt, completion and file output
pub struct Generator<'a> {
    client: &'a dyn CompletionClient,
    output_dir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(client: &'a dyn CompletionClient, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate, build the prompt and make the single completion call.
    /// Nothing touches the filesystem here.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        let prompt = build_prompt(request)?;

        tracing::info!(
            topic = %request.topic,
            kind = %request.document_kind(),
            difficulty = %request.difficulty,
            model = self.client.model(),
            "generating document"
        );

        let content = self.client.generate(&prompt).await?;

        Ok(GeneratedDocument {
            content,
            kind: request.document_kind(),
            topic: request.topic.clone(),
            difficulty: request.difficulty,
            timestamp: Local::now(),
        })
    }

    pub fn save(&self, document: &GeneratedDocument) -> Result<PathBuf, GenerationError> {
        write_document(document, &self.output_dir)
    }

    #[cfg(test)]
    pub async fn run(&self, request: &GenerationRequest) -> Result<PathBuf, GenerationError> {
        let document = self.generate(request).await?;
        self.save(&document)
    }
}
