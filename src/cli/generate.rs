use anyhow::{Context, Result};
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use super::tui::theme::{
    print_banner, print_detail, print_preview, print_step, print_success, print_summary,
};
use crate::client::CompletionClient;
use crate::config::Config;
use crate::error::GenerationError;
use crate::pipeline::Generator;
use crate::prompt::build_prompt;
use crate::types::{Difficulty, DocumentKind, GenerationRequest, RequestKind};

static THINKING: Emoji<'_, '_> = Emoji("🤖 ", "");

/// Generate one document, optionally preview it, then write it to disk
pub async fn generate_document(
    config: &Config,
    client: &dyn CompletionClient,
    request: &GenerationRequest,
    preview: bool,
) -> Result<PathBuf, GenerationError> {
    let generator = Generator::new(client, &config.output_directory);

    print_step(&format!(
        "Generating {} for: {}",
        request.document_kind(),
        request.topic
    ));
    match &request.kind {
        RequestKind::CheatSheet { format, .. } => print_detail(&format!(
            "Difficulty: {} | Style: {} | Model: {}",
            request.difficulty,
            format,
            client.model()
        )),
        RequestKind::Practice { exercise_count, .. } => print_detail(&format!(
            "Difficulty: {} | Exercises: {} | Model: {}",
            request.difficulty,
            exercise_count,
            client.model()
        )),
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("{}Waiting for the completion service...", THINKING));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = generator.generate(request).await;
    pb.finish_and_clear();
    let document = result?;

    if preview {
        print_preview(document.kind, &document.content);
    }

    let path = generator.save(&document)?;
    print_success(&format!(
        "{} saved to: {}",
        capitalize(&document.kind.to_string()),
        path.display()
    ));
    tracing::debug!(dir = %generator.output_dir().display(), "output directory");
    Ok(path)
}

pub async fn run_generate(
    config: &Config,
    client: &dyn CompletionClient,
    request: GenerationRequest,
    preview: bool,
) -> Result<PathBuf> {
    print_banner(
        "AI CHEAT SHEET GENERATOR",
        &format!("Creating cheat sheet for: {}", request.topic),
    );
    generate_document(config, client, &request, preview)
        .await
        .with_context(|| format!("generate failed for topic '{}'", request.topic))
}

pub async fn run_practice(
    config: &Config,
    client: &dyn CompletionClient,
    request: GenerationRequest,
    preview: bool,
) -> Result<PathBuf> {
    print_banner(
        "AI PRACTICE GENERATOR",
        &format!("Creating practice exercises for: {}", request.topic),
    );
    generate_document(config, client, &request, preview)
        .await
        .with_context(|| format!("practice failed for topic '{}'", request.topic))
}

/// Cheat sheet first, then practice exercises, one after the other.
///
/// A failure in the second step leaves the cheat sheet on disk.
pub async fn run_complete(
    config: &Config,
    client: &dyn CompletionClient,
    topic: &str,
    difficulty: Difficulty,
    exercise_count: u32,
    preview: bool,
) -> Result<(PathBuf, PathBuf)> {
    let cheat_sheet = GenerationRequest::cheat_sheet(
        topic,
        difficulty,
        config.default_format,
        None,
        config.default_include_examples,
    );
    let practice = GenerationRequest::practice(topic, difficulty, exercise_count, true, None, None);

    // Validate both requests before the first call
    for request in [&cheat_sheet, &practice] {
        build_prompt(request)
            .with_context(|| format!("complete rejected its options for topic '{}'", topic))?;
    }

    print_banner(
        "COMPLETE LEARNING PACKAGE",
        &format!("Creating cheat sheet + practice exercises for: {}", topic),
    );

    print_step("Step 1/2: cheat sheet");
    let cheat_path = generate_document(config, client, &cheat_sheet, preview)
        .await
        .with_context(|| format!("complete failed at step 1 (cheat sheet) for topic '{}'", topic))?;

    print_step("Step 2/2: practice exercises");
    let practice_path = generate_document(config, client, &practice, preview)
        .await
        .with_context(|| {
            format!(
                "complete failed at step 2 (practice) for topic '{}'; the cheat sheet was kept at {}",
                topic,
                cheat_path.display()
            )
        })?;

    print_summary(&[
        (DocumentKind::CheatSheet, cheat_path.as_path()),
        (DocumentKind::Practice, practice_path.as_path()),
    ]);

    Ok((cheat_path, practice_path))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
