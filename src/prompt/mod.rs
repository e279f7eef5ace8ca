//! Prompt construction for the completion service.
//!
//! [`build_prompt`] is a pure function of the request: no I/O, no clock and
//! no randomness, so identical requests always produce identical prompts.

mod cheat_sheet;
mod practice;

pub use cheat_sheet::{essential_method_count, DEFAULT_CORE_SECTIONS};
pub use practice::{
    ExerciseTiers, CODE_REVIEW_EXERCISES, DEBUGGING_CHALLENGES, DEFAULT_EXERCISE_TYPES,
    MINI_PROJECTS,
};

use crate::error::GenerationError;
use crate::types::{GenerationRequest, RequestKind};

const CHEAT_SHEET_SYSTEM: &str = "You are an expert technical writer and educator who creates \
comprehensive, well-structured cheat sheets for various technologies. Your cheat sheets are \
accurate, practical, and beautifully formatted in Markdown.";

const PRACTICE_SYSTEM: &str = "You are an expert educator and practical coding instructor who \
creates comprehensive, progressive practice exercises. Your exercises build real-world skills \
through hands-on learning, ranging from basic concepts to complex applications, and simulate \
the scenarios and challenges developers face at work.";

/// A system instruction plus the user message sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: &'static str,
    pub body: String,
}

pub fn build_prompt(request: &GenerationRequest) -> Result<Prompt, GenerationError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(GenerationError::InvalidRequest(
            "topic must not be blank".to_string(),
        ));
    }

    match &request.kind {
        RequestKind::CheatSheet {
            format,
            sections,
            include_examples,
        } => {
            let method_count = essential_method_count(request.difficulty).ok_or_else(|| {
                GenerationError::InvalidRequest(
                    "difficulty 'mixed' is only supported for practice documents".to_string(),
                )
            })?;
            Ok(Prompt {
                system: CHEAT_SHEET_SYSTEM,
                body: cheat_sheet::render(
                    topic,
                    request.difficulty,
                    method_count,
                    *format,
                    sections.as_deref(),
                    *include_examples,
                ),
            })
        }
        RequestKind::Practice {
            exercise_count,
            include_solutions,
            focus_areas,
            exercise_types,
        } => {
            if *exercise_count == 0 {
                return Err(GenerationError::InvalidRequest(
                    "exercise count must be greater than zero".to_string(),
                ));
            }
            Ok(Prompt {
                system: PRACTICE_SYSTEM,
                body: practice::render(
                    topic,
                    request.difficulty,
                    *exercise_count,
                    *include_solutions,
                    focus_areas.as_deref(),
                    exercise_types.as_deref(),
                ),
            })
        }
    }
}
