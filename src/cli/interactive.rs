//! Question/answer flows for `interactive` and `practice-interactive`.
//!
//! Each flow is a linear state machine: one step per question, moving
//! forward on a valid answer and staying put on an invalid one. Both flows
//! finish with the same [`GenerationRequest`] the flag-driven commands build.

use anyhow::Result;
use inquire::{Confirm, CustomType, Select, Text};
use std::path::PathBuf;

use super::generate::{run_generate, run_practice};
use super::tui::theme::{cheatsheet_theme, print_banner, print_error};
use crate::client::CompletionClient;
use crate::config::Config;
use crate::types::{parse_list, Difficulty, Format, GenerationRequest};

/// Source of answers. [`InquirePrompter`] asks on the terminal.
pub trait Prompter {
    fn text(&mut self, message: &str, help: Option<&str>) -> Result<String>;
    /// Returns the index of the chosen option
    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
    fn number(&mut self, message: &str, default: u32) -> Result<u32>;
}

pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str, help: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message).with_render_config(cheatsheet_theme());
        if let Some(help) = help {
            prompt = prompt.with_help_message(help);
        }
        Ok(prompt.prompt()?)
    }

    fn select(&mut self, message: &str, options: &[&str], default: usize) -> Result<usize> {
        let choice = Select::new(message, options.to_vec())
            .with_starting_cursor(default)
            .with_render_config(cheatsheet_theme())
            .prompt()?;
        Ok(options.iter().position(|o| *o == choice).unwrap_or(default))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(message)
            .with_default(default)
            .with_render_config(cheatsheet_theme())
            .prompt()?)
    }

    fn number(&mut self, message: &str, default: u32) -> Result<u32> {
        Ok(CustomType::<u32>::new(message)
            .with_default(default)
            .with_error_message("Please type a whole number")
            .with_render_config(cheatsheet_theme())
            .prompt()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheatSheetStep {
    Topic,
    Difficulty,
    Format,
    Examples,
    Sections,
    Preview,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PracticeStep {
    Topic,
    Difficulty,
    ExerciseCount,
    Solutions,
    FocusAreas,
    Preview,
    Done,
}

/// Answers collected so far; turned into a request at the end
#[derive(Debug, Default)]
struct Answers {
    topic: String,
    difficulty: Difficulty,
    format: Format,
    include_examples: bool,
    sections: Option<Vec<String>>,
    exercise_count: u32,
    include_solutions: bool,
    focus_areas: Option<Vec<String>>,
    preview: bool,
}

/// A finished interactive session
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveOutcome {
    pub request: GenerationRequest,
    pub preview: bool,
}

pub fn collect_cheat_sheet(
    prompter: &mut dyn Prompter,
    config: &Config,
) -> Result<InteractiveOutcome> {
    let mut answers = Answers {
        include_examples: config.default_include_examples,
        ..Answers::default()
    };
    let mut step = CheatSheetStep::Topic;

    while step != CheatSheetStep::Done {
        step = match step {
            CheatSheetStep::Topic => {
                match ask_topic(
                    prompter,
                    "What technology/topic would you like a cheat sheet for?",
                )? {
                    Some(topic) => {
                        answers.topic = topic;
                        CheatSheetStep::Difficulty
                    }
                    None => CheatSheetStep::Topic,
                }
            }
            CheatSheetStep::Difficulty => {
                answers.difficulty = ask_difficulty(
                    prompter,
                    &Difficulty::CHEAT_SHEET_LEVELS,
                    config.cheat_sheet_difficulty(),
                )?;
                CheatSheetStep::Format
            }
            CheatSheetStep::Format => {
                let labels: Vec<&str> = Format::ALL.iter().map(Format::as_str).collect();
                let default = Format::ALL
                    .iter()
                    .position(|f| *f == config.default_format)
                    .unwrap_or(0);
                let idx = prompter.select("Format style", &labels, default)?;
                answers.format = Format::ALL.get(idx).copied().unwrap_or(config.default_format);
                CheatSheetStep::Examples
            }
            CheatSheetStep::Examples => {
                answers.include_examples =
                    prompter.confirm("Include code examples?", answers.include_examples)?;
                CheatSheetStep::Sections
            }
            CheatSheetStep::Sections => {
                let input = prompter.text(
                    "Specific sections to include",
                    Some("Comma-separated, or press Enter for all"),
                )?;
                answers.sections = parse_list(&input);
                CheatSheetStep::Preview
            }
            CheatSheetStep::Preview => {
                answers.preview = prompter.confirm("Preview before saving?", false)?;
                CheatSheetStep::Done
            }
            CheatSheetStep::Done => CheatSheetStep::Done,
        };
    }

    Ok(InteractiveOutcome {
        request: GenerationRequest::cheat_sheet(
            answers.topic,
            answers.difficulty,
            answers.format,
            answers.sections,
            answers.include_examples,
        ),
        preview: answers.preview,
    })
}

pub fn collect_practice(
    prompter: &mut dyn Prompter,
    config: &Config,
) -> Result<InteractiveOutcome> {
    let mut answers = Answers {
        exercise_count: config.default_exercise_count,
        include_solutions: true,
        ..Answers::default()
    };
    let mut step = PracticeStep::Topic;

    while step != PracticeStep::Done {
        step = match step {
            PracticeStep::Topic => {
                match ask_topic(prompter, "What topic would you like to practice?")? {
                    Some(topic) => {
                        answers.topic = topic;
                        PracticeStep::Difficulty
                    }
                    None => PracticeStep::Topic,
                }
            }
            PracticeStep::Difficulty => {
                answers.difficulty =
                    ask_difficulty(prompter, &Difficulty::ALL, config.default_difficulty)?;
                PracticeStep::ExerciseCount
            }
            PracticeStep::ExerciseCount => {
                let count = prompter.number("Number of exercises", answers.exercise_count)?;
                if count == 0 {
                    print_error("Please choose at least one exercise.");
                    PracticeStep::ExerciseCount
                } else {
                    answers.exercise_count = count;
                    PracticeStep::Solutions
                }
            }
            PracticeStep::Solutions => {
                answers.include_solutions =
                    prompter.confirm("Include detailed solutions?", answers.include_solutions)?;
                PracticeStep::FocusAreas
            }
            PracticeStep::FocusAreas => {
                let input = prompter.text(
                    "Specific focus areas",
                    Some("Comma-separated, or press Enter for all"),
                )?;
                answers.focus_areas = parse_list(&input);
                PracticeStep::Preview
            }
            PracticeStep::Preview => {
                answers.preview = prompter.confirm("Preview before saving?", false)?;
                PracticeStep::Done
            }
            PracticeStep::Done => PracticeStep::Done,
        };
    }

    Ok(InteractiveOutcome {
        request: GenerationRequest::practice(
            answers.topic,
            answers.difficulty,
            answers.exercise_count,
            answers.include_solutions,
            answers.focus_areas,
            None,
        ),
        preview: answers.preview,
    })
}

/// `None` when the answer was blank and the question should be repeated
fn ask_topic(prompter: &mut dyn Prompter, message: &str) -> Result<Option<String>> {
    let topic = prompter.text(message, Some("e.g. pandas, Docker, React Hooks"))?;
    if topic.trim().is_empty() {
        print_error("The topic cannot be empty.");
        return Ok(None);
    }
    Ok(Some(topic.trim().to_string()))
}

fn ask_difficulty(
    prompter: &mut dyn Prompter,
    choices: &[Difficulty],
    default: Difficulty,
) -> Result<Difficulty> {
    let labels: Vec<&str> = choices.iter().map(Difficulty::as_str).collect();
    let default_idx = choices.iter().position(|d| *d == default).unwrap_or(1);
    let idx = prompter.select("Difficulty level", &labels, default_idx)?;
    Ok(choices.get(idx).copied().unwrap_or(default))
}

pub async fn run_interactive(config: &Config, client: &dyn CompletionClient) -> Result<PathBuf> {
    print_banner(
        "INTERACTIVE CHEAT SHEET GENERATOR",
        "Let's create your perfect cheat sheet!",
    );
    let outcome = collect_cheat_sheet(&mut InquirePrompter, config)?;
    run_generate(config, client, outcome.request, outcome.preview).await
}

pub async fn run_practice_interactive(
    config: &Config,
    client: &dyn CompletionClient,
) -> Result<PathBuf> {
    print_banner(
        "INTERACTIVE PRACTICE GENERATOR",
        "Let's create comprehensive practice exercises!",
    );
    let outcome = collect_practice(&mut InquirePrompter, config)?;
    run_practice(config, client, outcome.request, outcome.preview).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestKind;
    use std::collections::VecDeque;

    #[derive(Debug)]
    enum Answer {
        Text(&'static str),
        Select(usize),
        /// Take whatever option the prompt preselected
        SelectDefault,
        Confirm(bool),
        Number(u32),
    }

    /// Plays back answers in order and fails on a type mismatch
    struct Scripted(VecDeque<Answer>);

    impl Scripted {
        fn new(answers: Vec<Answer>) -> Self {
            Self(answers.into())
        }

        fn next(&mut self, message: &str) -> Result<Answer> {
            self.0
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("no answer scripted for '{}'", message))
        }
    }

    impl Prompter for Scripted {
        fn text(&mut self, message: &str, _help: Option<&str>) -> Result<String> {
            match self.next(message)? {
                Answer::Text(t) => Ok(t.to_string()),
                other => anyhow::bail!("expected text for '{}', got {:?}", message, other),
            }
        }

        fn select(&mut self, message: &str, _options: &[&str], default: usize) -> Result<usize> {
            match self.next(message)? {
                Answer::Select(i) => Ok(i),
                Answer::SelectDefault => Ok(default),
                other => anyhow::bail!("expected select for '{}', got {:?}", message, other),
            }
        }

        fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
            match self.next(message)? {
                Answer::Confirm(b) => Ok(b),
                other => anyhow::bail!("expected confirm for '{}', got {:?}", message, other),
            }
        }

        fn number(&mut self, message: &str, _default: u32) -> Result<u32> {
            match self.next(message)? {
                Answer::Number(n) => Ok(n),
                other => anyhow::bail!("expected number for '{}', got {:?}", message, other),
            }
        }
    }

    #[test]
    fn test_cheat_sheet_flow_matches_flag_request() {
        let mut prompter = Scripted::new(vec![
            Answer::Text("React Hooks"),
            Answer::Select(0),
            Answer::Select(1),
            Answer::Confirm(false),
            Answer::Text("useState, useEffect"),
            Answer::Confirm(true),
        ]);

        let outcome = collect_cheat_sheet(&mut prompter, &Config::default()).unwrap();

        let expected = GenerationRequest::cheat_sheet(
            "React Hooks",
            Difficulty::Beginner,
            Format::QuickReference,
            Some(vec!["useState".to_string(), "useEffect".to_string()]),
            false,
        );
        assert_eq!(outcome.request, expected);
        assert!(outcome.preview);
        assert!(prompter.0.is_empty());
    }

    #[test]
    fn test_mixed_default_preselects_intermediate_for_cheat_sheets() {
        let config = Config {
            default_difficulty: Difficulty::Mixed,
            ..Config::default()
        };

        let mut prompter = Scripted::new(vec![
            Answer::Text("Git"),
            Answer::SelectDefault,
            Answer::SelectDefault,
            Answer::Confirm(true),
            Answer::Text(""),
            Answer::Confirm(false),
        ]);
        let outcome = collect_cheat_sheet(&mut prompter, &config).unwrap();
        assert_eq!(outcome.request.difficulty, Difficulty::Intermediate);

        let mut prompter = Scripted::new(vec![
            Answer::Text("Git"),
            Answer::SelectDefault,
            Answer::Number(5),
            Answer::Confirm(true),
            Answer::Text(""),
            Answer::Confirm(false),
        ]);
        let outcome = collect_practice(&mut prompter, &config).unwrap();
        assert_eq!(outcome.request.difficulty, Difficulty::Mixed);
    }

    #[test]
    fn test_blank_topic_is_asked_again() {
        let mut prompter = Scripted::new(vec![
            Answer::Text("   "),
            Answer::Text(""),
            Answer::Text("Kubernetes"),
            Answer::Select(2),
            Answer::Select(0),
            Answer::Confirm(true),
            Answer::Text(""),
            Answer::Confirm(false),
        ]);

        let outcome = collect_cheat_sheet(&mut prompter, &Config::default()).unwrap();

        assert_eq!(outcome.request.topic, "Kubernetes");
        assert_eq!(outcome.request.difficulty, Difficulty::Advanced);
        assert!(matches!(
            outcome.request.kind,
            RequestKind::CheatSheet { sections: None, .. }
        ));
    }

    #[test]
    fn test_practice_flow_rejects_zero_count() {
        let mut prompter = Scripted::new(vec![
            Answer::Text("pandas"),
            Answer::Select(3),
            Answer::Number(0),
            Answer::Number(25),
            Answer::Confirm(false),
            Answer::Text("groupby, merge"),
            Answer::Confirm(false),
        ]);

        let outcome = collect_practice(&mut prompter, &Config::default()).unwrap();

        assert_eq!(
            outcome.request,
            GenerationRequest::practice(
                "pandas",
                Difficulty::Mixed,
                25,
                false,
                Some(vec!["groupby".to_string(), "merge".to_string()]),
                None,
            )
        );
        assert!(!outcome.preview);
    }

    #[test]
    fn test_cancelled_prompt_propagates() {
        let mut prompter = Scripted::new(vec![Answer::Text("Rust")]);
        assert!(collect_practice(&mut prompter, &Config::default()).is_err());
    }
}
