use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::types::{Difficulty, Format};

#[derive(Parser, Debug)]
#[command(name = "cheatsheet-agent")]
#[command(version, about = "Generate Markdown cheat sheets and practice exercises for any technology")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logs (request details, output paths)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Model identifier to request from the completion service
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    /// Upper bound on generated tokens
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Base directory for generated files (default: cheat_sheets)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            output_directory: self.output_dir.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a cheat sheet for a technology or topic
    Generate {
        /// Technology/topic for the cheat sheet
        #[arg(short, long)]
        topic: String,

        /// Difficulty level (default from config)
        #[arg(short, long, value_parser = cheat_sheet_level())]
        difficulty: Option<Difficulty>,

        /// Format style (default from config)
        #[arg(short = 'f', long = "format-style", value_enum)]
        format: Option<Format>,

        /// Comma-separated list of specific sections to include
        #[arg(short, long, value_delimiter = ',')]
        sections: Vec<String>,

        /// Exclude code examples
        #[arg(long)]
        no_examples: bool,

        /// Print the generated content before saving
        #[arg(short, long)]
        preview: bool,
    },

    /// Generate practice exercises for a technology or topic
    Practice {
        /// Technology/topic for practice exercises
        #[arg(short, long)]
        topic: String,

        /// Difficulty level (default from config)
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Number of exercises to generate (default from config)
        #[arg(short, long)]
        count: Option<u32>,

        /// Comma-separated list of focus areas
        #[arg(short, long, value_delimiter = ',')]
        focus: Vec<String>,

        /// Comma-separated list of exercise types to emphasize
        #[arg(short = 'x', long, value_delimiter = ',')]
        exercise_types: Vec<String>,

        /// Exclude detailed solutions
        #[arg(long)]
        no_solutions: bool,

        /// Print the generated content before saving
        #[arg(short, long)]
        preview: bool,
    },

    /// Generate a cheat sheet and practice exercises for the same topic
    Complete {
        /// Topic to create both documents for
        #[arg(short, long)]
        topic: String,

        /// Difficulty level (default from config)
        #[arg(short, long, value_parser = cheat_sheet_level())]
        difficulty: Option<Difficulty>,

        /// Number of practice exercises (default from config)
        #[arg(short, long)]
        exercises: Option<u32>,

        /// Print the generated content before saving
        #[arg(short, long)]
        preview: bool,
    },

    /// Create a cheat sheet by answering a few questions
    Interactive,

    /// Create practice exercises by answering a few questions
    PracticeInteractive,

    /// Show setup instructions and configuration status
    Setup {
        /// Write a default config file if none exists
        #[arg(long)]
        write_config: bool,
    },

    /// Show example topics and commands
    Examples,
}

/// Difficulty values accepted by commands that produce a cheat sheet
fn cheat_sheet_level() -> impl TypedValueParser<Value = Difficulty> {
    PossibleValuesParser::new(Difficulty::CHEAT_SHEET_LEVELS.map(|level| level.as_str()))
        .map(|value| Difficulty::parse(&value).unwrap_or_default())
}

/// Turn an empty repeated flag into `None`
pub fn optional_list(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
