mod args;
mod examples;
mod generate;
mod interactive;
mod setup;
pub mod tui;

pub use args::{optional_list, Args, Command};
pub use examples::{run_examples, POPULAR_TOPICS};
pub use generate::{generate_document, run_complete, run_generate, run_practice};
pub use interactive::{
    collect_cheat_sheet, collect_practice, run_interactive, run_practice_interactive,
    InquirePrompter, InteractiveOutcome, Prompter,
};
pub use setup::run_setup;
