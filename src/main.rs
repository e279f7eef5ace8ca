use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use cheatsheet_agent::cli::tui::{print_error, print_hint};
use cheatsheet_agent::cli::{
    optional_list, run_complete, run_examples, run_generate, run_interactive, run_practice,
    run_practice_interactive, run_setup, Args, Command,
};
use cheatsheet_agent::{create_client, Config, ConfigOverrides, GenerationError, GenerationRequest};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = Config::load().context("failed to load configuration")?;
    config
        .apply_overrides(overrides)
        .context("invalid command-line option")?;
    tracing::debug!(
        model = %config.model,
        output_dir = %config.output_directory.display(),
        "configuration loaded"
    );
    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let overrides = args.overrides();

    match args.command {
        Command::Examples => run_examples(),
        Command::Setup { write_config } => {
            let config = load_config(&overrides)?;
            let path = Config::resolve_path(&|key: &str| std::env::var(key).ok());
            run_setup(&config, path.as_deref(), write_config)?;
        }
        Command::Generate {
            topic,
            difficulty,
            format,
            sections,
            no_examples,
            preview,
        } => {
            let config = load_config(&overrides)?;
            let client = create_client(&config)?;
            let request = GenerationRequest::cheat_sheet(
                topic,
                difficulty.unwrap_or(config.cheat_sheet_difficulty()),
                format.unwrap_or(config.default_format),
                optional_list(sections),
                config.default_include_examples && !no_examples,
            );
            run_generate(&config, client.as_ref(), request, preview).await?;
        }
        Command::Practice {
            topic,
            difficulty,
            count,
            focus,
            exercise_types,
            no_solutions,
            preview,
        } => {
            let config = load_config(&overrides)?;
            let client = create_client(&config)?;
            let request = GenerationRequest::practice(
                topic,
                difficulty.unwrap_or(config.default_difficulty),
                count.unwrap_or(config.default_exercise_count),
                !no_solutions,
                optional_list(focus),
                optional_list(exercise_types),
            );
            run_practice(&config, client.as_ref(), request, preview).await?;
        }
        Command::Complete {
            topic,
            difficulty,
            exercises,
            preview,
        } => {
            let config = load_config(&overrides)?;
            let client = create_client(&config)?;
            run_complete(
                &config,
                client.as_ref(),
                &topic,
                difficulty.unwrap_or(config.cheat_sheet_difficulty()),
                exercises.unwrap_or(config.default_exercise_count),
                preview,
            )
            .await?;
        }
        Command::Interactive => {
            let config = load_config(&overrides)?;
            let client = create_client(&config)?;
            run_interactive(&config, client.as_ref()).await?;
        }
        Command::PracticeInteractive => {
            let config = load_config(&overrides)?;
            let client = create_client(&config)?;
            run_practice_interactive(&config, client.as_ref()).await?;
        }
    }

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    print_error(&format!("{:#}", err));
    if let Some(hint) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<GenerationError>())
        .and_then(GenerationError::hint)
    {
        print_hint(hint);
    }
}
