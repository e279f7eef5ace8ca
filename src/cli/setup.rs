use anyhow::{Context, Result};
use console::{style, Emoji};
use std::path::Path;

use crate::config::{Config, ENV_API_KEY};

static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

pub fn run_setup(config: &Config, config_path: Option<&Path>, write_config: bool) -> Result<()> {
    println!();
    println!("{}{}", WRENCH, style("Environment Setup").blue().bold());
    println!();

    println!("  {} Set up your OpenAI API key:", style("1.").dim());
    println!("     {}", style(format!("export {}=sk-...", ENV_API_KEY)).dim());
    println!(
        "     {}",
        style(format!("# or add {}=sk-... to a .env file", ENV_API_KEY)).dim()
    );
    println!();
    println!(
        "  {} Optionally adjust defaults in the config file",
        style("2.").dim()
    );
    println!(
        "     {}",
        style("cheatsheet-agent setup --write-config").dim()
    );
    println!();
    println!("  {} Create your first cheat sheet:", style("3.").dim());
    println!("     {}", style("cheatsheet-agent interactive").dim());
    println!();

    println!("{}{}", INFO, style("Current configuration").bold());
    match config_path {
        Some(path) if path.exists() => {
            println!("  Config file:  {}", style(path.display()).cyan())
        }
        Some(path) => println!(
            "  Config file:  {} {}",
            style(path.display()).dim(),
            style("(not created)").dim()
        ),
        None => println!("  Config file:  {}", style("(no home directory)").dim()),
    }
    println!("  Model:        {}", style(&config.model).cyan());
    println!("  Max tokens:   {}", config.max_tokens);
    println!("  Temperature:  {}", config.temperature);
    println!("  Output dir:   {}", config.output_directory.display());
    if config.has_api_key() {
        println!("  API key:      {}", style("detected").green());
    } else {
        println!(
            "  API key:      {}{}",
            WARN,
            style("not found").yellow()
        );
    }

    if write_config {
        let path = config_path.context("cannot locate a home directory for the config file")?;
        println!();
        if Config::write_default(path)? {
            println!(
                "{}Wrote default config to {}",
                SUCCESS,
                style(path.display()).cyan()
            );
        } else {
            println!(
                "{}Config file already exists at {}, leaving it unchanged",
                INFO,
                path.display()
            );
        }
    }

    println!();
    println!(
        "{}",
        style("💡 Get your OpenAI API key from: https://platform.openai.com/api-keys").yellow()
    );
    println!();

    Ok(())
}
