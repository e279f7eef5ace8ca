use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use crate::types::DocumentKind;

/// Characters of a practice document shown in a preview
pub const PRACTICE_PREVIEW_CHARS: usize = 2000;

pub fn cheatsheet_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightCyan),
        highlighted_option_prefix: Styled::new("❯").with_fg(Color::LightCyan),
        answer: StyleSheet::new().with_fg(Color::LightCyan),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_banner(title: &str, subtitle: &str) {
    println!();
    println!("  {}  {}", style("🤖").cyan(), style(title).cyan().bold());
    println!("  {}", style(subtitle).dim());
    println!();
}

pub fn print_step(message: &str) {
    println!("  {} {}", style("›").cyan(), style(message).cyan());
}

pub fn print_detail(message: &str) {
    println!("    {}", style(message).dim());
}

pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), style(message).red());
}

pub fn print_hint(message: &str) {
    eprintln!("    {}", style(message).yellow());
}

pub fn print_preview(kind: DocumentKind, content: &str) {
    let (title, body) = match kind {
        DocumentKind::CheatSheet => ("📋 Cheat Sheet Preview", content.to_string()),
        DocumentKind::Practice => (
            "🎯 Practice Document Preview",
            truncate_preview(content, PRACTICE_PREVIEW_CHARS),
        ),
    };

    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("  {}", style(title).bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", body);
    println!("{}", style("─".repeat(60)).dim());
    println!();
}

/// First `max_chars` characters plus a continuation note
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => format!(
            "{}\n\n... [Document continues with full exercises and solutions]",
            &content[..idx]
        ),
        None => content.to_string(),
    }
}

pub fn print_summary(paths: &[(DocumentKind, &std::path::Path)]) {
    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!();
    println!(
        "  {} {}",
        style("🎉").green(),
        style("Generation complete!").green().bold()
    );
    println!();
    for (kind, path) in paths {
        println!(
            "    {} {}",
            style(format!("{}:", kind)).dim(),
            style(path.display()).cyan()
        );
    }
    println!();
}
