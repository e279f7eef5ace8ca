use console::{style, Emoji};

use crate::prompt::DEFAULT_CORE_SECTIONS;

static BOOKS: Emoji<'_, '_> = Emoji("📚 ", "");
static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static BULB: Emoji<'_, '_> = Emoji("💡 ", "");

/// Suggestions only. Any topic is accepted by the generators.
pub const POPULAR_TOPICS: &[(&str, &str)] = &[
    (
        "Python Libraries",
        "pandas, numpy, matplotlib, scikit-learn, tensorflow",
    ),
    ("Web Frameworks", "React, Vue.js, Django, Flask, FastAPI"),
    ("Databases", "PostgreSQL, MongoDB, Redis, SQLite"),
    ("DevOps", "Docker, Kubernetes, AWS, Git, Linux"),
    ("Machine Learning", "PyTorch, Hugging Face, OpenCV, NLTK"),
    ("Languages", "JavaScript, Python, Go, Rust, TypeScript"),
];

pub const CHEAT_SHEET_COMMANDS: &[&str] = &[
    "cheatsheet-agent generate -t 'pandas' -d intermediate",
    "cheatsheet-agent generate -t 'React Hooks' -f quick-reference --preview",
    "cheatsheet-agent generate -t 'Docker' -s 'commands,dockerfile,compose'",
    "cheatsheet-agent interactive",
];

pub const PRACTICE_COMMANDS: &[&str] = &[
    "cheatsheet-agent practice -t 'pandas' -d intermediate -c 25",
    "cheatsheet-agent practice -t 'JavaScript' -d advanced --preview",
    "cheatsheet-agent practice -t 'React' -f 'hooks,state,components'",
    "cheatsheet-agent practice-interactive",
];

pub const COMPLETE_COMMANDS: &[&str] = &[
    "cheatsheet-agent complete -t 'pandas' -d intermediate -e 30",
    "cheatsheet-agent complete -t 'Docker' -d beginner --preview",
];

pub const TIPS: &[&str] = &[
    "Use `complete` to get both a cheat sheet and practice exercises",
    "Use `--preview` to see content before it is saved",
    "Practice documents include solutions, projects, and debugging challenges",
    "Use `-d mixed` with `practice` for progressive learning",
];

pub fn run_examples() {
    println!();
    println!("{}{}", BOOKS, style("Example Topics & Commands").blue().bold());
    println!();

    let width = POPULAR_TOPICS
        .iter()
        .map(|(category, _)| category.len())
        .max()
        .unwrap_or(0);
    println!(
        "  {}  {}",
        style(format!("{:<width$}", "Category", width = width))
            .cyan()
            .bold(),
        style("Examples").green().bold()
    );
    println!("  {}", style("─".repeat(width + 52)).dim());
    for (category, examples) in POPULAR_TOPICS {
        println!(
            "  {}  {}",
            style(format!("{:<width$}", category, width = width)).cyan(),
            style(examples).green()
        );
    }

    print_section(CLIPBOARD, "Cheat Sheet Commands:", CHEAT_SHEET_COMMANDS);
    print_section(TARGET, "Practice Exercise Commands:", PRACTICE_COMMANDS);
    print_section(ROCKET, "Complete Learning Package:", COMPLETE_COMMANDS);

    println!();
    println!("{}{}", BULB, style("Default cheat sheet sections:").bold());
    println!("  {}", style(DEFAULT_CORE_SECTIONS.join(", ")).dim());

    println!();
    println!("{}{}", BULB, style("Pro Tips:").cyan().bold());
    for tip in TIPS {
        println!("  • {}", tip);
    }
    println!();
}

fn print_section(icon: Emoji<'_, '_>, title: &str, commands: &[&str]) {
    println!();
    println!("{}{}", icon, style(title).yellow().bold());
    for command in commands {
        println!("  • {}", style(command).dim());
    }
}
