use crate::types::{Difficulty, Format};

/// Core-concept sections used when the user does not name their own
pub const DEFAULT_CORE_SECTIONS: &[&str] = &[
    "Core Concepts & Fundamentals",
    "Basic Syntax & Operations",
    "Intermediate Concepts",
    "Advanced Techniques",
    "Common Use Cases & Patterns",
    "Performance & Optimization",
    "Debugging & Troubleshooting",
    "Integration & Ecosystem",
];

/// Rows in the essential methods table. `None` for `mixed`, which has no
/// cheat-sheet form.
pub fn essential_method_count(difficulty: Difficulty) -> Option<usize> {
    match difficulty {
        Difficulty::Beginner => Some(20),
        Difficulty::Intermediate => Some(50),
        Difficulty::Advanced => Some(75),
        Difficulty::Mixed => None,
    }
}

pub(super) fn render(
    topic: &str,
    difficulty: Difficulty,
    method_count: usize,
    format: Format,
    sections: Option<&[String]>,
    include_examples: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Create a {} cheat sheet for {} targeted at {} level users.\n\n",
        match format {
            Format::Comprehensive => "COMPREHENSIVE and DETAILED",
            Format::QuickReference => "CONCISE quick-reference",
        },
        topic,
        difficulty
    ));

    output.push_str("CRITICAL REQUIREMENTS:\n");
    output.push_str("- Write EVERYTHING in ENGLISH language only\n");
    output.push_str(&format!("- Style: {}\n", format));
    output.push_str(
        "- Use proper Markdown syntax with headers, fenced code blocks, tables, and lists\n",
    );
    output.push_str("- Add emojis to headings for visual appeal and better organization\n");
    output.push_str("- Include a table of contents with clickable links\n");
    match format {
        Format::Comprehensive => {
            output.push_str("- This must be a COMPLETE, PROFESSIONAL-GRADE reference document\n");
            output.push_str("- Cover edge cases, advanced techniques, and real-world scenarios\n");
        }
        Format::QuickReference => {
            output.push_str("- Keep it scannable: one to two printed pages\n");
            output.push_str("- Prefer tables and one-line explanations over prose\n");
        }
    }
    if include_examples {
        output.push_str("- Provide working code examples with English comments for each concept\n");
    } else {
        output.push_str(
            "- Do NOT include a code examples section; limit code to minimal syntax snippets\n",
        );
    }

    if let Some(sections) = sections {
        output.push_str(&format!(
            "- Cover ONLY these core sections, in this order: {}\n",
            sections.join(", ")
        ));
    }
    output.push('\n');

    output.push_str("MANDATORY STRUCTURE:\n\n");
    output.push_str(&format!("# 🔥 {} - Complete Reference Guide\n\n", topic));
    output.push_str("## 📑 Table of Contents\n");
    output.push_str("(Every section and subsection, linked)\n\n");
    output.push_str("## 🚀 Installation & Setup\n");
    output.push_str("- Installation methods\n- Environment setup\n- Version compatibility\n\n");
    output.push_str("## 🎯 Quick Start Guide\n");
    output.push_str("- First steps\n- Hello world example\n- Initial configuration\n\n");

    match sections {
        Some(sections) => {
            for section in sections {
                output.push_str(&format!("## 📊 {}\n", section));
                output.push_str(&format!(
                    "- Key ideas, syntax, and usage of {} in {}\n\n",
                    section, topic
                ));
            }
        }
        None => {
            for section in DEFAULT_CORE_SECTIONS {
                output.push_str(&format!("## 📊 {}\n\n", section));
            }
        }
    }

    if include_examples {
        output.push_str("## 📝 Code Examples\n");
        match format {
            Format::Comprehensive => output.push_str(
                "- Beginner, intermediate, and advanced examples (at least 50 in total)\n\
                 - Real-world use cases\n\n",
            ),
            Format::QuickReference => {
                output.push_str("- One short, runnable example per core section\n\n")
            }
        }
    }

    output.push_str("## 📋 Essential Methods/Functions Reference\n");
    output.push_str(&format!(
        "- A Markdown table of the TOP {} most commonly used methods, functions, or commands\n",
        method_count
    ));
    output.push_str("- Columns: Name | Purpose | Key Parameters | Returns | Example\n");
    output.push_str("- Ordered from most to least frequently used\n\n");

    output.push_str("## ✅ Best Practices\n");
    output.push_str("- Recommended patterns and conventions\n\n");
    output.push_str("## ⚠️ Common Pitfalls & Gotchas\n");
    output.push_str("- Frequent mistakes and how to avoid them\n\n");
    output.push_str("## 📚 Additional Resources\n");
    output.push_str("- Official documentation, tutorials, books, and community resources\n\n");

    output.push_str("CONTENT REQUIREMENTS:\n");
    match format {
        Format::Comprehensive => {
            output.push_str(
                "- Each section must have substantial content, not just bullet points\n",
            );
            output.push_str(&format!(
                "- The methods reference is the heart of the document: give each of the {} entries parameter types and a usage example\n",
                method_count
            ));
            output.push_str("- TARGET: 8000+ words for truly comprehensive coverage\n");
        }
        Format::QuickReference => {
            output.push_str("- Favor density: every line should be useful at a glance\n");
            output.push_str("- TARGET: 1500-3000 words\n");
        }
    }

    output
}
