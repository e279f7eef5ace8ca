use crate::types::Difficulty;

pub const MINI_PROJECTS: u32 = 5;
pub const DEBUGGING_CHALLENGES: u32 = 10;
pub const CODE_REVIEW_EXERCISES: u32 = 10;

pub const DEFAULT_EXERCISE_TYPES: &[&str] = &[
    "Basic Concepts",
    "Practical Applications",
    "Problem Solving",
    "Real-world Projects",
    "Code Debugging",
    "Performance Optimization",
    "Best Practices",
    "Integration Challenges",
];

/// How many exercises land in each tier, easy to expert.
///
/// The four tiers always add up to the requested total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseTiers {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
    pub expert: u32,
}

impl ExerciseTiers {
    pub fn split(total: u32) -> Self {
        let beginner = total / 4;
        let intermediate = total / 3;
        let advanced = total / 3;
        Self {
            beginner,
            intermediate,
            advanced,
            expert: total - beginner - intermediate - advanced,
        }
    }

    pub fn total(&self) -> u32 {
        self.beginner + self.intermediate + self.advanced + self.expert
    }

    /// (label, first exercise number, count) for each non-empty tier
    fn ranges(&self) -> Vec<(&'static str, u32, u32)> {
        let mut next = 1;
        let mut ranges = Vec::new();
        for (label, count) in [
            ("🌱 Beginner Level", self.beginner),
            ("🌿 Intermediate Level", self.intermediate),
            ("🌳 Advanced Level", self.advanced),
            ("🚀 Expert Level", self.expert),
        ] {
            if count > 0 {
                ranges.push((label, next, count));
                next += count;
            }
        }
        ranges
    }
}

pub(super) fn render(
    topic: &str,
    difficulty: Difficulty,
    exercise_count: u32,
    include_solutions: bool,
    focus_areas: Option<&[String]>,
    exercise_types: Option<&[String]>,
) -> String {
    let tiers = ExerciseTiers::split(exercise_count);
    let mut output = String::new();

    output.push_str(&format!(
        "Create a COMPREHENSIVE and PRACTICAL exercise document for {} targeted at {} level learners.\n\n",
        topic, difficulty
    ));

    output.push_str("CRITICAL REQUIREMENTS:\n");
    output.push_str("- Write EVERYTHING in ENGLISH language only\n");
    output.push_str("- Format: well-structured Markdown with headers, code blocks, tables, and lists\n");
    output.push_str("- Add emojis to headings for visual appeal and better organization\n");
    output.push_str("- Include a table of contents with clickable links\n");
    if difficulty == Difficulty::Mixed {
        output.push_str("- Difficulty: mixed - progress steadily from beginner to expert\n");
    } else {
        output.push_str(&format!(
            "- Difficulty: {} - but keep a progressive difficulty curve\n",
            difficulty
        ));
    }
    output.push_str(&format!(
        "- Write EXACTLY {} exercises, numbered sequentially from 1 to {}\n",
        exercise_count, exercise_count
    ));
    if include_solutions {
        output.push_str("- Include a complete, commented solution with explanation for every exercise\n");
    } else {
        output.push_str(
            "- Do NOT include solutions; give hints and expected output so learners can check themselves\n",
        );
    }
    if let Some(areas) = focus_areas {
        output.push_str(&format!(
            "- Focus extensively on these areas: {}\n",
            areas.join(", ")
        ));
    }
    output.push('\n');

    output.push_str("MANDATORY STRUCTURE:\n\n");
    output.push_str(&format!(
        "# 🎯 {} - Comprehensive Practice Exercises\n\n",
        topic
    ));
    output.push_str("## 📑 Table of Contents\n\n");
    output.push_str("## 🚀 Getting Started\n");
    output.push_str("- Practice environment setup\n- How to use this guide\n\n");

    output.push_str("## 🎓 Exercises\n\n");
    for (label, first, count) in tiers.ranges() {
        let last = first + count - 1;
        output.push_str(&format!(
            "### {} (exercises {}-{}, {} total)\n",
            label, first, last, count
        ));
    }
    output.push('\n');

    output.push_str("Each exercise must include:\n");
    output.push_str("1. **Title & Objective**\n");
    output.push_str("2. **Difficulty** as a star rating (⭐⭐⭐☆☆)\n");
    output.push_str("3. **Time Estimate**\n");
    output.push_str("4. **Problem Statement** with input/output examples\n");
    output.push_str("5. **Hints** (progressive, 2-3 per exercise)\n");
    if include_solutions {
        output.push_str("6. **Solution** - full working code with comments\n");
        output.push_str("7. **Explanation & Alternative Approaches**\n");
    }
    output.push('\n');

    output.push_str(&format!(
        "## 🏗️ Mini Projects ({} complete projects)\n",
        MINI_PROJECTS
    ));
    output.push_str("- Overview, requirements, step-by-step implementation, testing strategy\n");
    if include_solutions {
        output.push_str("- Reference implementation for each project\n");
    }
    output.push('\n');

    output.push_str(&format!(
        "## 🐛 Debugging Challenges ({} exercises)\n",
        DEBUGGING_CHALLENGES
    ));
    output.push_str("- Broken code to fix, logic errors to find, performance issues to resolve\n");
    if include_solutions {
        output.push_str("- Show the corrected code and explain the bug\n");
    }
    output.push('\n');

    output.push_str(&format!(
        "## 🔧 Code Review Exercises ({} exercises)\n",
        CODE_REVIEW_EXERCISES
    ));
    output.push_str("- Code with quality, security, or best-practice problems to identify\n");
    if include_solutions {
        output.push_str("- Include the review comments an expert would leave\n");
    }
    output.push('\n');

    output.push_str("## 📈 Progress Tracking\n");
    output.push_str("- Completion checklist and next steps\n\n");
    output.push_str("## 🔗 Resources & Next Steps\n\n");

    output.push_str("SPECIAL FOCUS AREAS:\n");
    match exercise_types {
        Some(types) => output.push_str(&types.join(", ")),
        None => output.push_str(&DEFAULT_EXERCISE_TYPES.join(", ")),
    }
    output.push_str("\n\n");

    output.push_str("MINIMUM REQUIREMENTS:\n");
    output.push_str(&format!("- {} individual exercises\n", exercise_count));
    output.push_str(&format!("- {} mini-projects\n", MINI_PROJECTS));
    output.push_str(&format!("- {} debugging challenges\n", DEBUGGING_CHALLENGES));
    output.push_str(&format!(
        "- {} code review exercises\n",
        CODE_REVIEW_EXERCISES
    ));

    output
}
