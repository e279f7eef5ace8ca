use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Target audience level for a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    /// Progressive mix of all levels (practice documents only)
    Mixed,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Mixed,
    ];

    /// Levels a cheat sheet can target
    pub const CHEAT_SHEET_LEVELS: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Mixed => "mixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout of a cheat sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Comprehensive,
    QuickReference,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Comprehensive, Format::QuickReference];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Comprehensive => "comprehensive",
            Format::QuickReference => "quick-reference",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    CheatSheet,
    Practice,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::CheatSheet => write!(f, "cheat sheet"),
            DocumentKind::Practice => write!(f, "practice document"),
        }
    }
}

/// Kind-specific options of a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    CheatSheet {
        format: Format,
        /// Replaces the default core-concept sections, in this order
        sections: Option<Vec<String>>,
        include_examples: bool,
    },
    Practice {
        exercise_count: u32,
        include_solutions: bool,
        focus_areas: Option<Vec<String>>,
        exercise_types: Option<Vec<String>>,
    },
}

/// One generation job, built from CLI flags or interactive answers.
///
/// Validation happens in the prompt builder, so both entry points share it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub kind: RequestKind,
}

impl GenerationRequest {
    pub fn cheat_sheet(
        topic: impl Into<String>,
        difficulty: Difficulty,
        format: Format,
        sections: Option<Vec<String>>,
        include_examples: bool,
    ) -> Self {
        Self {
            topic: topic.into().trim().to_string(),
            difficulty,
            kind: RequestKind::CheatSheet {
                format,
                sections: sections.and_then(normalize_list),
                include_examples,
            },
        }
    }

    pub fn practice(
        topic: impl Into<String>,
        difficulty: Difficulty,
        exercise_count: u32,
        include_solutions: bool,
        focus_areas: Option<Vec<String>>,
        exercise_types: Option<Vec<String>>,
    ) -> Self {
        Self {
            topic: topic.into().trim().to_string(),
            difficulty,
            kind: RequestKind::Practice {
                exercise_count,
                include_solutions,
                focus_areas: focus_areas.and_then(normalize_list),
                exercise_types: exercise_types.and_then(normalize_list),
            },
        }
    }

    pub fn document_kind(&self) -> DocumentKind {
        match self.kind {
            RequestKind::CheatSheet { .. } => DocumentKind::CheatSheet,
            RequestKind::Practice { .. } => DocumentKind::Practice,
        }
    }
}

/// Generated text plus the metadata needed to name its file
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub content: String,
    pub kind: DocumentKind,
    pub topic: String,
    pub difficulty: Difficulty,
    pub timestamp: DateTime<Local>,
}

/// Split "a, b,,c" into ["a", "b", "c"]; `None` when nothing is left.
pub fn parse_list(input: &str) -> Option<Vec<String>> {
    normalize_list(input.split(',').map(str::to_string).collect())
}

fn normalize_list(items: Vec<String>) -> Option<Vec<String>> {
    let items: Vec<String> = items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
