//! Persisting generated documents.
//!
//! Layout under the base directory:
//!
//! ```text
//! cheat_sheets/
//! ├── pandas_intermediate_20240128_143022.md
//! └── practices/
//!     └── docker_practice_advanced_20240128_143530.md
//! ```
//!
//! Filenames carry second-level timestamps only. Two writes of the same
//! topic and kind within one second land on the same path and the later
//! one wins.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::GenerationError;
use crate::types::{DocumentKind, GeneratedDocument};

pub const PRACTICE_SUBDIR: &str = "practices";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static NON_ALNUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}]+").unwrap());

/// "React Hooks!" → "react_hooks". Letters and digits from any script are kept.
pub fn sanitize_topic(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, "_");
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn document_filename(document: &GeneratedDocument) -> String {
    let topic = sanitize_topic(&document.topic);
    let timestamp = document.timestamp.format(TIMESTAMP_FORMAT);
    match document.kind {
        DocumentKind::CheatSheet => {
            format!("{}_{}_{}.md", topic, document.difficulty, timestamp)
        }
        DocumentKind::Practice => {
            format!("{}_practice_{}_{}.md", topic, document.difficulty, timestamp)
        }
    }
}

/// Directory a document of `kind` is written to
pub fn target_dir(kind: DocumentKind, base_dir: &Path) -> PathBuf {
    match kind {
        DocumentKind::CheatSheet => base_dir.to_path_buf(),
        DocumentKind::Practice => base_dir.join(PRACTICE_SUBDIR),
    }
}

pub fn write_document(
    document: &GeneratedDocument,
    base_dir: &Path,
) -> Result<PathBuf, GenerationError> {
    let dir = target_dir(document.kind, base_dir);
    fs::create_dir_all(&dir).map_err(|source| GenerationError::Io {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(document_filename(document));
    write_file(&path, &document.content).map_err(|source| GenerationError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = document.content.len(), "document written");
    Ok(path)
}

// The writer is dropped (and the handle closed) on every return path.
fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
