use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::Corpus;

/// Read every regular file directly inside `dir`, keyed by file name.
/// Hidden files are skipped.
pub fn load_files<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("corpus directory {} does not exist or is not a directory", dir.display());
    }

    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping file with non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            tracing::debug!(name, "skipping hidden file");
            continue;
        }
        let text = fs::read_to_string(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        corpus.insert(name.to_string(), text);
    }

    tracing::info!(dir = %dir.display(), num_docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}
