use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::corpus::load_files;
use crate::error::RankError;
use crate::index::check_count;
use crate::segment::collect_sentences;
use crate::tokenizer::Tokenizer;
use crate::{
    compute_idfs, rank_files, rank_sentences, Collection, Corpus, FileScore, IdfTable,
    SentenceScore,
};

/// How many files and sentences each query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl Default for RankConfig {
    fn default() -> Self { Self { file_matches: 1, sentence_matches: 1 } }
}

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: String,
    /// Query tokens after normalization, sorted.
    pub tokens: Vec<String>,
    pub files: Vec<FileScore>,
    pub sentences: Vec<SentenceScore>,
    pub took_s: f64,
}

/// Tokenized corpus plus its document-level IDF table, built once per run and
/// queried with [`Pipeline::answer`].
pub struct Pipeline {
    corpus: Corpus,
    files: Collection,
    file_idfs: IdfTable,
    tokenizer: Tokenizer,
    config: RankConfig,
}

impl Pipeline {
    pub fn new(corpus: Corpus, config: RankConfig, tokenizer: Tokenizer) -> Result<Self, RankError> {
        let files: Collection = corpus
            .iter()
            .map(|(name, text)| (name.clone(), tokenizer.tokenize(text)))
            .collect();
        let file_idfs = compute_idfs(&files)?;
        tracing::info!(num_docs = files.len(), num_terms = file_idfs.len(), "indexed corpus");
        Ok(Self { corpus, files, file_idfs, tokenizer, config })
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P, config: RankConfig, tokenizer: Tokenizer) -> Result<Self> {
        let dir = dir.as_ref();
        let corpus = load_files(dir)?;
        Self::new(corpus, config, tokenizer)
            .with_context(|| format!("failed to index corpus {}", dir.display()))
    }

    pub fn num_docs(&self) -> usize { self.files.len() }

    /// Pick the best files for `question`, then the best sentences within them.
    pub fn answer(&self, question: &str) -> Result<Answer, RankError> {
        let start = Instant::now();
        let query = self.tokenizer.query(question);
        if query.is_empty() {
            tracing::warn!(question, "query has no tokens after filtering");
        }

        check_count(self.config.file_matches, self.files.len())?;
        let files: Vec<FileScore> = rank_files(&query, &self.files, &self.file_idfs)
            .into_iter()
            .take(self.config.file_matches)
            .collect();
        tracing::debug!(?files, "selected files");

        let mut sentences = Collection::new();
        for file in &files {
            if let Some(text) = self.corpus.get(&file.name) {
                collect_sentences(text, &self.tokenizer, &mut sentences);
            }
        }
        let sentence_idfs = compute_idfs(&sentences)?;
        tracing::debug!(num_sentences = sentences.len(), num_terms = sentence_idfs.len(), "segmented selected files");

        check_count(self.config.sentence_matches, sentences.len())?;
        let sentences: Vec<SentenceScore> = rank_sentences(&query, &sentences, &sentence_idfs)?
            .into_iter()
            .take(self.config.sentence_matches)
            .collect();

        let mut tokens: Vec<String> = query.into_iter().collect();
        tokens.sort();
        let elapsed = start.elapsed();
        tracing::info!(files = files.len(), sentences = sentences.len(), took_s = elapsed.as_secs_f64(), "answered query");
        Ok(Answer { query: question.to_string(), tokens, files, sentences, took_s: elapsed.as_secs_f64() })
    }
}
