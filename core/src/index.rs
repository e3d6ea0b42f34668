use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::error::RankError;

/// Normalized word tokens of one document or one sentence, in the order produced.
pub type TokenSequence = Vec<String>;
/// Document or sentence identifier mapped to its tokens.
pub type Collection = HashMap<String, TokenSequence>;
pub type Query = HashSet<String>;
pub type IdfTable = HashMap<String, f64>;
/// File name mapped to the file's raw text.
pub type Corpus = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileScore {
    pub name: String,
    pub tf_idf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub sentence: String,
    /// Sum of IDF over the distinct query tokens present in the sentence.
    pub idf: f64,
    /// Query tokens in the sentence (with repeats) over sentence length.
    pub density: f64,
}

/// Check a requested result count against the number of ranked candidates.
pub(crate) fn check_count(requested: usize, available: usize) -> Result<(), RankError> {
    if requested == 0 || requested > available {
        return Err(RankError::OutOfRange { requested, available });
    }
    Ok(())
}

/// Scores are compared at this resolution so sums that are equal on paper but
/// differ in the last few bits still tie.
const SCORE_SCALE: f64 = 1e9;

/// Orders two scores descending after rounding to `SCORE_SCALE`.
pub(crate) fn cmp_score_desc(a: f64, b: f64) -> Ordering {
    score_key(b).cmp(&score_key(a))
}

fn score_key(score: f64) -> i64 {
    (score * SCORE_SCALE).round() as i64
}

/// Query terms in a fixed order so float sums do not depend on hash order.
pub(crate) fn sorted_terms(query: &Query) -> Vec<&str> {
    let mut terms: Vec<&str> = query.iter().map(String::as_str).collect();
    terms.sort_unstable();
    terms
}

/// Token -> occurrence count for one sequence.
pub(crate) fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
