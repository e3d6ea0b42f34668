use crate::error::RankError;
use crate::index::{check_count, cmp_score_desc, sorted_terms};
use crate::{Collection, IdfTable, Query, SentenceScore};

/// Rank sentences by the summed IDF of the distinct query terms they contain.
/// Equal sums are ordered by query term density, then by sentence text.
///
/// Every sentence must have at least one token, otherwise density is undefined
/// and the whole call fails.
pub fn rank_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
) -> Result<Vec<SentenceScore>, RankError> {
    let terms = sorted_terms(query);
    let mut scored = Vec::with_capacity(sentences.len());
    for (sentence, tokens) in sentences {
        if tokens.is_empty() {
            return Err(RankError::EmptySentence { sentence: sentence.clone() });
        }

        let idf: f64 = terms
            .iter()
            .filter(|&&term| tokens.iter().any(|t| t == term))
            .filter_map(|&term| idfs.get(term))
            .sum::<f64>()
            + 0.0;
        let matching = tokens.iter().filter(|t| query.contains(*t)).count();
        let density = matching as f64 / tokens.len() as f64;

        scored.push(SentenceScore { sentence: sentence.clone(), idf, density });
    }

    scored.sort_by(|a, b| {
        cmp_score_desc(a.idf, b.idf)
            .then_with(|| cmp_score_desc(a.density, b.density))
            .then_with(|| a.sentence.cmp(&b.sentence))
    });
    Ok(scored)
}

pub fn top_sentences(
    query: &Query,
    sentences: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_count(n, sentences.len())?;
    Ok(rank_sentences(query, sentences, idfs)?
        .into_iter()
        .take(n)
        .map(|s| s.sentence)
        .collect())
}
