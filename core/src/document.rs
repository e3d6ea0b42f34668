use crate::error::RankError;
use crate::index::{check_count, cmp_score_desc, sorted_terms, term_counts};
use crate::{Collection, FileScore, IdfTable, Query};

/// Score every document by summed `tf * idf` over the query terms and order
/// them best first. Query terms missing from `idfs` contribute nothing.
pub fn rank_files(query: &Query, docs: &Collection, idfs: &IdfTable) -> Vec<FileScore> {
    let terms = sorted_terms(query);
    let mut scored: Vec<FileScore> = docs
        .iter()
        .map(|(name, tokens)| {
            let tf = term_counts(tokens);
            let tf_idf: f64 = terms
                .iter()
                .filter_map(|&term| {
                    let count = *tf.get(term)?;
                    let idf = idfs.get(term)?;
                    Some(count as f64 * idf)
                })
                .sum::<f64>()
                + 0.0;
            FileScore { name: name.clone(), tf_idf }
        })
        .collect();

    scored.sort_by(|a, b| {
        cmp_score_desc(a.tf_idf, b.tf_idf).then_with(|| a.name.cmp(&b.name))
    });
    scored
}

/// Names of the `n` best matching documents for `query`.
pub fn top_files(
    query: &Query,
    docs: &Collection,
    idfs: &IdfTable,
    n: usize,
) -> Result<Vec<String>, RankError> {
    check_count(n, docs.len())?;
    Ok(rank_files(query, docs, idfs)
        .into_iter()
        .take(n)
        .map(|f| f.name)
        .collect())
}
