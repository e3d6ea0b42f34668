use crate::error::RankError;
use crate::{Collection, IdfTable};
use std::collections::{HashMap, HashSet};

/// Compute `ln(N / df)` for every distinct token of the collection, where `df`
/// counts the sequences containing the token at least once.
pub fn compute_idfs(collection: &Collection) -> Result<IdfTable, RankError> {
    if collection.is_empty() {
        return Err(RankError::EmptyCollection);
    }

    let mut df: HashMap<&str, u32> = HashMap::new();
    for tokens in collection.values() {
        let seen: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in seen {
            *df.entry(token).or_insert(0) += 1;
        }
    }

    let n = collection.len() as f64;
    let idfs: IdfTable = df
        .into_iter()
        .map(|(token, df_t)| (token.to_string(), (n / f64::from(df_t)).ln()))
        .collect();
    tracing::debug!(sequences = collection.len(), terms = idfs.len(), "computed idf table");
    Ok(idfs)
}
