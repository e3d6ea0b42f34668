use questions_core::{
    compute_idfs, rank_sentences, top_files, top_sentences, Collection, IdfTable, Query, RankError,
};
use std::collections::HashSet;

fn collection(entries: &[(&str, &[&str])]) -> Collection {
    entries
        .iter()
        .map(|(id, toks)| (id.to_string(), toks.iter().map(|t| t.to_string()).collect()))
        .collect()
}

fn query(terms: &[&str]) -> Query {
    terms.iter().map(|t| t.to_string()).collect()
}

const DOCS: &[(&str, &[&str])] = &[
    ("python.txt", &["python", "language", "guido", "language"]),
    ("rust.txt", &["rust", "language", "memory", "safety", "rust"]),
    ("go.txt", &["go", "language", "google"]),
    ("c.txt", &["c", "language", "memory"]),
];

const SENTENCES: &[(&str, &[&str])] = &[
    ("Rust is fast.", &["rust", "fast"]),
    ("Rust has no garbage collector.", &["rust", "garbage", "collector"]),
    ("Rust rust rust.", &["rust", "rust", "rust"]),
    ("Go is fast.", &["go", "fast"]),
];

#[test]
fn idf_keys_are_all_distinct_tokens() {
    let docs = collection(DOCS);
    let idfs = compute_idfs(&docs).unwrap();
    let expected: HashSet<&str> = DOCS.iter().flat_map(|(_, toks)| toks.iter().copied()).collect();
    let got: HashSet<&str> = idfs.keys().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[test]
fn token_in_every_document_scores_zero() {
    let idfs = compute_idfs(&collection(DOCS)).unwrap();
    assert_eq!(idfs["language"], 0.0);
    assert!((idfs["memory"] - 2f64.ln()).abs() < 1e-12);
    assert!((idfs["rust"] - 4f64.ln()).abs() < 1e-12);
}

#[test]
fn document_ranking_ignores_input_order() {
    let forward = collection(DOCS);
    let mut reversed_entries = DOCS.to_vec();
    reversed_entries.reverse();
    let reversed = collection(&reversed_entries);

    let q = query(&["memory", "language", "unknown"]);
    let idfs = compute_idfs(&forward).unwrap();
    let a = top_files(&q, &forward, &idfs, 4).unwrap();
    let b = top_files(&q, &reversed, &compute_idfs(&reversed).unwrap(), 4).unwrap();
    assert_eq!(a, b);
    // memory ties between rust.txt and c.txt, name order decides
    assert_eq!(a, vec!["c.txt", "rust.txt", "go.txt", "python.txt"]);
    assert_eq!(top_files(&q, &forward, &idfs, 4).unwrap(), a);
}

#[test]
fn sentence_ranking_is_idempotent_and_order_free() {
    let mut reversed_entries = SENTENCES.to_vec();
    reversed_entries.reverse();
    let forward = collection(SENTENCES);
    let reversed = collection(&reversed_entries);
    let idfs = compute_idfs(&forward).unwrap();
    let q = query(&["rust", "fast"]);

    let first = top_sentences(&q, &forward, &idfs, 4).unwrap();
    let second = top_sentences(&q, &forward, &idfs, 4).unwrap();
    let third = top_sentences(&q, &reversed, &idfs, 4).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, third);
    assert_eq!(first[0], "Rust is fast.");
    assert_eq!(first[1], "Go is fast.");
    // equal idf, density 1 beats 1/3
    assert_eq!(first[2], "Rust rust rust.");
    assert_eq!(first[3], "Rust has no garbage collector.");
}

#[test]
fn equal_idf_prefers_denser_sentence() {
    let sentences = collection(&[
        ("A dog ran fast today.", &["dog", "ran", "fast", "today"]),
        ("The cat sat.", &["cat", "sat"]),
    ]);
    let idfs: IdfTable = [("cat", 1.0), ("dog", 1.0)].iter().map(|(t, v)| (t.to_string(), *v)).collect();
    let q = query(&["cat", "dog"]);
    assert_eq!(top_sentences(&q, &sentences, &idfs, 1).unwrap(), vec!["The cat sat."]);

    let ranked = rank_sentences(&q, &sentences, &idfs).unwrap();
    assert_eq!(ranked[0].density, 0.5);
    assert_eq!(ranked[1].density, 0.25);
}

#[test]
fn n_bounds() {
    let docs = collection(DOCS);
    let idfs = compute_idfs(&docs).unwrap();
    let q = query(&["rust"]);
    assert_eq!(top_files(&q, &docs, &idfs, 4).unwrap().len(), 4);
    assert_eq!(top_files(&q, &docs, &idfs, 0), Err(RankError::OutOfRange { requested: 0, available: 4 }));
    assert_eq!(top_files(&q, &docs, &idfs, 5), Err(RankError::OutOfRange { requested: 5, available: 4 }));
    assert_eq!(
        top_sentences(&q, &docs, &idfs, 5),
        Err(RankError::OutOfRange { requested: 5, available: 4 })
    );
}

#[test]
fn computed_idf_ties_fall_through_to_density() {
    // df(x) = 2, df(y) = 3, df(z) = 4 over six sentences, so
    // ln(6/2) and ln(6/3) + ln(6/4) are both ln 3
    let sentences = collection(&[
        ("sparse x", &["x", "a1", "a2", "a3", "a4"]),
        ("dense yz", &["y", "z"]),
        ("x and z", &["x", "z", "c"]),
        ("mostly yz", &["y", "z", "d"]),
        ("only y", &["y", "e"]),
        ("only z", &["z", "f"]),
    ]);
    let idfs = compute_idfs(&sentences).unwrap();
    let q = query(&["x", "y", "z"]);

    let top = top_sentences(&q, &sentences, &idfs, 4).unwrap();
    assert_eq!(top, vec!["x and z", "dense yz", "mostly yz", "sparse x"]);
}
