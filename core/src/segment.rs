//! Splitting documents into sentences for the second ranking phase.

use unicode_segmentation::UnicodeSegmentation;

use crate::tokenizer::Tokenizer;
use crate::Collection;

/// Sentences of `text`: passages are separated by newlines, and each passage
/// is split on Unicode sentence boundaries. Surrounding whitespace is trimmed.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Add every sentence of `text` that still has tokens after tokenization to `sentences`.
pub fn collect_sentences(text: &str, tokenizer: &Tokenizer, sentences: &mut Collection) {
    for sentence in split_sentences(text) {
        let tokens = tokenizer.tokenize(sentence);
        if !tokens.is_empty() {
            sentences.insert(sentence.to_string(), tokens);
        }
    }
}
