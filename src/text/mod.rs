pub mod stopwords;
pub mod tokenize;

pub use stopwords::StopwordSet;
pub use tokenize::{RuleTokenizer, Tokenizer};

/// Lowercased, purely alphanumeric, non-stopword tokens of `text`, in order.
pub fn normalize_words<T: Tokenizer>(tokenizer: &T, stopwords: &StopwordSet, text: &str) -> Vec<String> {
    tokenizer
        .words(text)
        .into_iter()
        .map(|word| word.to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(char::is_alphanumeric))
        .filter(|word| !stopwords.contains(word))
        .collect()
}
