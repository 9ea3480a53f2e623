use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::types::Keyword;
use crate::weighting::{TermWeighter, WeightingError};

fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid term pattern"))
}

/// Smoothed inverse document frequency, one "document" per sentence.
///
/// idf(t) := ln((1 + n) / (1 + df(t))) + 1
///
/// `n` counts every sentence, including ones left empty by filtering.
/// Terms are single-character-free: a term needs at least two word characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SmoothIdfWeighter;

impl SmoothIdfWeighter {
    /// Document frequency per term, keyed in alphabetical order.
    pub fn document_frequencies(sentences: &[String]) -> BTreeMap<String, usize> {
        let mut frequencies = BTreeMap::new();
        for sentence in sentences {
            let terms: BTreeSet<String> = term_pattern()
                .find_iter(sentence)
                .map(|m| m.as_str().to_lowercase())
                .collect();
            for term in terms {
                *frequencies.entry(term).or_insert(0) += 1;
            }
        }
        frequencies
    }
}

impl TermWeighter for SmoothIdfWeighter {
    fn weigh(&self, sentences: &[String]) -> Result<Vec<Keyword>, WeightingError> {
        let frequencies = Self::document_frequencies(sentences);
        if frequencies.is_empty() {
            return Err(WeightingError::EmptyCorpus);
        }

        let n = sentences.len() as f64;
        Ok(frequencies
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                Keyword { term, weight }
            })
            .collect())
    }
}
