use std::cmp::Ordering;

use crate::types::Keyword;
use crate::weighting::{TermWeighter, WeightingError};

pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// Top `limit` terms of the normalized sentence corpus, descending by weight.
///
/// The sort is stable: terms with equal weight stay in the order the weighter produced them.
pub fn extract_keywords<W: TermWeighter>(
    weighter: &W,
    normalized_sentences: &[String],
    limit: usize,
) -> Result<Vec<Keyword>, WeightingError> {
    let mut keywords = weighter.weigh(normalized_sentences)?;

    keywords.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    keywords.truncate(limit);

    debug_assert!(keywords.windows(2).all(|w| w[0].weight >= w[1].weight));

    Ok(keywords)
}
