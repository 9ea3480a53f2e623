use std::path::Path;

use tracing::{info, warn};

use crate::answer::{Answer, AnswerSelector};
use crate::config::AnalysisConfig;
use crate::document::TextSource;
use crate::entities::{aggregate_entities, EntityRecognizer, PatternRecognizer};
use crate::keywords::{extract_keywords, DEFAULT_KEYWORD_LIMIT};
use crate::question::QuestionClassifier;
use crate::text::{normalize_words, RuleTokenizer, StopwordSet, Tokenizer};
use crate::types::{AnalysisError, DocumentAnalysis, EntityType};
use crate::weighting::{SmoothIdfWeighter, TermWeighter, WeightingError};

/// Document analysis and question answering over injected NLP collaborators.
///
/// Built once per process and shared read-only by every document and question.
pub struct Pipeline<T, W, R> {
    tokenizer: T,
    stopwords: StopwordSet,
    weighter: W,
    recognizer: R,
    classifier: QuestionClassifier,
    config: AnalysisConfig,
}

impl Default for Pipeline<RuleTokenizer, SmoothIdfWeighter, PatternRecognizer> {
    fn default() -> Self {
        let stopwords = StopwordSet::german();
        Self::new(
            RuleTokenizer,
            stopwords.clone(),
            SmoothIdfWeighter,
            PatternRecognizer::new(stopwords),
            AnalysisConfig::v0(),
        )
    }
}

impl<T, W, R> Pipeline<T, W, R>
where
    T: Tokenizer,
    W: TermWeighter,
    R: EntityRecognizer,
{
    pub fn new(
        tokenizer: T,
        stopwords: StopwordSet,
        weighter: W,
        recognizer: R,
        config: AnalysisConfig,
    ) -> Self {
        let classifier = QuestionClassifier::from_config(&config);
        Self {
            tokenizer,
            stopwords,
            weighter,
            recognizer,
            classifier,
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze extracted raw text.
    ///
    /// All-or-nothing: an error in any stage discards every partial result.
    pub fn analyze(&self, raw_text: &str) -> Result<DocumentAnalysis, AnalysisError> {
        // 1. Sentences, then their normalized form for weighting
        let sentences = self.tokenizer.sentences(raw_text);
        info!(sentences = sentences.len(), "split text into sentences");

        let normalized: Vec<String> = sentences
            .iter()
            .map(|sentence| normalize_words(&self.tokenizer, &self.stopwords, sentence).join(" "))
            .collect();

        // 2. Keywords
        let keywords = extract_keywords(&self.weighter, &normalized, DEFAULT_KEYWORD_LIMIT)
            .map_err(|err| match err {
                WeightingError::EmptyCorpus => AnalysisError::EmptyCorpus,
            })?;
        info!(keywords = keywords.len(), "extracted keywords");

        // 3. Entities, recognized on the whole text rather than per sentence
        let mentions = self.recognizer.recognize(raw_text)?;
        let found = mentions.len();
        let aggregate = aggregate_entities(
            mentions,
            &[EntityType::Organization, EntityType::Person],
        );
        info!(
            found,
            kept = aggregate.filtered.len(),
            distinct = aggregate.frequencies.len(),
            "recognized entities"
        );

        Ok(DocumentAnalysis {
            keywords,
            entity_frequencies: aggregate.frequencies,
            sentences,
            filtered_entities: aggregate.filtered,
        })
    }

    /// Like `analyze`, but any failure yields an empty analysis.
    pub fn analyze_or_empty(&self, raw_text: &str) -> DocumentAnalysis {
        self.analyze(raw_text).unwrap_or_else(|err| {
            warn!(error = %err, "analysis failed, returning empty result");
            DocumentAnalysis::default()
        })
    }

    /// Extract text from `path` with `source`, then analyze it.
    pub fn analyze_source<S: TextSource>(
        &self,
        source: &S,
        path: &Path,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        info!(path = %path.display(), "processing document");
        let document = source.load(path)?;
        info!(pages = document.page_count, "extracted text");
        self.analyze(&document.text)
    }

    pub fn answer(&self, question: &str, analysis: &DocumentAnalysis) -> Answer {
        info!(question, "answering question");
        AnswerSelector::new(
            &self.tokenizer,
            &self.stopwords,
            &self.recognizer,
            &self.classifier,
            &self.config.no_answer,
        )
        .answer(question, analysis)
    }
}
