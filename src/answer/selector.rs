use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::answer::{Answer, AnswerPhase};
use crate::entities::EntityRecognizer;
use crate::question::QuestionClassifier;
use crate::text::{normalize_words, StopwordSet, Tokenizer};
use crate::types::{DocumentAnalysis, EntityType};

/// Two-phase sentence retrieval over one analyzed document.
///
/// Entity phase: if the question names a target type, every sentence in which
/// the recognizer, run on that sentence alone, finds an entity of that type.
/// Keyword phase: runs only when there is no target type or the entity phase
/// found nothing; every sentence sharing a word with the normalized question.
///
/// The per-sentence recognition can disagree with the whole-document pass that
/// produced `filtered_entities`. The sentence-local result decides.
pub struct AnswerSelector<'a, T, R> {
    tokenizer: &'a T,
    stopwords: &'a StopwordSet,
    recognizer: &'a R,
    classifier: &'a QuestionClassifier,
    no_answer: &'a str,
}

impl<'a, T, R> AnswerSelector<'a, T, R>
where
    T: Tokenizer,
    R: EntityRecognizer,
{
    pub fn new(
        tokenizer: &'a T,
        stopwords: &'a StopwordSet,
        recognizer: &'a R,
        classifier: &'a QuestionClassifier,
        no_answer: &'a str,
    ) -> Self {
        Self {
            tokenizer,
            stopwords,
            recognizer,
            classifier,
            no_answer,
        }
    }

    /// Never fails: an unmatched question yields the no-answer sentinel.
    pub fn answer(&self, question: &str, analysis: &DocumentAnalysis) -> Answer {
        let sentences = &analysis.sentences;
        let target = self.classifier.classify(question);
        debug!(question, target = ?target, "classified question");

        if let Some(entity_type) = &target {
            let hits = self.entity_phase(entity_type, sentences);
            if !hits.is_empty() {
                info!(matches = hits.len(), "answer found by entity type");
                return self.build(sentences, hits, AnswerPhase::Entity, target);
            }
        }

        info!("falling back to keyword search");
        let hits = self.keyword_phase(question, sentences);
        if hits.is_empty() {
            info!("no matching sentence");
            return Answer {
                text: self.no_answer.to_string(),
                phase: AnswerPhase::NoAnswer,
                target,
                sentence_indices: Vec::new(),
            };
        }

        info!(matches = hits.len(), "answer found by keyword overlap");
        self.build(sentences, hits, AnswerPhase::Keyword, target)
    }

    fn entity_phase(&self, target: &EntityType, sentences: &[String]) -> Vec<usize> {
        sentences
            .iter()
            .enumerate()
            .filter(|(index, sentence)| match self.recognizer.recognize(sentence) {
                Ok(entities) => entities.iter().any(|e| &e.entity_type == target),
                Err(err) => {
                    warn!(sentence = index, error = %err, "sentence recognition failed, skipping");
                    false
                }
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn keyword_phase(&self, question: &str, sentences: &[String]) -> Vec<usize> {
        let question_words = normalize_words(self.tokenizer, self.stopwords, question);
        if question_words.is_empty() {
            return Vec::new();
        }

        sentences
            .iter()
            .enumerate()
            .filter(|(_, sentence)| {
                let sentence_words: HashSet<String> = self
                    .tokenizer
                    .words(sentence)
                    .into_iter()
                    .map(|w| w.to_lowercase())
                    .collect();
                question_words.iter().any(|w| sentence_words.contains(w))
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn build(
        &self,
        sentences: &[String],
        hits: Vec<usize>,
        phase: AnswerPhase,
        target: Option<EntityType>,
    ) -> Answer {
        let text = hits
            .iter()
            .map(|&index| sentences[index].as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Answer {
            text,
            phase,
            target,
            sentence_indices: hits,
        }
    }
}
