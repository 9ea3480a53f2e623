use std::cmp::Reverse;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::text::StopwordSet;
use crate::types::{Entity, EntityType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("Recognizer failed: {0}")]
    Failed(String),
}

/// Labels spans of text with entity types.
pub trait EntityRecognizer {
    /// Entities in order of appearance.
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognitionError>;
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for &R {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognitionError> {
        (**self).recognize(text)
    }
}

const LEGAL_FORMS: &[&str] = &[
    "GmbH", "AG", "KG", "KGaA", "SE", "OHG", "UG", "GbR", "eG", "e.V.", "mbH", "Co.", "Inc.",
    "Ltd.",
];

/// Lowercased suffixes of nouns that head an institution's name.
const INSTITUTION_HEADS: &[&str] = &[
    "universität", "institut", "hochschule", "stiftung", "bundesamt", "landesamt", "ministerium",
    "akademie", "behörde",
];

const INSTITUTION_LINKS: &[&str] = &["für", "der", "des"];

const HONORIFICS: &[&str] = &["Herr", "Herrn", "Frau", "Dr.", "Dr", "Prof.", "Prof"];

/// Capitalized nouns that describe an organisation without being part of its name.
const DESCRIPTORS: &[&str] = &[
    "Firma", "Unternehmen", "Konzern", "Gesellschaft", "Organisation", "Verein", "Tochter",
    "Muttergesellschaft", "Hersteller", "Anbieter",
];

/// Tokens that keep their final period.
const DOTTED: &[&str] = &["e.V.", "Dr.", "Prof.", "Co.", "Inc.", "Ltd."];

const LEADING_PUNCT: &[char] = &['(', '[', '"', '„', '“', '«', '\''];
const TRAILING_PUNCT: &[char] = &[')', ']', '"', '“', '»', '\'', '.', ',', ';', ':', '!', '?'];
const CLAUSE_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?'];

const MAX_NAME_TOKENS: usize = 3;
const MAX_PERSON_TOKENS: usize = 2;

fn chunk_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+").expect("valid chunk pattern"))
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    /// Clause punctuation directly followed this token.
    closes: bool,
}

impl Token<'_> {
    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    last_token: usize,
}

/// Rule-based recognizer for German organisation and person names.
///
/// Finds organisations by legal-form suffix ("Acme GmbH") or institutional head
/// ("Universität Hamburg", "Institut für Informatik"), persons by a preceding
/// honorific ("Herr Müller", "Prof. Dr. Anna Schmidt"). Gazetteer entries are
/// matched verbatim on word boundaries and win over rule matches that overlap them.
#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    stopwords: StopwordSet,
    gazetteer: Vec<Entity>,
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new(StopwordSet::german())
    }
}

impl PatternRecognizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            gazetteer: Vec::new(),
        }
    }

    pub fn with_gazetteer(mut self, entries: impl IntoIterator<Item = Entity>) -> Self {
        self.gazetteer.extend(entries);
        self
    }

    fn tokens<'a>(text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for chunk in chunk_pattern().find_iter(text) {
            let mut start = chunk.start();
            let mut end = chunk.end();
            let mut closes = false;

            while let Some(c) = text[start..end].chars().next() {
                if !LEADING_PUNCT.contains(&c) {
                    break;
                }
                start += c.len_utf8();
            }

            while let Some(c) = text[start..end].chars().next_back() {
                if !TRAILING_PUNCT.contains(&c) || DOTTED.contains(&&text[start..end]) {
                    break;
                }
                closes |= CLAUSE_PUNCT.contains(&c);
                end -= c.len_utf8();
            }

            if start < end {
                tokens.push(Token {
                    start,
                    end,
                    text: &text[start..end],
                    closes,
                });
            }
        }
        tokens
    }

    fn is_name_part(&self, token: &Token<'_>) -> bool {
        token.is_capitalized()
            && !self.stopwords.contains(token.text)
            && !DESCRIPTORS.contains(&token.text)
            && !HONORIFICS.contains(&token.text)
            && !LEGAL_FORMS.contains(&token.text)
    }

    /// "<Name>{1,3} <legal form>[ & <legal form>]*", walking back from the suffix at `at`.
    fn legal_form_org(&self, tokens: &[Token<'_>], at: usize, floor: usize) -> Option<Span> {
        let mut first = at;
        while first > floor && at - first < MAX_NAME_TOKENS {
            let prev = &tokens[first - 1];
            if prev.closes || !(self.is_name_part(prev) || prev.text == "&") {
                break;
            }
            first -= 1;
        }
        while first < at && tokens[first].text == "&" {
            first += 1;
        }
        if first == at {
            return None;
        }

        let mut last = at;
        while !tokens[last].closes {
            match tokens.get(last + 1) {
                Some(next) if LEGAL_FORMS.contains(&next.text) => last += 1,
                Some(amp) if amp.text == "&" && !amp.closes => match tokens.get(last + 2) {
                    Some(next) if LEGAL_FORMS.contains(&next.text) => last += 2,
                    _ => break,
                },
                _ => break,
            }
        }

        Some(Span {
            start: tokens[first].start,
            end: tokens[last].end,
            last_token: last,
        })
    }

    /// "<Head> für|der|des <Name>..." or "<Head> <Name>...".
    fn institution_org(&self, tokens: &[Token<'_>], at: usize) -> Option<Span> {
        let head = &tokens[at];
        let lowered = head.text.to_lowercase();
        if !head.is_capitalized()
            || head.closes
            || !INSTITUTION_HEADS.iter().any(|h| lowered.ends_with(h))
        {
            return None;
        }

        let mut last = at;
        if let Some(link) = tokens.get(at + 1) {
            if INSTITUTION_LINKS.contains(&link.text) && !link.closes {
                last = at + 1;
            }
        }

        let name_start = last + 1;
        while last - at < MAX_NAME_TOKENS + 1 && !tokens[last].closes {
            match tokens.get(last + 1) {
                Some(next) if self.is_name_part(next) => last += 1,
                _ => break,
            }
        }
        if last < name_start {
            return None;
        }

        Some(Span {
            start: head.start,
            end: tokens[last].end,
            last_token: last,
        })
    }

    /// "<Honorific>+ <Name>{1,2}"; the honorifics are not part of the entity text.
    fn person(&self, tokens: &[Token<'_>], at: usize) -> Option<Span> {
        let mut cursor = at;
        while HONORIFICS.contains(&tokens[cursor].text) && !tokens[cursor].closes {
            match tokens.get(cursor + 1) {
                Some(_) => cursor += 1,
                None => return None,
            }
        }
        if cursor == at || !self.is_name_part(&tokens[cursor]) {
            return None;
        }

        let first = cursor;
        let mut last = cursor;
        while last - first + 1 < MAX_PERSON_TOKENS && !tokens[last].closes {
            match tokens.get(last + 1) {
                Some(next) if self.is_name_part(next) => last += 1,
                _ => break,
            }
        }

        Some(Span {
            start: tokens[first].start,
            end: tokens[last].end,
            last_token: last,
        })
    }

    fn gazetteer_matches(&self, text: &str) -> Vec<(usize, usize, EntityType)> {
        let mut matches = Vec::new();
        for entry in &self.gazetteer {
            if entry.text.is_empty() {
                continue;
            }
            for (start, found) in text.match_indices(entry.text.as_str()) {
                let end = start + found.len();
                let open = text[..start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !c.is_alphanumeric());
                let close = text[end..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphanumeric());
                if open && close {
                    matches.push((start, end, entry.entity_type.clone()));
                }
            }
        }
        matches
    }

    fn rule_matches(&self, text: &str) -> Vec<(usize, usize, EntityType)> {
        let tokens = Self::tokens(text);
        let mut matches = Vec::new();
        let mut floor = 0;
        let mut i = 0;

        while i < tokens.len() {
            let found = if HONORIFICS.contains(&tokens[i].text) {
                self.person(&tokens, i).map(|span| (span, EntityType::Person))
            } else if LEGAL_FORMS.contains(&tokens[i].text) {
                self.legal_form_org(&tokens, i, floor)
                    .map(|span| (span, EntityType::Organization))
            } else {
                self.institution_org(&tokens, i)
                    .map(|span| (span, EntityType::Organization))
            };

            match found {
                Some((span, entity_type)) => {
                    matches.push((span.start, span.end, entity_type));
                    i = span.last_token + 1;
                    floor = i;
                }
                None => i += 1,
            }
        }
        matches
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognitionError> {
        let mut gazetteer = self.gazetteer_matches(text);
        gazetteer.sort_by_key(|&(start, end, _)| (start, Reverse(end)));

        let mut spans: Vec<(usize, usize, EntityType)> = Vec::new();
        for candidate in gazetteer.into_iter().chain(self.rule_matches(text)) {
            let (start, end, _) = candidate;
            if spans.iter().all(|&(s, e, _)| end <= s || e <= start) {
                spans.push(candidate);
            }
        }
        spans.sort_by_key(|&(start, _, _)| start);

        Ok(spans
            .into_iter()
            .map(|(start, end, entity_type)| Entity::new(&text[start..end], entity_type))
            .collect())
    }
}
