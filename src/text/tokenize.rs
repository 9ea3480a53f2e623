use std::sync::OnceLock;

use regex::Regex;

/// Splits text into sentences and sentences into word tokens.
pub trait Tokenizer {
    /// Sentences in document order, trimmed, never empty.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Word and punctuation tokens in order, case preserved.
    fn words(&self, text: &str) -> Vec<String>;
}

/// Abbreviations whose trailing period never ends a sentence (compared lowercased).
const ABBREVIATIONS: &[&str] = &[
    "abb", "abs", "bd", "bspw", "bzgl", "bzw", "ca", "co", "d.h", "dipl", "dr", "e.v", "evtl",
    "fa", "ggf", "hr", "hrsg", "inc", "inkl", "jh", "jr", "kap", "ltd", "mio", "mrd", "nr", "o.ä",
    "prof", "s", "sog", "str", "tel", "u.a", "usf", "vgl", "z.b", "z.t", "zit", "zzgl",
];

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+(?:[-'’]\w+)*|[^\w\s]").expect("valid word pattern"))
}

/// Rule-based tokenizer for German prose.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    /// Whether the period at byte `dot` closes the word before it rather than the sentence.
    fn is_abbreviation_dot(text: &str, dot: usize) -> bool {
        let word = text[..dot]
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(['(', '"', '„', '«', '\'']);

        if word.is_empty() {
            return false;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            // "15. April", "3. Kapitel"
            return true;
        }
        if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
            return true;
        }
        ABBREVIATIONS.contains(&word.to_lowercase().as_str())
    }

    fn opens_sentence(c: char) -> bool {
        c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '„' | '«' | '(' | '\'')
    }
}

impl Tokenizer for RuleTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            // Consume the whole terminator run plus closing quotes and brackets.
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if matches!(next, '.' | '!' | '?' | '"' | '“' | '»' | ')' | '\'') {
                    end = j + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let rest = &text[end..];
            let after_space = rest.trim_start();
            let boundary = if after_space.is_empty() {
                true
            } else if after_space.len() == rest.len() {
                false
            } else {
                after_space.chars().next().is_some_and(Self::opens_sentence)
            };

            if !boundary || (c == '.' && end == i + 1 && Self::is_abbreviation_dot(text, i)) {
                continue;
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }

    fn words(&self, text: &str) -> Vec<String> {
        word_pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
