use docqa_core::keywords::{extract_keywords, DEFAULT_KEYWORD_LIMIT};
use docqa_core::weighting::{SmoothIdfWeighter, TermWeighter, WeightingError};
use docqa_core::Pipeline;

fn corpus(sentences: &[&str]) -> Vec<String> {
    sentences.iter().map(|s| s.to_string()).collect()
}

fn idf(n: f64, df: f64) -> f64 {
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

#[test]
fn rarer_terms_weigh_more() {
    let sentences = corpus(&["apfel birne", "apfel kirsche", "apfel"]);

    let keywords = extract_keywords(&SmoothIdfWeighter, &sentences, DEFAULT_KEYWORD_LIMIT).unwrap();

    let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
    // birne and kirsche tie; the weighter yields them alphabetically
    assert_eq!(terms, vec!["birne", "kirsche", "apfel"]);
    assert!((keywords[0].weight - idf(3.0, 1.0)).abs() < 1e-12);
    assert!((keywords[2].weight - 1.0).abs() < 1e-12, "a term in every sentence weighs exactly 1");
}

#[test]
fn keywords_are_bounded_and_non_increasing() {
    let sentences: Vec<String> = (0..15)
        .map(|i| format!("wort{i} gemeinsam"))
        .chain(std::iter::once("gemeinsam extra".to_string()))
        .collect();

    let keywords = extract_keywords(&SmoothIdfWeighter, &sentences, DEFAULT_KEYWORD_LIMIT).unwrap();

    assert_eq!(keywords.len(), 10);
    assert!(keywords.windows(2).all(|w| w[0].weight >= w[1].weight));
    assert!(keywords.iter().all(|k| k.term != "gemeinsam"), "the most common term ranks last");
}

#[test]
fn single_character_tokens_are_not_terms() {
    let frequencies = SmoothIdfWeighter::document_frequencies(&corpus(&["a b cc", "cc d"]));

    assert_eq!(frequencies.len(), 1);
    assert_eq!(frequencies.get("cc"), Some(&2));
}

#[test]
fn empty_sentences_still_count_towards_corpus_size() {
    let keywords = SmoothIdfWeighter.weigh(&corpus(&["daten", "", ""])).unwrap();

    assert_eq!(keywords.len(), 1);
    assert!((keywords[0].weight - idf(3.0, 1.0)).abs() < 1e-12);
}

#[test]
fn empty_vocabulary_is_an_empty_corpus() {
    assert_eq!(SmoothIdfWeighter.weigh(&[]).unwrap_err(), WeightingError::EmptyCorpus);
    assert_eq!(
        extract_keywords(&SmoothIdfWeighter, &corpus(&["", "x"]), 10).unwrap_err(),
        WeightingError::EmptyCorpus
    );
}

#[test]
fn pipeline_keywords_skip_stopwords_and_respect_limit() {
    let pipeline = Pipeline::default();
    let text = "Die Acme GmbH baut Fahrräder. Herr Müller leitet die Acme GmbH. Die Fahrräder sind rot.";

    let analysis = pipeline.analyze(text).unwrap();

    let terms: Vec<&str> = analysis.keywords.iter().map(|k| k.term.as_str()).collect();
    assert_eq!(
        terms,
        vec!["baut", "herr", "leitet", "müller", "rot", "acme", "fahrräder", "gmbh"]
    );
    assert!(!terms.contains(&"die") && !terms.contains(&"sind"));

}

#[test]
fn pipeline_never_returns_more_than_ten_keywords() {
    let pipeline = Pipeline::default();
    let text: String = (0..20)
        .map(|i| format!("Begriff{i} erscheint hier{i}. "))
        .collect();

    let analysis = pipeline.analyze(&text).unwrap();

    assert_eq!(analysis.sentences.len(), 20);
    assert_eq!(analysis.keywords.len(), DEFAULT_KEYWORD_LIMIT);
}
