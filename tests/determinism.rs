use docqa_core::{EntityType, Pipeline};

const TEXT: &str = "Die Acme GmbH baut Fahrräder. Herr Müller leitet die Acme GmbH. Die Fahrräder sind rot.";

#[test]
fn analysis_is_idempotent() {
    let pipeline = Pipeline::default();

    let first = pipeline.analyze(TEXT).unwrap();
    let second = pipeline.analyze(TEXT).unwrap();

    assert_eq!(first, second);

    let json1 = serde_json::to_string_pretty(&first).unwrap();
    let json2 = serde_json::to_string_pretty(&second).unwrap();
    assert_eq!(json1, json2, "Analysis output is not deterministic");
}

#[test]
fn separate_pipelines_agree() {
    let a = Pipeline::default().analyze(TEXT).unwrap();
    let b = Pipeline::default().analyze(TEXT).unwrap();

    assert_eq!(a, b);
}

#[test]
fn golden_analysis() {
    let analysis = Pipeline::default().analyze(TEXT).unwrap();

    assert_eq!(
        analysis.sentences,
        vec![
            "Die Acme GmbH baut Fahrräder.",
            "Herr Müller leitet die Acme GmbH.",
            "Die Fahrräder sind rot.",
        ]
    );

    let rare = (4.0f64 / 2.0).ln() + 1.0;
    let common = (4.0f64 / 3.0).ln() + 1.0;
    let expected = [
        ("baut", rare),
        ("herr", rare),
        ("leitet", rare),
        ("müller", rare),
        ("rot", rare),
        ("acme", common),
        ("fahrräder", common),
        ("gmbh", common),
    ];
    assert_eq!(analysis.keywords.len(), expected.len());
    for (keyword, (term, weight)) in analysis.keywords.iter().zip(expected) {
        assert_eq!(keyword.term, term);
        assert!((keyword.weight - weight).abs() < 1e-12, "{term}: {}", keyword.weight);
    }

    let frequencies: Vec<(&str, &EntityType, usize)> = analysis
        .entity_frequencies
        .iter()
        .map(|f| (f.entity.text.as_str(), &f.entity.entity_type, f.count))
        .collect();
    assert_eq!(
        frequencies,
        vec![
            ("Acme GmbH", &EntityType::Organization, 2),
            ("Müller", &EntityType::Person, 1),
        ]
    );

    assert_eq!(analysis.filtered_entities.len(), 3);
    let total: usize = analysis.entity_frequencies.iter().map(|f| f.count).sum();
    assert_eq!(total, analysis.filtered_entities.len());
}

#[test]
fn answers_are_deterministic() {
    let pipeline = Pipeline::default();
    let analysis = pipeline.analyze(TEXT).unwrap();

    for question in [
        "Welche Organisationen werden in dem Dokument erwähnt?",
        "Wer sind die Autoren in diesem Dokument?",
        "Was sind die wichtigsten Ergebnisse?",
    ] {
        assert_eq!(
            pipeline.answer(question, &analysis),
            pipeline.answer(question, &analysis)
        );
    }
}
