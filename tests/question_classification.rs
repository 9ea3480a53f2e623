use docqa_core::question::QuestionClassifier;
use docqa_core::{AnalysisConfig, EntityType};

#[test]
fn organisation_triggers() {
    let classifier = QuestionClassifier::default();

    assert_eq!(
        classifier.classify("Welche Organisationen werden in dem Dokument erwähnt?"),
        Some(EntityType::Organization)
    );
    assert_eq!(
        classifier.classify("Welche FIRMA liefert?"),
        Some(EntityType::Organization)
    );
}

#[test]
fn person_triggers() {
    let classifier = QuestionClassifier::default();

    assert_eq!(
        classifier.classify("Wer sind die Autoren in diesem Dokument?"),
        Some(EntityType::Person)
    );
    assert_eq!(classifier.classify("Wie heißt der CEO?"), Some(EntityType::Person));
}

#[test]
fn organisation_wins_when_both_match() {
    let classifier = QuestionClassifier::default();

    assert_eq!(
        classifier.classify("Welche Organisation leitet diese Person?"),
        Some(EntityType::Organization)
    );
}

#[test]
fn no_trigger_no_classification() {
    let classifier = QuestionClassifier::default();

    assert_eq!(classifier.classify("Was sind die wichtigsten Ergebnisse?"), None);
    assert_eq!(classifier.classify(""), None);
}

#[test]
fn triggers_match_as_substrings() {
    let classifier = QuestionClassifier::default();

    // "wer" inside "werden"
    assert_eq!(classifier.classify("Was werden wir tun?"), Some(EntityType::Person));
}

#[test]
fn triggers_come_from_config() {
    let config = AnalysisConfig {
        organization_triggers: vec!["Company".to_string()],
        person_triggers: vec!["who".to_string()],
        ..AnalysisConfig::v0()
    };
    let classifier = QuestionClassifier::from_config(&config);

    assert_eq!(
        classifier.classify("Which company and who?"),
        Some(EntityType::Organization)
    );
    assert_eq!(classifier.classify("who spoke?"), Some(EntityType::Person));
    assert_eq!(classifier.classify("Welche Firma?"), None);
}
