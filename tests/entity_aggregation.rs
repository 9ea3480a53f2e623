use docqa_core::entities::aggregate_entities;
use docqa_core::{Entity, EntityType};

fn org(text: &str) -> Entity {
    Entity::new(text, EntityType::Organization)
}

fn per(text: &str) -> Entity {
    Entity::new(text, EntityType::Person)
}

fn desired() -> Vec<EntityType> {
    vec![EntityType::Organization, EntityType::Person]
}

#[test]
fn counts_sorted_descending_and_filtered_to_desired_types() {
    let mentions = vec![
        org("Acme GmbH"),
        per("Müller"),
        org("Acme GmbH"),
        Entity::new("Berlin", EntityType::Location),
        per("Müller"),
        org("Beta AG"),
        per("Müller"),
    ];

    let aggregate = aggregate_entities(mentions, &desired());

    let ranked: Vec<(&str, usize)> = aggregate
        .frequencies
        .iter()
        .map(|f| (f.entity.text.as_str(), f.count))
        .collect();
    assert_eq!(ranked, vec![("Müller", 3), ("Acme GmbH", 2), ("Beta AG", 1)]);

    assert_eq!(aggregate.filtered.len(), 6);
    assert!(aggregate
        .filtered
        .iter()
        .all(|e| desired().contains(&e.entity_type)));

    let total: usize = aggregate.frequencies.iter().map(|f| f.count).sum();
    assert_eq!(total, aggregate.filtered.len());
}

#[test]
fn ties_keep_first_seen_order() {
    let mentions = vec![org("X"), per("Y"), per("Y"), org("X"), org("Z")];

    let aggregate = aggregate_entities(mentions, &desired());

    let ranked: Vec<&str> = aggregate
        .frequencies
        .iter()
        .map(|f| f.entity.text.as_str())
        .collect();
    assert_eq!(ranked, vec!["X", "Y", "Z"]);
}

#[test]
fn equality_is_exact_on_text_and_type() {
    let mentions = vec![
        org("Acme"),
        org("acme"),
        org("Acme "),
        per("Acme"),
        org("Acme"),
    ];

    let aggregate = aggregate_entities(mentions, &desired());

    assert_eq!(aggregate.frequencies.len(), 4);
    assert_eq!(aggregate.frequencies[0].entity, org("Acme"));
    assert_eq!(aggregate.frequencies[0].count, 2);
}

#[test]
fn no_desired_entities_is_empty_not_an_error() {
    let mentions = vec![Entity::new("Berlin", EntityType::Location)];

    let aggregate = aggregate_entities(mentions, &desired());

    assert!(aggregate.frequencies.is_empty());
    assert!(aggregate.filtered.is_empty());
}
