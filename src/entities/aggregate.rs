use std::collections::HashMap;

use crate::types::{Entity, EntityFrequency, EntityType};

/// Mentions of the desired types plus their frequency ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityAggregate {
    pub frequencies: Vec<EntityFrequency>,
    pub filtered: Vec<Entity>,
}

/// Filter `mentions` to `desired` types, then count each distinct (text, type) pair.
///
/// Frequencies are sorted descending by count. Ties keep the order in which
/// each entity was first mentioned.
pub fn aggregate_entities(mentions: Vec<Entity>, desired: &[EntityType]) -> EntityAggregate {
    let filtered: Vec<Entity> = mentions
        .into_iter()
        .filter(|entity| desired.contains(&entity.entity_type))
        .collect();

    let mut frequencies: Vec<EntityFrequency> = Vec::new();
    let mut slots: HashMap<&Entity, usize> = HashMap::new();
    for entity in &filtered {
        match slots.get(entity) {
            Some(&slot) => frequencies[slot].count += 1,
            None => {
                slots.insert(entity, frequencies.len());
                frequencies.push(EntityFrequency {
                    entity: entity.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));

    EntityAggregate {
        frequencies,
        filtered,
    }
}
