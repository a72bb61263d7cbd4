use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Team,
    Fixture,
    Territory,
}

/// External id to internal id cache, scoped to a single ingestion run.
#[derive(Debug, Default)]
pub struct IdMapper {
    mappings: HashMap<(EntityType, String, String), i32>,
}

impl IdMapper {
    pub fn new() -> Self {
        IdMapper::default()
    }

    pub fn get(&self, entity_type: EntityType, source: &str, external_id: &str) -> Option<i32> {
        self.mappings
            .get(&(entity_type, source.to_string(), external_id.to_string()))
            .copied()
    }

    pub fn insert(&mut self, entity_type: EntityType, source: &str, external_id: &str, internal_id: i32) {
        self.mappings
            .insert((entity_type, source.to_string(), external_id.to_string()), internal_id);
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_by_entity_and_source() {
        let mut ids = IdMapper::new();
        ids.insert(EntityType::Team, "WORLD_RUGBY", "NZL", 4);
        ids.insert(EntityType::Fixture, "WORLD_RUGBY", "NZL", 90);

        assert_eq!(ids.get(EntityType::Team, "WORLD_RUGBY", "NZL"), Some(4));
        assert_eq!(ids.get(EntityType::Fixture, "WORLD_RUGBY", "NZL"), Some(90));
        assert_eq!(ids.get(EntityType::Team, "SIX_NATIONS", "NZL"), None);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn later_insert_replaces_mapping() {
        let mut ids = IdMapper::new();
        assert!(ids.is_empty());
        ids.insert(EntityType::Territory, "SIX_NATIONS", "IE", 1);
        ids.insert(EntityType::Territory, "SIX_NATIONS", "IE", 2);
        assert_eq!(ids.get(EntityType::Territory, "SIX_NATIONS", "IE"), Some(2));
        assert_eq!(ids.len(), 1);
    }
}
