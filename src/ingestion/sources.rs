use crate::model::ingestion::{DataSource, NewDataSource, SourceType};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceConfig {
    /// `None` until the source has a `data_sources` row.
    pub id: Option<i32>,
    pub name: String,
    pub code: String,
    pub source_type: SourceType,
    pub base_url: Option<String>,
    pub auth_required: bool,
}

impl SourceConfig {
    pub fn to_new_row(&self) -> NewDataSource {
        NewDataSource {
            name: self.name.clone(),
            code: self.code.clone(),
            source_type: self.source_type.as_str().to_string(),
            base_url: self.base_url.clone(),
            auth_required: self.auth_required,
        }
    }
}

impl From<&DataSource> for SourceConfig {
    fn from(source: &DataSource) -> Self {
        SourceConfig {
            id: Some(source.id),
            name: source.name.clone(),
            code: source.code.clone(),
            source_type: source.kind(),
            base_url: source.base_url.clone(),
            auth_required: source.auth_required,
        }
    }
}

/// Data sources keyed by code.
#[derive(Debug, Clone)]
pub struct SourcesRegistry {
    sources: BTreeMap<String, SourceConfig>,
}

impl Default for SourcesRegistry {
    fn default() -> Self {
        let mut registry = SourcesRegistry::empty();
        registry.register(SourceConfig {
            id: None,
            name: "World Rugby API".to_string(),
            code: "WORLD_RUGBY".to_string(),
            source_type: SourceType::Api,
            base_url: Some("https://api.worldrugby.org".to_string()),
            auth_required: true,
        });
        registry.register(SourceConfig {
            id: None,
            name: "Six Nations RSS".to_string(),
            code: "SIX_NATIONS".to_string(),
            source_type: SourceType::Rss,
            base_url: Some("https://www.sixnationsrugby.com/feed".to_string()),
            auth_required: false,
        });
        registry
    }
}

impl SourcesRegistry {
    pub fn empty() -> Self {
        SourcesRegistry {
            sources: BTreeMap::new(),
        }
    }

    /// Replaces any source already registered under the same code.
    pub fn register(&mut self, source: SourceConfig) {
        debug!("Registered data source: {} ({})", source.name, source.code);
        self.sources.insert(source.code.clone(), source);
    }

    pub fn remove(&mut self, code: &str) -> Option<SourceConfig> {
        self.sources.remove(code)
    }

    pub fn get(&self, code: &str) -> Option<&SourceConfig> {
        self.sources.get(code)
    }

    pub fn all(&self) -> Vec<&SourceConfig> {
        self.sources.values().collect()
    }

    pub fn by_type(&self, source_type: SourceType) -> Vec<&SourceConfig> {
        self.sources
            .values()
            .filter(|s| s.source_type == source_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_registered() {
        let registry = SourcesRegistry::default();
        let world = registry.get("WORLD_RUGBY").unwrap();
        assert_eq!(world.source_type, SourceType::Api);
        assert!(world.auth_required);
        assert_eq!(registry.get("SIX_NATIONS").unwrap().id, None);
        assert_eq!(registry.all().len(), 2);
        assert!(registry.get("URC").is_none());
    }

    #[test]
    fn filter_by_type_and_override() {
        let mut registry = SourcesRegistry::default();
        registry.register(SourceConfig {
            id: Some(7),
            name: "Six Nations API".to_string(),
            code: "SIX_NATIONS".to_string(),
            source_type: SourceType::Api,
            base_url: Some("https://api.sixnations.example".to_string()),
            auth_required: false,
        });

        assert_eq!(registry.all().len(), 2);
        assert_eq!(registry.by_type(SourceType::Api).len(), 2);
        assert!(registry.by_type(SourceType::Rss).is_empty());
        assert_eq!(registry.get("SIX_NATIONS").unwrap().id, Some(7));

        assert!(registry.remove("WORLD_RUGBY").is_some());
        assert!(registry.get("WORLD_RUGBY").is_none());
    }

    #[test]
    fn built_in_source_becomes_a_new_row() {
        let registry = SourcesRegistry::default();
        let row = registry.get("SIX_NATIONS").unwrap().to_new_row();
        assert_eq!(row.code, "SIX_NATIONS");
        assert_eq!(row.source_type, "rss");
        assert!(!row.auth_required);
    }
}
