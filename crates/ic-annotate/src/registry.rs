//! In-memory entity-type registry the annotator resolves markers against.

use ic_protocol::EntityType;

/// Ordered collection of entity types, looked up by display name.
///
/// Display names are unique by construction: `upsert` replaces an existing
/// record in place instead of adding a second one.
#[derive(Debug, Clone, Default)]
pub struct EntityTypeRegistry {
    types: Vec<EntityType>,
}

impl EntityTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entity type by display name.
    pub fn find(&self, display_name: &str) -> Option<&EntityType> {
        self.types.iter().find(|t| t.display_name == display_name)
    }

    /// Insert a type, replacing any existing record with the same display
    /// name. Returns the replaced record, if any.
    pub fn upsert(&mut self, entity_type: EntityType) -> Option<EntityType> {
        match self
            .types
            .iter_mut()
            .find(|t| t.display_name == entity_type.display_name)
        {
            Some(slot) => Some(std::mem::replace(slot, entity_type)),
            None => {
                self.types.push(entity_type);
                None
            }
        }
    }

    /// Remove a type by display name.
    pub fn remove(&mut self, display_name: &str) -> Option<EntityType> {
        let idx = self
            .types
            .iter()
            .position(|t| t.display_name == display_name)?;
        Some(self.types.remove(idx))
    }

    pub fn clear(&mut self) {
        self.types.clear();
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityType> {
        self.types.iter()
    }
}

impl FromIterator<EntityType> for EntityTypeRegistry {
    fn from_iter<I: IntoIterator<Item = EntityType>>(iter: I) -> Self {
        let mut registry = Self::new();
        for t in iter {
            registry.upsert(t);
        }
        registry
    }
}

impl From<Vec<EntityType>> for EntityTypeRegistry {
    fn from(types: Vec<EntityType>) -> Self {
        types.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_display_name() {
        let registry: EntityTypeRegistry =
            vec![EntityType::list("color", vec!["red", "blue"])].into();
        assert!(registry.find("color").is_some());
        assert!(registry.find("size").is_none());
    }

    #[test]
    fn upsert_replaces_same_display_name() {
        let mut registry = EntityTypeRegistry::new();
        assert!(registry.upsert(EntityType::list("color", vec!["red"])).is_none());
        let old = registry
            .upsert(EntityType::list("color", vec!["red", "blue"]))
            .unwrap();
        assert_eq!(old.entries.len(), 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("color").unwrap().entries.len(), 2);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let registry: EntityTypeRegistry = vec![
            EntityType::list("color", vec!["red"]),
            EntityType::list("size", vec!["S"]),
            EntityType::list("color", vec!["green"]),
        ]
        .into();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find("color").unwrap().first_value(), Some("green"));
    }

    #[test]
    fn remove_returns_record() {
        let mut registry: EntityTypeRegistry =
            vec![EntityType::list("color", vec!["red"])].into();
        let removed = registry.remove("color").unwrap();
        assert_eq!(removed.display_name, "color");
        assert!(registry.is_empty());
        assert!(registry.remove("color").is_none());
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let registry: EntityTypeRegistry = vec![
            EntityType::list("color", vec!["red"]),
            EntityType::list("size", vec!["S"]),
        ]
        .into();
        let names: Vec<&str> = registry.iter().map(|t| t.display_name.as_str()).collect();
        assert_eq!(names, vec!["color", "size"]);
    }
}
