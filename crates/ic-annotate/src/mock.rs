//! Sample registries for tests — pre-loaded entity types.

use ic_protocol::EntityType;

use crate::registry::EntityTypeRegistry;

/// Registry with a map-kind `colors` type (value + translated synonyms).
pub fn colors_map_registry() -> EntityTypeRegistry {
    vec![EntityType::map(
        "colors",
        vec![
            ("red", vec!["red", "rot"]),
            ("blue", vec!["blue", "blau"]),
            ("green", vec!["green", "gruen"]),
        ],
    )]
    .into()
}

/// Registry with a list-kind `sizes` type.
pub fn sizes_list_registry() -> EntityTypeRegistry {
    vec![EntityType::list("sizes", vec!["S", "M", "L", "XL"])].into()
}

/// Registry with both `colors` and `sizes`, for multi-marker phrases.
pub fn shop_registry() -> EntityTypeRegistry {
    let mut registry = colors_map_registry();
    for t in sizes_list_registry().iter() {
        registry.upsert(t.clone());
    }
    registry
}
