//! Entity-type CRUD against the mock backend, list and map kinds.

mod helpers;

use helpers::TestHarness;
use ic_protocol::{AutoExpansionMode, EntityKind};

#[tokio::test]
async fn create_and_delete_list_kind() {
    let mut h = TestHarness::connect().await;
    assert_eq!(h.manager.entity_types().len(), 0);

    let colors = vec!["red", "blue", "green"];
    h.manager
        .create_entity("color", colors.clone())
        .await
        .unwrap();
    assert_eq!(h.manager.entity_types().len(), 1);

    let entity = h.manager.find_entity_type("color").unwrap();
    assert_eq!(entity.display_name, "color");
    assert_eq!(entity.kind, EntityKind::List);
    assert_eq!(entity.auto_expansion_mode, AutoExpansionMode::Unspecified);
    assert_eq!(entity.entries.len(), colors.len());
    for (entry, color) in entity.entries.iter().zip(&colors) {
        assert_eq!(entry.value, *color);
        assert_eq!(entry.synonyms, vec![color.to_string()]);
    }

    h.manager.delete_all_entities().await.unwrap();
    assert_eq!(h.manager.entity_types().len(), 0);
}

#[tokio::test]
async fn create_and_delete_map_kind() {
    let mut h = TestHarness::connect().await;

    let colors = vec![
        ("red", vec!["red", "rot"]),
        ("blue", vec!["blue", "blau"]),
        ("green", vec!["green", "gruen"]),
    ];
    h.manager
        .create_entity_map("color", colors.clone())
        .await
        .unwrap();

    let entity = h.manager.find_entity_type("color").unwrap();
    assert_eq!(entity.kind, EntityKind::Map);
    assert_eq!(entity.entries.len(), colors.len());
    for (entry, (value, synonyms)) in entity.entries.iter().zip(&colors) {
        assert_eq!(entry.value, *value);
        assert_eq!(entry.synonyms.len(), 2);
        assert_eq!(entry.synonyms[0], synonyms[0]);
    }

    h.manager.delete_all_entities().await.unwrap();
    assert_eq!(h.manager.entity_types().len(), 0);
}

#[tokio::test]
async fn recreating_an_entity_updates_it() {
    let mut h = TestHarness::connect().await;
    h.manager.create_entity("sizes", vec!["S", "M"]).await.unwrap();
    let original_name = h.manager.find_entity_type("sizes").unwrap().name.clone();

    h.manager
        .create_entity("sizes", vec!["S", "M", "L", "XL"])
        .await
        .unwrap();

    assert_eq!(h.manager.entity_types().len(), 1);
    let entity = h.manager.find_entity_type("sizes").unwrap();
    assert_eq!(entity.name, original_name);
    assert_eq!(entity.entries.len(), 4);
}
