//! End-to-end seeding through the registry into both stores.

use foody_core::enums::EntityKind;
use foody_core::fixtures::{SEED_ORDER, SampleData};
use foody_schema::{PersistenceError, SchemaError, SchemaRegistry};
use foody_store::{JsonlStore, MemoryStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn sample() -> SampleData {
    SampleData::load().unwrap()
}

fn docs(kind: EntityKind) -> Vec<Value> {
    sample().documents(kind).to_vec()
}

fn seed_all(registry: &SchemaRegistry, store: &impl foody_schema::Persistence) {
    let data = sample();
    for kind in SEED_ORDER {
        registry
            .seed(kind, data.documents(kind).to_vec(), store)
            .unwrap();
    }
}

#[test]
fn restaurants_items_menu_then_bad_price_is_rejected() {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);

    assert_eq!(registry.seed(EntityKind::Restaurant, docs(EntityKind::Restaurant), &store).unwrap(), 2);
    assert_eq!(registry.seed(EntityKind::Item, docs(EntityKind::Item), &store).unwrap(), 5);
    assert_eq!(registry.seed(EntityKind::MenuEntry, docs(EntityKind::MenuEntry), &store).unwrap(), 5);

    let bad = json!({
        "id": "item_006",
        "restaurantId": "rest_001",
        "name": "Negative Naan",
        "price": -5
    });
    let err = registry.seed(EntityKind::Item, vec![bad], &store).unwrap_err();
    let violation = err.validation().unwrap();
    assert_eq!(violation.rule(), "range_violation");
    assert_eq!(violation.path(), "price");
    assert_eq!(store.count(EntityKind::Item).unwrap(), 5);
}

#[test]
fn duplicate_user_email_is_refused_by_the_store() {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);

    let first = docs(EntityKind::User)[0].clone();
    let mut second = first.clone();
    second["id"] = json!("user_099");

    registry.seed(EntityKind::User, vec![first], &store).unwrap();
    let err = registry.seed(EntityKind::User, vec![second], &store).unwrap_err();

    match err {
        SchemaError::Persistence(PersistenceError::UniquenessViolation { kind, field, value }) => {
            assert_eq!(kind, EntityKind::User);
            assert_eq!(field, "email");
            assert_eq!(value, "rajesh.kumar@email.com");
        }
        other => panic!("expected uniqueness violation, got {other:?}"),
    }
    assert_eq!(store.count(EntityKind::User).unwrap(), 1);
}

#[test]
fn full_sample_seeds_in_dependency_order() {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);
    seed_all(&registry, &store);

    let counts: Vec<_> = SEED_ORDER
        .iter()
        .map(|kind| (*kind, store.count(*kind).unwrap()))
        .collect();
    assert_eq!(
        counts,
        vec![
            (EntityKind::Restaurant, 2),
            (EntityKind::Item, 5),
            (EntityKind::MenuEntry, 5),
            (EntityKind::User, 3),
            (EntityKind::Order, 3),
            (EntityKind::Feedback, 3),
        ]
    );
}

#[test]
fn uniqueness_check_consults_the_store() {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);
    seed_all(&registry, &store);

    let taken = registry
        .check_uniqueness(EntityKind::Restaurant, "email", &json!("spicegarden@restaurant.com"), &store)
        .unwrap();
    let free = registry
        .check_uniqueness(EntityKind::Restaurant, "email", &json!("new@restaurant.com"), &store)
        .unwrap();
    assert!(taken);
    assert!(!free);
}

#[rstest]
#[case("restaurantId", json!("rest_001"), 3)]
#[case("restaurantId", json!("rest_002"), 2)]
#[case("id", json!("item_004"), 1)]
#[case("restaurantId", json!("rest_404"), 0)]
fn find_items_by_field(#[case] field: &str, #[case] value: Value, #[case] expected: usize) {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);
    seed_all(&registry, &store);
    assert_eq!(store.find_by(EntityKind::Item, field, &value).unwrap().len(), expected);
}

#[test]
fn nearest_restaurant_to_pune() {
    let registry = SchemaRegistry::new();
    let store = MemoryStore::new(&registry);
    seed_all(&registry, &store);

    let hits = store.nearest(EntityKind::Restaurant, 73.86, 18.52, 2).unwrap();
    let ids: Vec<_> = hits.iter().map(|hit| hit.document["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["rest_001", "rest_002"]);
    assert!(hits[0].distance_km < 1.0);
    assert!(hits[1].distance_km > 1000.0);
}

#[test]
fn jsonl_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let registry = SchemaRegistry::new();

    {
        let store = JsonlStore::open(dir.path(), &registry).unwrap();
        seed_all(&registry, &store);
    }

    let reopened = JsonlStore::open(dir.path(), &registry).unwrap();
    assert_eq!(reopened.count(EntityKind::Order).unwrap(), 3);
    assert_eq!(reopened.all(EntityKind::Feedback).unwrap(), docs(EntityKind::Feedback));

    let err = registry
        .seed(EntityKind::Restaurant, docs(EntityKind::Restaurant), &reopened)
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Persistence(PersistenceError::UniquenessViolation { ref field, .. }) if field == "id"
    ));
}

#[test]
fn jsonl_reset_then_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let registry = SchemaRegistry::new();
    let store = JsonlStore::open(dir.path(), &registry).unwrap();

    seed_all(&registry, &store);
    store.reset().unwrap();
    seed_all(&registry, &store);

    assert_eq!(store.count(EntityKind::User).unwrap(), 3);
    let reopened = JsonlStore::open(dir.path(), &registry).unwrap();
    assert_eq!(reopened.count(EntityKind::User).unwrap(), 3);
}
