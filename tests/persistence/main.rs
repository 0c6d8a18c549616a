//! File-backed store integration tests.

use std::sync::Arc;
use std::thread;

use serde_json::Value;
use zookeepr::{AnimalQuery, AnimalStore, JsonFileStore, NewAnimal, StoreError};

fn new_animal(name: &str, species: &str, traits: &[&str]) -> NewAnimal {
    NewAnimal {
        name: name.into(),
        species: species.into(),
        diet: "omnivore".into(),
        personality_traits: traits.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn sequential_creates_round_trip_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");

    let store = JsonFileStore::open(&path).unwrap();
    let created: Vec<_> = ["Fido", "Rex", "Tom", "Kiki"]
        .iter()
        .map(|name| store.create(new_animal(name, "dog", &["Loyal"])).unwrap())
        .collect();
    let ids: Vec<&str> = created.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3"]);

    let file: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let on_disk: Vec<&str> = file["animals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(on_disk, ids);

    let reloaded = JsonFileStore::open(&path).unwrap();
    assert_eq!(reloaded.all().unwrap(), created);
}

#[test]
fn reloaded_store_filters_and_looks_up() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    {
        let store = JsonFileStore::open(&path).unwrap();
        store.create(new_animal("Fido", "dog", &["Loyal", "brave"])).unwrap();
        store.create(new_animal("Tom", "cat", &["aloof"])).unwrap();
        store.create(new_animal("Rex", "dog", &["brave"])).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let brave_dogs = store
        .find(&AnimalQuery::new().with_species("dog").with_trait("brave"))
        .unwrap();
    let names: Vec<&str> = brave_dogs.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Fido", "Rex"]);

    assert_eq!(store.get("1").unwrap().unwrap().name, "Tom");
    assert!(store.get("3").unwrap().is_none());
}

#[test]
fn concurrent_creates_never_share_an_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    let store = Arc::new(JsonFileStore::open(&path).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .create(new_animal(&format!("pup-{i}"), "dog", &[]))
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .map(|h| h.join().unwrap().parse().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..8).collect::<Vec<u64>>());

    let reloaded = JsonFileStore::open(&path).unwrap();
    assert_eq!(reloaded.len().unwrap(), 8);
}

#[test]
fn largest_possible_id_in_file_still_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    std::fs::write(
        &path,
        format!(
            r#"{{"animals":[{{"id":"{}","name":"Max","species":"dog","diet":"omnivore","personalityTraits":[]}}]}}"#,
            u64::MAX
        ),
    )
    .unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(&u64::MAX.to_string()).unwrap().unwrap().name, "Max");
    assert_eq!(store.create(new_animal("Fido", "dog", &[])).unwrap().id, "1");
}

#[test]
fn exhausted_counter_fails_create_without_poisoning_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("animals.json");
    std::fs::write(&path, format!(r#"{{"animals":[],"nextId":{}}}"#, u64::MAX)).unwrap();

    let store = JsonFileStore::open(&path).unwrap();
    let err = store.create(new_animal("Fido", "dog", &[])).unwrap_err();
    assert_eq!(err, StoreError::IdsExhausted);

    // Later calls still reach the collection.
    assert!(store.is_empty().unwrap());
    assert_eq!(
        store.create(new_animal("Rex", "dog", &[])).unwrap_err(),
        StoreError::IdsExhausted
    );
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        format!(r#"{{"animals":[],"nextId":{}}}"#, u64::MAX)
    );
}
