//! Favorites persistence tests
//!
//! Cover the round trip between the favorites store and its key-value
//! backing, recovery from malformed persisted payloads, and the toggle
//! semantics the sidebar depends on.

use client::storage::{KeyValueStore, MemoryStore, FAVORITES_KEY};
use client::FavoritesStore;
use proptest::prelude::*;
use shared::CityId;

fn city(name: &str) -> CityId {
    CityId::new(name).unwrap()
}

// ============================================================================
// Round trips through storage
// ============================================================================

#[test]
fn test_toggle_survives_reload() {
    let mut store = MemoryStore::default();
    let mut favorites = FavoritesStore::load(&store);

    assert!(favorites.toggle(&mut store, &city("Bangkok")).unwrap());
    assert!(favorites.toggle(&mut store, &city("Chiang Mai")).unwrap());

    let reloaded = FavoritesStore::load(&store);
    assert_eq!(reloaded.list(), vec!["Bangkok", "Chiang Mai"]);
}

#[test]
fn test_removal_survives_reload() {
    let mut store = MemoryStore::default();
    let mut favorites = FavoritesStore::load(&store);
    favorites.toggle(&mut store, &city("Bangkok")).unwrap();
    favorites.toggle(&mut store, &city("Phuket")).unwrap();

    assert!(!favorites.toggle(&mut store, &city("Bangkok")).unwrap());

    let reloaded = FavoritesStore::load(&store);
    assert_eq!(reloaded.list(), vec!["Phuket"]);
}

#[test]
fn test_persisted_payload_is_a_json_array() {
    let mut store = MemoryStore::default();
    let mut favorites = FavoritesStore::load(&store);
    favorites.toggle(&mut store, &city("Bangkok")).unwrap();

    let raw = store.get(FAVORITES_KEY).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec!["Bangkok"]);
}

// ============================================================================
// Malformed and legacy payloads
// ============================================================================

#[test]
fn test_malformed_payload_yields_empty_set() {
    let mut store = MemoryStore::default();
    store.set(FAVORITES_KEY, "{not json").unwrap();

    let favorites = FavoritesStore::load(&store);
    assert!(favorites.is_empty());
}

#[test]
fn test_legacy_starred_names_are_normalized() {
    let mut store = MemoryStore::default();
    store
        .set(FAVORITES_KEY, r#"["★ Bangkok", "Bangkok", "  Phuket  "]"#)
        .unwrap();

    let favorites = FavoritesStore::load(&store);
    assert_eq!(favorites.list(), vec!["Bangkok", "Phuket"]);
}

#[test]
fn test_placeholder_entries_are_dropped_on_load() {
    let mut store = MemoryStore::default();
    store
        .set(FAVORITES_KEY, r#"["City Name", "", "Bangkok"]"#)
        .unwrap();

    let favorites = FavoritesStore::load(&store);
    assert_eq!(favorites.list(), vec!["Bangkok"]);
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Toggling a city not in the set twice restores the exact list.
    #[test]
    fn prop_toggle_twice_restores_membership(names in proptest::collection::vec("[A-Za-z ]{1,12}", 0..8)) {
        let mut store = MemoryStore::default();
        let mut favorites = FavoritesStore::load(&store);
        for name in &names {
            if let Some(id) = CityId::new(name) {
                if !favorites.contains(&id) {
                    favorites.toggle(&mut store, &id).unwrap();
                }
            }
        }
        let before = favorites.list();

        let probe = city("Probe City");
        prop_assume!(!favorites.contains(&probe));
        favorites.toggle(&mut store, &probe).unwrap();
        favorites.toggle(&mut store, &probe).unwrap();

        prop_assert_eq!(favorites.list(), before);
    }

    /// A reload always reflects the last persisted toggle.
    #[test]
    fn prop_reload_matches_live_set(names in proptest::collection::vec("[A-Za-z]{1,10}", 1..10)) {
        let mut store = MemoryStore::default();
        let mut favorites = FavoritesStore::load(&store);
        for name in &names {
            if let Some(id) = CityId::new(name) {
                favorites.toggle(&mut store, &id).unwrap();
            }
        }

        let reloaded = FavoritesStore::load(&store);
        prop_assert_eq!(reloaded.list(), favorites.list());
    }
}
