//! Favorites store: persisted ordered set of starred cities
//!
//! The set semantics live in `shared::FavoriteSet`; this store adds the
//! persistence contract on top of an injected `KeyValueStore`. There is no
//! module-level state: callers own the store and pass it where needed.

use shared::{CityId, FavoriteSet};

use crate::error::ClientResult;
use crate::storage::{KeyValueStore, FAVORITES_KEY};

/// Favorite cities plus their persistence behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesStore {
    set: FavoriteSet,
}

impl FavoritesStore {
    /// Load favorites from persistence.
    ///
    /// Fails soft: an absent or malformed entry yields an empty set and a
    /// warning, never an error to the caller.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let set = match store.get(FAVORITES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(names) => FavoriteSet::from_names(names),
                Err(err) => {
                    tracing::warn!(%err, "discarding malformed favorites entry");
                    FavoriteSet::new()
                }
            },
            None => FavoriteSet::new(),
        };
        Self { set }
    }

    /// Flip membership of `city` and persist the new set before returning.
    ///
    /// Returns whether the city is a favorite afterwards. If persisting
    /// fails the in-memory set is left unchanged.
    pub fn toggle<S: KeyValueStore>(
        &mut self,
        store: &mut S,
        city: &CityId,
    ) -> ClientResult<bool> {
        let mut next = self.set.clone();
        let is_favorite = next.toggle(city);
        Self::persist(store, &next)?;
        self.set = next;
        Ok(is_favorite)
    }

    pub fn contains(&self, city: &CityId) -> bool {
        self.set.contains(city)
    }

    /// City names in insertion order, for the sidebar list.
    pub fn list(&self) -> Vec<String> {
        self.set.iter().map(|c| c.as_str().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn persist<S: KeyValueStore>(store: &mut S, set: &FavoriteSet) -> ClientResult<()> {
        let names: Vec<&str> = set.iter().map(|c| c.as_str()).collect();
        let serialized = serde_json::to_string(&names)
            .map_err(|e| crate::error::ClientError::Storage(e.to_string()))?;
        store.set(FAVORITES_KEY, &serialized)
    }
}
