//! Favorite city set semantics
//!
//! `FavoriteSet` is the pure, ordered-set half of the favorites feature;
//! persistence lives with the client store that owns a copy of it.

use serde::{Deserialize, Serialize};

use crate::types::CityId;

/// Ordered set of favorited cities. Insertion order is preserved, entries
/// are unique under city-name normalization, and removal never reorders the
/// remaining entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<CityId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw names, dropping invalid entries and duplicates
    /// while keeping first-seen order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            if let Some(city) = CityId::new(name.as_ref()) {
                if !set.contains(&city) {
                    set.0.push(city);
                }
            }
        }
        set
    }

    pub fn contains(&self, city: &CityId) -> bool {
        self.0.contains(city)
    }

    /// Flip membership of `city`: remove it if present, append it otherwise.
    /// Returns the resulting membership.
    pub fn toggle(&mut self, city: &CityId) -> bool {
        if let Some(index) = self.0.iter().position(|c| c == city) {
            self.0.remove(index);
            false
        } else {
            self.0.push(city.clone());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
