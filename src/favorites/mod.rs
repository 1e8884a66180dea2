//! Favorite recipes persisted to a key-value store.
//!
//! The registry reads the stored set once when it is created and writes the
//! full set back after every toggle. Storage problems never surface as
//! errors to the caller: a missing or corrupt value loads as an empty set,
//! and failed writes are logged and dropped.

use crate::model::RecipeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Ordered set of favorite recipe ids.
///
/// Serializes as a JSON array of ids, e.g. `[2,5]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<RecipeId>);

impl FavoriteSet {
    pub fn contains(&self, id: RecipeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.0.iter().copied()
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle(&mut self, id: RecipeId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }
}

impl FromIterator<RecipeId> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = RecipeId>>(iter: T) -> Self {
        FavoriteSet(iter.into_iter().collect())
    }
}

/// Favorites bound to the store they persist to.
pub struct FavoritesRegistry<S: KeyValueStore> {
    store: S,
    key: String,
    favorites: FavoriteSet,
}

impl<S: KeyValueStore> FavoritesRegistry<S> {
    /// Loads the favorite set stored under `key`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let favorites = read_favorites(&store, &key);
        tracing::debug!(key = %key, count = favorites.len(), "loaded favorites");
        FavoritesRegistry {
            store,
            key,
            favorites,
        }
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flips membership of `id` and persists the whole set.
    pub fn toggle(&mut self, id: RecipeId) -> &FavoriteSet {
        let added = self.favorites.toggle(id);
        tracing::debug!(id, added, "toggled favorite");
        self.persist();
        &self.favorites
    }

    fn persist(&mut self) {
        let value = match serde_json::to_string(&self.favorites) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize favorites");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &value) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist favorites");
        }
    }
}

fn read_favorites<S: KeyValueStore>(store: &S, key: &str) -> FavoriteSet {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FavoriteSet::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read favorites, starting empty");
            return FavoriteSet::default();
        }
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "corrupt favorites value, starting empty");
        FavoriteSet::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "recipe-favorites";

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_missing_value_is_empty() {
        let registry = FavoritesRegistry::load(MemoryStore::default(), KEY);
        assert!(registry.favorites().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        for raw in ["not json", "{\"a\":1}", "[1, \"two\"]", "[-3]", ""] {
            let mut store = MemoryStore::default();
            store.set(KEY, raw).unwrap();
            let registry = FavoritesRegistry::load(store, KEY);
            assert!(registry.favorites().is_empty(), "value {raw:?} should load empty");
        }
    }

    #[test]
    fn test_load_existing_value() {
        let mut store = MemoryStore::default();
        store.set(KEY, "[5,2]").unwrap();
        let registry = FavoritesRegistry::load(store, KEY);

        assert!(registry.is_favorite(2));
        assert!(registry.is_favorite(5));
        assert!(!registry.is_favorite(1));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut registry = FavoritesRegistry::load(MemoryStore::default(), KEY);

        let favorites = registry.toggle(2);
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(registry.store().get(KEY).unwrap().as_deref(), Some("[2]"));

        let favorites = registry.toggle(2);
        assert!(favorites.is_empty());
        assert_eq!(registry.store().get(KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut store = MemoryStore::default();
        store.set(KEY, "[1,3]").unwrap();
        let mut registry = FavoritesRegistry::load(store, KEY);
        let original = registry.favorites().clone();

        for id in [1, 2, 3] {
            registry.toggle(id);
            registry.toggle(id);
            assert_eq!(registry.favorites(), &original);
        }
    }

    #[test]
    fn test_persisted_set_survives_reload() {
        let mut registry = FavoritesRegistry::load(MemoryStore::default(), KEY);
        registry.toggle(7);
        registry.toggle(3);

        let reloaded = FavoritesRegistry::load(registry.store().clone(), KEY);
        assert_eq!(reloaded.favorites().iter().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut registry = FavoritesRegistry::load(ReadOnlyStore(MemoryStore::default()), KEY);
        registry.toggle(4);
        assert!(registry.is_favorite(4));
    }
}
