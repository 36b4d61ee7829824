//! Persisted favorites list
//!
//! The list is read lazily from a [`KeyValueStore`] on first access and
//! rewritten in full on every mutation. The in-memory copy is only replaced
//! after a successful write, so a failed save leaves the visible list matching
//! what is on disk.

use ideas_core::prelude::*;
use ideas_core::{to_pretty_json, IdeaRecord};

use crate::storage::KeyValueStore;

/// Storage key the favorites list lives under
pub const FAVORITES_KEY: &str = "startup-ideas-favorites";

/// Outcome of adding a record to favorites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Record was prepended and saved
    Added,
    /// A favorite with the same title already exists; nothing changed
    Duplicate,
}

pub struct FavoritesStore {
    storage: Box<dyn KeyValueStore>,
    cache: Option<Vec<IdeaRecord>>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            cache: None,
        }
    }

    /// Current favorites, reading from storage on first use
    pub fn list(&mut self) -> &[IdeaRecord] {
        if self.cache.is_none() {
            self.cache = Some(self.read_from_storage());
        }
        self.cache.as_deref().unwrap_or_default()
    }

    pub fn len(&mut self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.list().is_empty()
    }

    /// Whether a favorite with the same title as `record` exists
    pub fn contains(&mut self, record: &IdeaRecord) -> bool {
        self.list().iter().any(|f| f.same_idea(record))
    }

    /// Replace the whole list and persist it
    pub fn save(&mut self, list: Vec<IdeaRecord>) -> Result<()> {
        let json = to_pretty_json(&list)?;
        self.storage.set(FAVORITES_KEY, &json)?;
        debug!("Saved {} favorites", list.len());
        self.cache = Some(list);
        Ok(())
    }

    /// Prepend `record` unless a favorite with the same title exists
    pub fn add(&mut self, record: IdeaRecord) -> Result<AddOutcome> {
        if self.contains(&record) {
            debug!("Favorite already present: {}", record.idea);
            return Ok(AddOutcome::Duplicate);
        }

        let mut updated = Vec::with_capacity(self.len() + 1);
        updated.push(record);
        updated.extend_from_slice(self.list());
        self.save(updated)?;
        Ok(AddOutcome::Added)
    }

    /// Remove the favorite at `index`, returning it.
    ///
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Result<Option<IdeaRecord>> {
        let current = self.list();
        let Some(removed) = current.get(index).cloned() else {
            return Ok(None);
        };

        let updated: Vec<IdeaRecord> = current
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r.clone())
            .collect();
        self.save(updated)?;
        Ok(Some(removed))
    }

    /// Persist an empty list
    pub fn clear(&mut self) -> Result<()> {
        self.save(Vec::new())
    }

    /// Indented JSON of the current favorites, as written by export
    pub fn to_json(&mut self) -> Result<String> {
        to_pretty_json(self.list())
    }

    /// Read favorites, treating a missing or unparsable value as empty
    fn read_from_storage(&self) -> Vec<IdeaRecord> {
        let raw = match self.storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {}", e);
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<IdeaRecord>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                debug!("Ignoring unparsable favorites: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore, MockKeyValueStore};
    use tempfile::tempdir;

    fn memory_store() -> FavoritesStore {
        FavoritesStore::new(Box::new(MemoryStore::new()))
    }

    fn record(title: &str) -> IdeaRecord {
        IdeaRecord::new(title, format!("{} summary", title))
    }

    #[test]
    fn test_empty_storage_is_empty_list() {
        let mut store = memory_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_unparsable_storage_is_empty_list() {
        let storage = MemoryStore::new().with_value(FAVORITES_KEY, "{definitely not json");
        let mut store = FavoritesStore::new(Box::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_array_storage_is_empty_list() {
        let storage = MemoryStore::new().with_value(FAVORITES_KEY, r#"{"idea": "x"}"#);
        let mut store = FavoritesStore::new(Box::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_stored_untitled_record_survives_next_save() {
        let storage =
            MemoryStore::new().with_value(FAVORITES_KEY, r#"[{"summary": "kept"}, {"idea": null}]"#);
        let mut store = FavoritesStore::new(Box::new(storage));
        assert_eq!(store.len(), 2);

        store.add(record("new")).unwrap();

        let titles: Vec<&str> = store.list().iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["new", "Untitled idea", "Untitled idea"]);
        assert_eq!(store.list()[1].summary, "kept");
    }

    #[test]
    fn test_add_prepends() {
        let mut store = memory_store();
        store.add(record("first")).unwrap();
        store.add(record("second")).unwrap();

        let titles: Vec<&str> = store.list().iter().map(|r| r.idea.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let mut store = memory_store();

        assert_eq!(store.add(record("same")).unwrap(), AddOutcome::Added);
        assert_eq!(
            store.add(IdeaRecord::new("same", "different summary")).unwrap(),
            AddOutcome::Duplicate
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].summary, "same summary");
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut store = memory_store();
        store
            .save(vec![record("a"), record("b"), record("c")])
            .unwrap();

        let removed = store.remove(1).unwrap();

        assert_eq!(removed, Some(record("b")));
        assert_eq!(store.list(), &[record("a"), record("c")]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut store = memory_store();
        store.save(vec![record("a")]).unwrap();

        assert_eq!(store.remove(5).unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let temp = tempdir().unwrap();
        let mut store = FavoritesStore::new(Box::new(FileStore::new(temp.path())));
        store.add(record("a")).unwrap();

        store.clear().unwrap();

        assert!(store.is_empty());
        let on_disk =
            std::fs::read_to_string(temp.path().join(format!("{}.json", FAVORITES_KEY))).unwrap();
        assert_eq!(on_disk, "[]");
    }

    #[test]
    fn test_roundtrip_through_file_store() {
        let temp = tempdir().unwrap();
        let favorites = vec![record("one"), IdeaRecord::new("two", ""), record("three")];

        {
            let mut store = FavoritesStore::new(Box::new(FileStore::new(temp.path())));
            store.save(favorites.clone()).unwrap();
        }

        let mut reloaded = FavoritesStore::new(Box::new(FileStore::new(temp.path())));
        assert_eq!(reloaded.list(), favorites.as_slice());
    }

    #[test]
    fn test_read_is_lazy() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some(r#"[{"idea": "stored", "summary": ""}]"#.to_string())));

        let mut store = FavoritesStore::new(Box::new(storage));
        assert_eq!(store.list()[0].idea, "stored");
        // Second access is served from the cache
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_error_is_empty_list() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_get()
            .returning(|_| Err(Error::storage("permission denied")));

        let mut store = FavoritesStore::new(Box::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_keeps_previous_list() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .returning(|_, _| Err(Error::storage("quota exceeded")));

        let mut store = FavoritesStore::new(Box::new(storage));
        let err = store.add(record("a")).unwrap_err();

        assert!(matches!(err, Error::Storage { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_writes_indented_json_under_key() {
        let mut storage = MockKeyValueStore::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .withf(|key, value| key == FAVORITES_KEY && value.contains("\n  {"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut store = FavoritesStore::new(Box::new(storage));
        store.add(record("a")).unwrap();
    }
}
