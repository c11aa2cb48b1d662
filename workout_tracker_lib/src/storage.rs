use std::collections::HashMap;

use crate::{workout::{WorkoutCollection, WorkoutRecord}, Result, TrackerError};

/// A string key-value store, e.g. the browser's local storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Process-local storage. Counts writes so callers can check when a slot was touched.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_owned(), value.to_owned());
        Self { slots, writes: 0 }
    }

    /// Number of `set` and `remove` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.writes += 1;
        self.slots.remove(key);
        Ok(())
    }
}

/// Keeps the whole workout collection as a JSON array in one storage slot.
pub struct WorkoutStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Overwrites the slot with the full collection.
    pub fn save(&mut self, collection: &WorkoutCollection) -> Result<()> {
        let json = serde_json::to_string(collection.as_slice()).map_err(TrackerError::Encode)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, workouts = collection.len(), "saved workouts");
        Ok(())
    }

    /// Stored metrics are kept as they are, not recomputed.
    pub fn load(&self) -> Result<WorkoutCollection> {
        let Some(json) = self.storage.get(&self.key)? else {
            return Ok(WorkoutCollection::new());
        };

        let workouts: Vec<WorkoutRecord> = serde_json::from_str(&json)
            .map_err(|err| TrackerError::Decode(err.to_string()))?;
        let collection = WorkoutCollection::try_from(workouts)
            .map_err(|err| TrackerError::Decode(err.to_string()))?;

        tracing::debug!(key = %self.key, workouts = collection.len(), "loaded workouts");
        Ok(collection)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(&self.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::DateTime;

    use super::*;
    use crate::{kind::Kind, workout::{Coords, WorkoutDetails, WorkoutId}};

    fn sample() -> WorkoutCollection {
        let ts = DateTime::parse_from_rfc3339("2026-10-19T08:30:00+03:00").unwrap();
        let mut collection = WorkoutCollection::new();
        collection.push(WorkoutRecord::running(WorkoutId::new("1"), Coords::new(41., 29.), 5., 30., 170., ts)).unwrap();
        collection.push(WorkoutRecord::cycling(WorkoutId::new("2"), Coords::new(41.5, 29.5), 20., 60., 300., ts)).unwrap();
        collection
    }

    #[test]
    fn missing_slot_loads_empty() {
        let store = WorkoutStore::new(MemoryStorage::new(), "workouts");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = WorkoutStore::new(MemoryStorage::new(), "workouts");
        let collection = sample();
        store.save(&collection).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, collection);
        let kinds: Vec<Kind> = loaded.iter().map(|w| w.kind()).collect();
        assert_eq!(kinds, [Kind::Running, Kind::Cycling]);
        assert!(store.storage().slot("workouts").unwrap().starts_with('['));
    }

    #[test]
    fn stored_metrics_are_not_recomputed() {
        let json = r#"[{
            "id": "42", "coords": [1, 2], "distance": 5, "duration": 30,
            "timestamp": "2026-10-19T08:30:00+03:00", "description": "Running session on 19.10.2026",
            "kind": "running", "cadence": 170, "pace": 99.5
        }]"#;
        let store = WorkoutStore::new(MemoryStorage::with_slot("workouts", json), "workouts");
        let loaded = store.load().unwrap();
        let run = loaded.get(&WorkoutId::new("42")).unwrap();
        assert_eq!(run.details(), &WorkoutDetails::Running { cadence: 170., pace: 99.5 });
        assert_eq!(run.coords(), Coords::new(1., 2.));
    }

    #[test]
    fn malformed_slot_is_a_decode_error() {
        let store = WorkoutStore::new(MemoryStorage::with_slot("workouts", "{not json"), "workouts");
        assert_matches!(store.load(), Err(TrackerError::Decode(_)));

        let dup = serde_json::to_string(&[sample().as_slice(), sample().as_slice()].concat()).unwrap();
        let store = WorkoutStore::new(MemoryStorage::with_slot("workouts", &dup), "workouts");
        assert_matches!(store.load(), Err(TrackerError::Decode(_)));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = WorkoutStore::new(MemoryStorage::new(), "workouts");
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.storage().slot("workouts").is_none());
        assert!(store.load().unwrap().is_empty());
    }
}
