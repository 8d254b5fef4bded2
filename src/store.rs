use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named, read-only flat-file resource store.
pub trait ResourceStore: Send + Sync {
    /// Returns the raw text for `name`, or `None` when it does not exist.
    fn read_file(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// The assets embedded in the library at compile time. Default store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledStore;

impl ResourceStore for BundledStore {
    fn read_file(&self, name: &str) -> Option<Cow<'_, str>> {
        let contents = match name {
            "Banks.csv" => include_str!("../assets/Banks.csv"),
            "Notes.csv" => include_str!("../assets/Notes.csv"),
            "Names.csv" => include_str!("../assets/Names.csv"),
            "SSIDS.csv" => include_str!("../assets/SSIDS.csv"),
            "CreditIssuers.csv" => include_str!("../assets/CreditIssuers.csv"),
            "brands.json" => include_str!("../assets/brands.json"),
            "websites.csv" => include_str!("../assets/websites.csv"),
            "brandsites.csv" => include_str!("../assets/brandsites.csv"),
            "english.txt" => include_str!("../assets/english.txt"),
            _ => return None,
        };
        Some(Cow::Borrowed(contents))
    }
}

/// In-memory store for fixture datasets in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    files: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style file registration.
    pub fn with_file(mut self, name: &str, contents: &str) -> Self {
        self.files.insert(name.to_string(), contents.to_string());
        self
    }

    /// Parses a `{"file name": "contents"}` JSON object into a store.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ResourceStore for MemoryStore {
    fn read_file(&self, name: &str) -> Option<Cow<'_, str>> {
        self.files
            .get(name)
            .map(|contents| Cow::Borrowed(contents.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_store_serves_known_names() {
        let store = BundledStore;
        assert!(store.read_file("Banks.csv").is_some());
        assert!(store.read_file("brands.json").is_some());
        assert!(store.read_file("english.txt").is_some());
    }

    #[test]
    fn bundled_store_rejects_unknown_names() {
        assert!(BundledStore.read_file("Missing.csv").is_none());
    }

    #[test]
    fn memory_store_round_trips_contents() {
        let store = MemoryStore::new().with_file("Banks.csv", "Chase,\nCitibank");
        assert_eq!(store.read_file("Banks.csv").as_deref(), Some("Chase,\nCitibank"));
        assert!(store.read_file("Notes.csv").is_none());
    }

    #[test]
    fn memory_store_parses_json_fixture() {
        let store = MemoryStore::from_json(r#"{"Names.csv": "Jane Doe,\nJohn Smith"}"#)
            .expect("fixture should parse");
        assert_eq!(
            store.read_file("Names.csv").as_deref(),
            Some("Jane Doe,\nJohn Smith")
        );
    }
}
