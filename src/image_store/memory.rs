use async_trait::async_trait;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::image_store::{
    error::{Result, StoreError},
    ImageRecord, ImageStore,
};

/// In-memory image store with the same semantics as the PostgreSQL backend
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    records: RwLock<BTreeMap<String, String>>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`
    pub fn with_records(records: impl IntoIterator<Item = ImageRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.name, record.url))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn put(&self, name: &str, url: &str) -> Result<()> {
        let mut records = self.records.write().await;
        match records.entry(name.to_string()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                Ok(())
            }
        }
    }

    async fn get(&self, name: &str) -> Result<String> {
        self.records
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.records.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let store = InMemoryImageStore::new();
        store.put("cat", "http://x/y.png").await.unwrap();
        assert_eq!(store.get("cat").await.unwrap(), "http://x/y.png");
    }

    #[tokio::test]
    async fn test_get_unknown_name() {
        let store = InMemoryImageStore::new();
        let err = store.get("ghost").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("ghost".to_string()));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let store = InMemoryImageStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_names() {
        let store = InMemoryImageStore::new();
        for name in ["dog", "cat", "bird"] {
            store.put(name, &format!("http://img/{}.png", name)).await.unwrap();
        }

        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["bird", "cat", "dog"]);
    }

    #[tokio::test]
    async fn test_duplicate_put_keeps_first_url() {
        let store = InMemoryImageStore::new();
        store.put("cat", "http://first").await.unwrap();

        let err = store.put("cat", "http://second").await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("cat".to_string()));
        assert_eq!(store.get("cat").await.unwrap(), "http://first");
    }

    #[tokio::test]
    async fn test_with_records() {
        let store = InMemoryImageStore::with_records(vec![ImageRecord::new("cat", "http://c")]);
        assert_eq!(store.get("cat").await.unwrap(), "http://c");
        assert_eq!(store.list().await.unwrap(), vec!["cat"]);
    }
}
