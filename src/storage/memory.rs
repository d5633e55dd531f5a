//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::items::DEFAULT_STATUS;
use crate::items::Item;

use super::CreateItemValues;
use super::Result;
use super::Storage;
use super::UpdateItemValues;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// All items in storage, keyed by ID
    items: Arc<Mutex<BTreeMap<i64, Item>>>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for Memory {
    async fn find_all_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.lock().await.values().rev().cloned().collect())
    }

    async fn find_single_item_by_id(&self, id: i64) -> Result<Option<Item>> {
        Ok(self.items.lock().await.get(&id).cloned())
    }

    async fn insert_item(&self, values: &CreateItemValues<'_>) -> Result<Item> {
        let mut items = self.items.lock().await;

        // rows are never removed, so the highest ID is the last one handed out
        let id = items.keys().next_back().map_or(1, |id| id + 1);
        let now = Utc::now().naive_utc();

        let item = Item {
            id,
            title: values.title.to_string(),
            description: values.description.to_string(),
            status: DEFAULT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };

        items.insert(item.id, item.clone());

        Ok(item)
    }

    async fn update_item(&self, id: i64, values: &UpdateItemValues<'_>) -> Result<bool> {
        let mut items = self.items.lock().await;

        let Some(item) = items.get_mut(&id) else {
            return Ok(false);
        };

        if let Some(title) = values.title {
            item.title = title.to_string();
        }

        if let Some(description) = values.description {
            item.description = description.to_string();
        }

        if let Some(status) = values.status {
            item.status = status.to_string();
        }

        item.updated_at = Utc::now().naive_utc();

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::items::DELETED_STATUS;

    use super::*;

    async fn insert(storage: &Memory, title: &str) -> Item {
        storage
            .insert_item(&CreateItemValues {
                title,
                description: "",
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let storage = Memory::new();

        assert_eq!(1, insert(&storage, "one").await.id);
        assert_eq!(2, insert(&storage, "two").await.id);
        assert_eq!(3, insert(&storage, "three").await.id);

        let ids = storage
            .find_all_items()
            .await
            .unwrap()
            .iter()
            .map(|item| item.id)
            .collect::<Vec<i64>>();
        assert_eq!(vec![3, 2, 1], ids);
    }

    #[tokio::test]
    async fn test_soft_delete_only_touches_status() {
        let storage = Memory::new();

        let item = insert(&storage, "one").await;

        let matched = storage
            .update_item(item.id, &UpdateItemValues::soft_delete())
            .await
            .unwrap();
        assert!(matched);

        let deleted = storage
            .find_single_item_by_id(item.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(DELETED_STATUS, deleted.status);
        assert_eq!(item.title, deleted.title);
        assert_eq!(item.description, deleted.description);
        assert_eq!(item.created_at, deleted.created_at);
        assert!(deleted.updated_at >= deleted.created_at);
        assert!(deleted.is_deleted());
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let storage = Memory::new();

        let matched = storage
            .update_item(42, &UpdateItemValues::soft_delete())
            .await
            .unwrap();
        assert!(!matched);
        assert!(storage.find_single_item_by_id(42).await.unwrap().is_none());
    }
}
