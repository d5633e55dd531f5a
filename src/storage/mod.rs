//! All things related to the storage of items

use core::fmt;
use std::future::Future;

use sqlx::PgPool;

use crate::items::DELETED_STATUS;
use crate::items::Item;

#[cfg(test)]
pub use memory::Memory;
pub use postgres::Postgres;

#[cfg(test)]
mod memory;
mod postgres;

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// Any failure reported by the storage, with its own message
    Query(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Query(error) => write!(f, "{error}"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Storage configuration
pub enum Config {
    /// Detect configuration from environment
    DetectConfig,

    /// Use existing connection
    #[cfg_attr(not(feature = "postgres-tests"), allow(dead_code))]
    ExistingConnection(PgPool),

    /// Keep everything in memory
    #[cfg(test)]
    Memory,
}

/// Values to create an Item
pub struct CreateItemValues<'a> {
    /// Title of the item
    pub title: &'a str,

    /// Description of the item, can be empty
    pub description: &'a str,
}

/// Values to update an Item
///
/// Only the fields that are `Some` will be written
#[derive(Debug, Default)]
pub struct UpdateItemValues<'a> {
    /// New title
    pub title: Option<&'a str>,

    /// New description
    pub description: Option<&'a str>,

    /// New status
    pub status: Option<&'a str>,
}

impl UpdateItemValues<'_> {
    /// Values to mark an item as deleted, nothing else is touched
    pub fn soft_delete() -> Self {
        Self {
            status: Some(DELETED_STATUS),
            ..Self::default()
        }
    }
}

/// Storage with all supported operations
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find all items, newest ID first
    ///
    /// DOES NOT respect the soft-delete
    fn find_all_items(&self) -> impl Future<Output = Result<Vec<Item>>> + Send;

    /// Find a single item by its ID
    ///
    /// DOES NOT respect the soft-delete
    fn find_single_item_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Item>>> + Send;

    /// Create an item, the storage assigns the ID and timestamps
    fn insert_item(&self, values: &CreateItemValues<'_>)
    -> impl Future<Output = Result<Item>> + Send;

    /// Update an item by its ID, refreshing `updated_at`
    ///
    /// Returns `false` when no item has the ID, that is not an error
    fn update_item(
        &self,
        id: i64,
        values: &UpdateItemValues<'_>,
    ) -> impl Future<Output = Result<bool>> + Send;
}
