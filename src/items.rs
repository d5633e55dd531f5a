use chrono::naive::NaiveDateTime;

/// Status given to new items by the storage
pub const DEFAULT_STATUS: &str = "Doing";

/// Status marking an item as soft-deleted
///
/// The row stays in storage, it is not filtered from reads
pub const DELETED_STATUS: &str = "Deleted";

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Item {
    /// Item ID, assigned by the storage
    pub id: i64,

    /// Title of the item
    pub title: String,

    /// Description of the item, can be empty
    pub description: String,

    /// Free-form status, see [`DELETED_STATUS`]
    pub status: String,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}

impl Item {
    /// Soft-deleted items keep their row but carry the deleted status
    pub fn is_deleted(&self) -> bool {
        self.status == DELETED_STATUS
    }
}
