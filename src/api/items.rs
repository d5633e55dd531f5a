//! Items API endpoints
//!
//! Everything related to the items management

use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::items::Item;
use crate::storage::CreateItemValues;
use crate::storage::Storage;
use crate::storage::UpdateItemValues;

use super::Error;
use super::Form;
use super::PathParameters;
use super::QueryParameters;
use super::Success;

/// Item response going to the user
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    /// Item ID
    pub id: i64,

    /// Title of the item
    pub title: String,

    /// Description of the item
    pub description: String,

    /// Free-form status, `Deleted` for soft-deleted items
    pub status: String,

    /// Creation date
    pub created_at: NaiveDateTime,

    /// Last updated at
    pub updated_at: NaiveDateTime,
}

impl ItemResponse {
    /// Create a response from an [`Item`](Item)
    fn from_item(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            status: item.status,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }

    /// Create a response from multiple [`Item`](Item)s
    fn from_item_multiple(mut items: Vec<Item>) -> Vec<Self> {
        items.drain(..).map(Self::from_item).collect::<Vec<Self>>()
    }
}

/// Paging of the list, accepted but not applied
#[derive(Debug, Deserialize)]
pub struct Paging {
    page: Option<i64>,
    limit: Option<i64>,
}

/// List all items, newest first
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/v1/items?page=1
/// ```
///
/// Response:
/// ```json
/// { "data": [ { "id": 2, "title": "Walk the dog", ... }, { "id": 1, ... } ] }
/// ```
pub async fn list<S: Storage>(
    Extension(storage): Extension<S>,
    QueryParameters(paging): QueryParameters<Paging>,
) -> Result<Success<Vec<ItemResponse>>, Error> {
    tracing::debug!(
        "Listing items (page: {:?}, limit: {:?})",
        paging.page,
        paging.limit
    );

    let items = storage
        .find_all_items()
        .await
        .map_err(Error::bad_request)?;

    Ok(Success::ok(ItemResponse::from_item_multiple(items)))
}

/// Get single item
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/v1/items/1
/// ```
///
/// Response:
/// ```json
/// { "data": { "id": 1, "title": "Buy milk", "status": "Doing", ... } }
/// ```
pub async fn single<S: Storage>(
    Extension(storage): Extension<S>,
    PathParameters(item_id): PathParameters<i64>,
) -> Result<Success<ItemResponse>, Error> {
    let item = storage
        .find_single_item_by_id(item_id)
        .await
        .map_err(Error::bad_request)?
        .ok_or_else(|| Error::bad_request("Item not found"))?;

    if item.is_deleted() {
        tracing::debug!("Item {item_id} is soft-deleted");
    }

    Ok(Success::ok(ItemResponse::from_item(item)))
}

#[derive(Debug, Deserialize)]
pub struct CreateItemForm {
    title: String,
    #[serde(default)]
    description: String,
}

/// Create an item
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "title": "Buy milk", "description": "Full fat" }' \
///     http://localhost:3000/v1/items
/// ```
///
/// Response:
/// ```json
/// { "data": 1 }
/// ```
pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    Form(form): Form<CreateItemForm>,
) -> Result<Success<i64>, Error> {
    let values = CreateItemValues {
        title: &form.title,
        description: &form.description,
    };

    let item = storage
        .insert_item(&values)
        .await
        .map_err(Error::bad_request)?;

    tracing::debug!("Created item {}", item.id);

    Ok(Success::ok(item.id))
}

/// Missing and `null` fields are left alone
#[derive(Debug, Deserialize)]
pub struct UpdateItemForm {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

/// Update an item
///
/// Request:
/// ```sh
/// curl -v -X PATCH -H 'Content-Type: application/json' \
///     -d '{ "status": "Done" }' \
///     http://localhost:3000/v1/items/1
/// ```
///
/// Response:
/// ```json
/// { "data": true }
/// ```
pub async fn update<S: Storage>(
    Extension(storage): Extension<S>,
    PathParameters(item_id): PathParameters<i64>,
    Form(form): Form<UpdateItemForm>,
) -> Result<Success<bool>, Error> {
    let values = UpdateItemValues {
        title: form.title.as_deref(),
        description: form.description.as_deref(),
        // an empty status never overwrites the current one
        status: form.status.as_deref().filter(|status| !status.is_empty()),
    };

    let matched = storage
        .update_item(item_id, &values)
        .await
        .map_err(Error::bad_request)?;

    if !matched {
        tracing::debug!("Item {item_id} not found, nothing updated");
    }

    Ok(Success::ok(true))
}

/// Soft-delete an item
///
/// Only the status changes, the item stays available
///
/// Request:
/// ```sh
/// curl -v -X DELETE http://localhost:3000/v1/items/1
/// ```
///
/// Response:
/// ```json
/// { "message": true }
/// ```
pub async fn delete<S: Storage>(
    Extension(storage): Extension<S>,
    PathParameters(item_id): PathParameters<i64>,
) -> Result<Success<bool>, Error> {
    let matched = storage
        .update_item(item_id, &UpdateItemValues::soft_delete())
        .await
        .map_err(Error::bad_request)?;

    if !matched {
        tracing::debug!("Item {item_id} not found, nothing deleted");
    }

    Ok(Success::message(true))
}
