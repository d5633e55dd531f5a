//! All API endpoint setup

use axum::Router;
use axum::routing::get;

pub use request::Form;
pub use request::PathParameters;
pub use request::QueryParameters;
pub use response::Error;
pub use response::Success;

use crate::storage::Storage;

mod items;
mod ping;
mod request;
mod response;

/// Get the Axum router for all API routes
pub fn router<S: Storage>() -> Router {
    let items = Router::new()
        .route("/items", get(items::list::<S>).post(items::create::<S>))
        .route(
            "/items/{item}",
            get(items::single::<S>)
                .patch(items::update::<S>)
                .delete(items::delete::<S>),
        );

    Router::new()
        .nest("/v1", items)
        .route("/ping", get(ping::ping))
}
