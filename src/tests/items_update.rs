use axum::http::StatusCode;
use serde_json::Value;

use crate::tests::helper;

#[tokio::test]
async fn test_update_status_only() {
    let mut app = helper::setup_test_app().await;

    let id = helper::create_item(&mut app, "Walk the dog", "Around the block").await;

    let payload = helper::payload(&[("status", "Done")]);
    let (status_code, updated, _) = helper::maybe_update_item(&mut app, id, &payload).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(true), updated);

    let (_, item, _) = helper::single_item(&mut app, id).await;
    let item = item.unwrap();
    assert_eq!("Done".to_string(), item.status);
    assert_eq!("Walk the dog".to_string(), item.title);
    assert_eq!("Around the block".to_string(), item.description);
}

#[tokio::test]
async fn test_update_title_only() {
    let mut app = helper::setup_test_app().await;

    let id = helper::create_item(&mut app, "Walk the dog", "Around the block").await;

    let payload = helper::payload(&[("title", "Walk the cat")]);
    let (status_code, _, _) = helper::maybe_update_item(&mut app, id, &payload).await;
    assert_eq!(StatusCode::OK, status_code);

    let (_, item, _) = helper::single_item(&mut app, id).await;
    let item = item.unwrap();
    assert_eq!("Walk the cat".to_string(), item.title);
    assert_eq!("Around the block".to_string(), item.description);
    assert_eq!("Doing".to_string(), item.status);
}

#[tokio::test]
async fn test_update_explicit_empty_and_null() {
    let mut app = helper::setup_test_app().await;

    let id = helper::create_item(&mut app, "Walk the dog", "Around the block").await;

    // empty description is written, null title and empty status are not
    let mut payload = helper::payload(&[("description", ""), ("status", "")]);
    payload.insert("title".to_string(), Value::Null);

    let (status_code, _, _) = helper::maybe_update_item(&mut app, id, &payload).await;
    assert_eq!(StatusCode::OK, status_code);

    let (_, item, _) = helper::single_item(&mut app, id).await;
    let item = item.unwrap();
    assert_eq!("Walk the dog".to_string(), item.title);
    assert_eq!(String::new(), item.description);
    assert_eq!("Doing".to_string(), item.status);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let mut app = helper::setup_test_app().await;

    let payload = helper::payload(&[("title", "Walk the cat")]);
    let (status_code, updated, _) = helper::maybe_update_item(&mut app, 42, &payload).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some(true), updated);

    let (status_code, _, _) = helper::single_item(&mut app, 42).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
}

#[tokio::test]
async fn test_update_invalid_input() {
    let mut app = helper::setup_test_app().await;

    let id = helper::create_item(&mut app, "Walk the dog", "").await;

    let payload = helper::payload(&[("title", "Walk the cat")]);
    let (status_code, _, error) = helper::maybe_update_item_with_str(&mut app, "abc", &payload).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!("Invalid path parameter".to_string(), error.unwrap().error);

    let mut payload = helper::payload(&[]);
    payload.insert("status".to_string(), Value::Bool(true));
    let (status_code, _, error) = helper::maybe_update_item(&mut app, id, &payload).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!("Data error".to_string(), error.unwrap().error);

    let (_, item, _) = helper::single_item(&mut app, id).await;
    assert_eq!("Walk the dog".to_string(), item.unwrap().title);
}
