mod common;

use common::{api_error, item_json, mock_client, spy_client, SpyTransport};
use fieldbase_client::{ClientError, Item, ItemData, ListOptions, Method};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Team {
    name: String,
    rating: u32,
}

// ── get_items ───────────────────────────────────────────────────

#[tokio::test]
async fn get_items_decodes_open_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/C1/items"))
        .and(query_param("sort", "-rating"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "results": 1,
            "items": [item_json("I1", "C1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let items: Vec<Item> = client
        .get_items("C1", &ListOptions::new().sort("-rating"))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, "I1");
    assert_eq!(item.collection_id, "C1");
    assert_eq!(item.database, "db_1");
    assert_eq!(item.created_by.as_deref(), Some("user_1"));
    assert_eq!(item.get_str("name"), Some("Falcons"));
    assert_eq!(item.get("rating"), Some(&json!(7)));
    assert!(!item.data.contains_key("_id"));
    assert!(!item.data.contains_key("created-on"));
}

#[tokio::test]
async fn get_items_decodes_selected_fields_only() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "items": [{ "_id": "i1", "name": "Falcons" }]
    }))]);
    let client = spy_client(&spy);

    let items: Vec<Item> = client
        .get_items("C1", &ListOptions::new().fields(["name"]))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "i1");
    assert_eq!(items[0].collection_id, "");
    assert_eq!(items[0].get_str("name"), Some("Falcons"));
    assert_eq!(spy.last().query["fields"], "name");
}

#[tokio::test]
async fn get_items_decodes_caller_shape() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "items": [item_json("I1", "C1"), item_json("I2", "C1")]
    }))]);
    let client = spy_client(&spy);

    let items: Vec<Item<Team>> = client.get_items("C1", &ListOptions::default()).await.unwrap();
    assert_eq!(items[1].id, "I2");
    assert_eq!(
        items[0].data,
        Team {
            name: "Falcons".into(),
            rating: 7
        }
    );
}

// ── get_item_by_id ──────────────────────────────────────────────

#[tokio::test]
async fn get_item_by_id_returns_item() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "item": item_json("I1", "C1")
    }))]);
    let client = spy_client(&spy);

    let item: Item<Team> = client.get_item_by_id("C1", "I1").await.unwrap().unwrap();
    assert_eq!(item.data.rating, 7);
    assert_eq!(spy.last().path, "/collections/C1/items/I1");
    assert_eq!(spy.last().method, Method::GET);
}

#[tokio::test]
async fn get_item_by_id_failure_is_none() {
    let spy = SpyTransport::scripted(vec![Err(api_error(400, json!({ "message": "Bad" })))]);
    let client = spy_client(&spy);

    let item: Option<Item> = client.get_item_by_id("C1", "I1").await.unwrap();
    assert!(item.is_none());
}

// ── create_item ─────────────────────────────────────────────────

#[tokio::test]
async fn create_item_passes_data_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/C1/items"))
        .and(body_json(json!({ "name": "Falcons", "rating": 7, "tags": ["a", "b"] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "success",
            "item": item_json("I1", "C1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let data = json!({ "name": "Falcons", "rating": 7, "tags": ["a", "b"] });
    let item: Item = client.create_item("C1", &data).await.unwrap();
    assert_eq!(item.id, "I1");
}

#[tokio::test]
async fn create_item_with_typed_data() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "item": item_json("I1", "C1")
    }))]);
    let client = spy_client(&spy);

    let team = Team {
        name: "Falcons".into(),
        rating: 7,
    };
    let item: Item<Team> = client.create_item("C1", &team).await.unwrap();
    assert_eq!(item.data, team);
    assert_eq!(spy.last().body, Some(json!({ "name": "Falcons", "rating": 7 })));
}

#[tokio::test]
async fn create_item_404_propagates() {
    let spy = SpyTransport::scripted(vec![Err(api_error(404, json!({ "message": "Invalid _id" })))]);
    let client = spy_client(&spy);

    let err = client
        .create_item::<ItemData, _>("C404", &json!({ "name": "x" }))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// ── patch_item / update_item ────────────────────────────────────

#[tokio::test]
async fn patch_item_uses_patch() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "item": item_json("I1", "C1")
    }))]);
    let client = spy_client(&spy);

    let item: Option<Item> = client
        .patch_item("C1", "I1", &json!({ "rating": 9 }))
        .await
        .unwrap();
    assert!(item.is_some());

    let request = spy.last();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/collections/C1/items/I1");
    assert_eq!(request.body, Some(json!({ "rating": 9 })));
}

#[tokio::test]
async fn update_item_uses_put() {
    let spy = SpyTransport::scripted(vec![Ok(json!({
        "status": "success",
        "item": item_json("I1", "C1")
    }))]);
    let client = spy_client(&spy);

    let item: Option<Item<Team>> = client
        .update_item(
            "C1",
            "I1",
            &Team {
                name: "Falcons".into(),
                rating: 7,
            },
        )
        .await
        .unwrap();
    assert!(item.is_some());
    assert_eq!(spy.last().method, Method::PUT);
}

#[tokio::test]
async fn patch_item_not_found_is_none() {
    let spy = SpyTransport::scripted(vec![
        Err(api_error(404, json!({}))),
        Err(api_error(400, json!({ "message": "Invalid _id value" }))),
    ]);
    let client = spy_client(&spy);

    let first: Option<Item> = client.patch_item("C1", "I9", &json!({ "a": 1 })).await.unwrap();
    let second: Option<Item> = client.update_item("C1", "I9", &json!({ "a": 1 })).await.unwrap();
    assert!(first.is_none());
    assert!(second.is_none());
}

#[tokio::test]
async fn patch_item_validation_failure_propagates_raw_body() {
    let error_body = json!({
        "message": "Validation failed",
        "errors": { "rating": "must be a number" }
    });
    let spy = SpyTransport::scripted(vec![Err(api_error(422, error_body.clone()))]);
    let client = spy_client(&spy);

    let err = client
        .patch_item::<ItemData, _>("C1", "I1", &json!({ "rating": "high" }))
        .await
        .unwrap_err();
    assert_eq!(err.body().unwrap().as_value(), &error_body);
}

// ── delete_item ─────────────────────────────────────────────────

#[tokio::test]
async fn delete_item_returns_count() {
    let spy = SpyTransport::scripted(vec![Ok(json!({ "status": "success", "itemsDeleted": 1 }))]);
    let client = spy_client(&spy);

    let summary = client.delete_item("C1", "I1").await.unwrap().unwrap();
    assert_eq!(summary.items_deleted, Some(1));
}

#[tokio::test]
async fn delete_item_server_error_propagates() {
    let spy = SpyTransport::scripted(vec![Err(api_error(500, json!({ "message": "disk full" })))]);
    let client = spy_client(&spy);

    let err = client.delete_item("C1", "I1").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
}
