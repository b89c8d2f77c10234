//! Router-level integration tests over an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use sazon_core::service::RecipeService;
use sazon_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::recipe_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  recipe_router(RecipeService::new(Arc::new(store)))
}

fn paella_json() -> Value {
  json!({
    "title": "Paella Valenciana",
    "ingredients": ["Arroz", "Pollo", "Mariscos"],
    "preparationSteps": ["1. Cocer el arroz", "2. Agregar los mariscos"],
    "authorName": "Jorge Rauch",
    "authorType": "JUDGE",
    "season": 5
  })
}

/// Fire one request at the router and return the status plus the parsed JSON
/// body (`Value::Null` for empty bodies).
async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<&Value>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(v) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
    .await
    .unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_201_with_body() {
  let app = app().await;
  let (status, body) = send(&app, "POST", "/recipes", Some(&paella_json())).await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["title"], "Paella Valenciana");
  assert_eq!(body["authorType"], "JUDGE");
  // A judge's season is pinned to 0 even though the draft said 5.
  assert_eq!(body["season"], 0);
  assert_eq!(body["ingredients"], json!(["Arroz", "Pollo", "Mariscos"]));
}

#[tokio::test]
async fn create_duplicate_title_is_400() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let (status, body) = send(&app, "POST", "/recipes", Some(&paella_json())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("Paella Valenciana"));
}

#[tokio::test]
async fn create_participant_without_season_is_400() {
  let app = app().await;
  let mut draft = paella_json();
  draft["authorType"] = json!("PARTICIPANT");
  draft["season"] = json!(0);

  let (status, body) = send(&app, "POST", "/recipes", Some(&draft)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_participant_keeps_season() {
  let app = app().await;
  let mut draft = paella_json();
  draft["authorType"] = json!("PARTICIPANT");
  draft["season"] = json!(3);

  let (status, body) = send(&app, "POST", "/recipes", Some(&draft)).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["season"], 3);
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_every_recipe() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let mut other = paella_json();
  other["title"] = json!("Gazpacho");
  send(&app, "POST", "/recipes", Some(&other)).await;

  let (status, body) = send(&app, "GET", "/recipes", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_by_title_decodes_the_path() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let (status, body) =
    send(&app, "GET", "/recipes/Paella%20Valenciana", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["title"], "Paella Valenciana");
}

#[tokio::test]
async fn get_by_title_missing_is_404() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/recipes/Fabada", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn list_by_author_type_filters() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let mut participant = paella_json();
  participant["title"] = json!("Fideua");
  participant["authorType"] = json!("PARTICIPANT");
  participant["season"] = json!(2);
  send(&app, "POST", "/recipes", Some(&participant)).await;

  let (status, body) = send(&app, "GET", "/recipes/type/JUDGE", None).await;
  assert_eq!(status, StatusCode::OK);
  let list = body.as_array().unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0]["title"], "Paella Valenciana");

  let (status, body) = send(&app, "GET", "/recipes/type/VIEWER", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_by_author_type_rejects_unknown_values() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/recipes/type/SOMMELIER", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("SOMMELIER"));
}

#[tokio::test]
async fn list_by_season_filters() {
  let app = app().await;
  let mut participant = paella_json();
  participant["title"] = json!("Fideua");
  participant["authorType"] = json!("PARTICIPANT");
  participant["season"] = json!(3);
  send(&app, "POST", "/recipes", Some(&participant)).await;

  let (status, body) = send(&app, "GET", "/recipes/season/3", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (status, body) = send(&app, "GET", "/recipes/season/4", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_by_season_rejects_non_numbers() {
  let app = app().await;
  let (status, _) = send(&app, "GET", "/recipes/season/three", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_by_ingredient_is_case_insensitive() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await; // Arroz

  let mut shouting = paella_json();
  shouting["title"] = json!("Arroz Negro");
  shouting["ingredients"] = json!(["ARROZ", "Sepia"]);
  send(&app, "POST", "/recipes", Some(&shouting)).await;

  let (status, body) = send(&app, "GET", "/recipes/ingredient/Arroz", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_returns_200_with_new_fields() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let mut draft = paella_json();
  draft["title"] = json!("Paella Mixta");
  draft["authorName"] = json!("Ana");

  let (status, body) =
    send(&app, "PUT", "/recipes/Paella%20Valenciana", Some(&draft)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["title"], "Paella Mixta");
  assert_eq!(body["authorName"], "Ana");

  let (status, _) = send(&app, "GET", "/recipes/Paella%20Valenciana", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_is_404() {
  let app = app().await;
  let (status, _) =
    send(&app, "PUT", "/recipes/Fabada", Some(&paella_json())).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rename_to_taken_title_is_400() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let mut other = paella_json();
  other["title"] = json!("Gazpacho");
  send(&app, "POST", "/recipes", Some(&other)).await;

  let mut draft = paella_json();
  draft["title"] = json!("Gazpacho");
  let (status, body) =
    send(&app, "PUT", "/recipes/Paella%20Valenciana", Some(&draft)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("Gazpacho"));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_204_then_404() {
  let app = app().await;
  send(&app, "POST", "/recipes", Some(&paella_json())).await;

  let (status, body) =
    send(&app, "DELETE", "/recipes/Paella%20Valenciana", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);
  assert_eq!(body, Value::Null);

  let (status, _) = send(&app, "GET", "/recipes/Paella%20Valenciana", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_is_404() {
  let app = app().await;
  let (status, _) = send(&app, "DELETE", "/recipes/Fabada", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
