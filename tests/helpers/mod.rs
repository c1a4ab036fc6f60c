//! Shared helpers for the HTTP integration tests.
//!
//! Every test runs the full axum application over the in-memory
//! inventory, so requests exercise routing, extractors, services and
//! the transition engine without a database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use assethub_api::{AppState, Registries, build_app};
use assethub_core::config::AppConfig;
use assethub_database::MemoryInventory;

/// A fully wired application instance for one test.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryInventory::new());
        let state = AppState::build(AppConfig::default(), Registries::memory(store));
        Self {
            router: build_app(state),
        }
    }

    /// Send a request and decode the JSON body (Null for empty bodies).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request should be routed");
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };

        (status, value)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, None).await
    }

    /// Seed an asset type + model through the API, returning the model id.
    pub async fn seed_model(&self) -> Uuid {
        let (status, body) = self
            .post("/api/asset-types", json!({ "name": "Laptop" }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "asset type: {body}");
        let type_id = id_of(&body);

        let (status, body) = self
            .post(
                "/api/asset-models",
                json!({
                    "manufacturer": "Lenovo",
                    "model_number": "ThinkPad T14",
                    "asset_type_id": type_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "asset model: {body}");
        id_of(&body)
    }

    /// Seed a warehouse organisation unit, returning its id.
    pub async fn seed_warehouse(&self) -> Uuid {
        let (status, body) = self
            .post(
                "/api/organisation-units",
                json!({ "name": "Central Warehouse", "category": "warehouse" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "warehouse: {body}");
        id_of(&body)
    }

    /// Seed a person, returning their id.
    pub async fn seed_person(&self, name: &str) -> Uuid {
        let (status, body) = self
            .post("/api/people", json!({ "full_name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "person: {body}");
        id_of(&body)
    }

    /// Seed a spare asset of the given model, returning its id.
    pub async fn seed_asset(&self, model_id: Uuid, tag: &str) -> Uuid {
        let (status, body) = self
            .post(
                "/api/assets",
                json!({ "asset_tag": tag, "asset_model_id": model_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "asset: {body}");
        id_of(&body)
    }

    /// Deploy an asset to a person and assert it succeeded.
    pub async fn deploy(&self, asset_id: Uuid, person_id: Uuid) -> Value {
        let (status, body) = self
            .post(
                &format!("/api/assets/{asset_id}/transition"),
                json!({ "action": "deploy", "person_id": person_id }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "deploy: {body}");
        body
    }
}

/// Extract the `data.id` field of a success envelope.
pub fn id_of(body: &Value) -> Uuid {
    body["data"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("no data.id in {body}"))
}

/// Extract the `error` code of an error envelope.
pub fn error_code(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_else(|| panic!("no error code in {body}"))
}
