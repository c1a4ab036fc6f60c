//! Lifecycle transition endpoint tests: the engine contract and the
//! peripheral cascade over HTTP.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, error_code};

#[tokio::test]
async fn deploy_activates_the_asset_and_opens_an_assignment() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let body = app.deploy(asset_id, person_id).await;
    assert_eq!(body["data"]["primary"]["status"], "active");

    let (status, body) = app.get(&format!("/api/assets/{asset_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["open_assignment"]["person_id"],
        person_id.to_string()
    );
}

#[tokio::test]
async fn deploy_without_a_person_is_a_bad_request() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "deploy" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELD");
}

#[tokio::test]
async fn deploying_an_active_asset_conflicts() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;
    app.deploy(asset_id, person_id).await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "deploy", "person_id": person_id }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "INVALID_TRANSITION");
}

#[tokio::test]
async fn deploy_to_an_unknown_person_is_not_found() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "deploy", "person_id": Uuid::new_v4() }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "NOT_FOUND");
}

#[tokio::test]
async fn return_closes_the_assignment() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;
    app.deploy(asset_id, person_id).await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "return" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["primary"]["status"], "spare");

    let (_, body) = app.get(&format!("/api/assets/{asset_id}")).await;
    assert!(body["data"]["open_assignment"].is_null());
    assert!(body["data"]["assignments"][0]["end_date"].is_string());
}

#[tokio::test]
async fn move_requires_a_target_location() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "move" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "MISSING_FIELD");
}

#[tokio::test]
async fn move_relocates_without_changing_status() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let warehouse_id = app.seed_warehouse().await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "move", "target_location_id": warehouse_id }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["primary"]["status"], "spare");
    assert_eq!(
        body["data"]["primary"]["location_id"],
        warehouse_id.to_string()
    );
}

#[tokio::test]
async fn retired_assets_reject_further_transitions() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;

    let (status, _) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "retire" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "deploy", "person_id": person_id }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "INVALID_TRANSITION");
}

#[tokio::test]
async fn deploy_with_peripherals_reports_each_outcome() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let laptop = app.seed_asset(model_id, "AH-1001").await;
    let monitor = app.seed_asset(model_id, "AH-2001").await;

    let (status, body) = app
        .post(
            &format!("/api/assets/{laptop}/transition"),
            json!({
                "action": "deploy",
                "person_id": person_id,
                "peripherals": [monitor],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["primary"]["status"], "active");
    assert_eq!(body["data"]["peripherals"][0]["result"], "applied");
    assert_eq!(
        body["data"]["peripherals"][0]["asset"]["id"],
        monitor.to_string()
    );

    // The monitor is now linked to the laptop.
    let (_, body) = app.get(&format!("/api/assets/{monitor}")).await;
    assert_eq!(body["data"]["asset"]["status"], "active");
    assert_eq!(
        body["data"]["relationships"][0]["parent_asset_id"],
        laptop.to_string()
    );
}

#[tokio::test]
async fn return_cascades_to_peripherals_and_dissolves_the_bundle() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let laptop = app.seed_asset(model_id, "AH-1001").await;
    let monitor = app.seed_asset(model_id, "AH-2001").await;

    let (status, _) = app
        .post(
            &format!("/api/assets/{laptop}/transition"),
            json!({
                "action": "deploy",
                "person_id": person_id,
                "peripherals": [monitor],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(
            &format!("/api/assets/{laptop}/transition"),
            json!({ "action": "return" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["primary"]["status"], "spare");
    assert_eq!(body["data"]["peripherals"][0]["result"], "applied");

    let (_, body) = app.get(&format!("/api/assets/{monitor}")).await;
    assert_eq!(body["data"]["asset"]["status"], "spare");
    assert_eq!(
        body["data"]["relationships"].as_array().map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn transition_events_accumulate_newest_first() {
    let app = TestApp::new();
    let model_id = app.seed_model().await;
    let person_id = app.seed_person("Dana Reyes").await;
    let asset_id = app.seed_asset(model_id, "AH-1001").await;
    app.deploy(asset_id, person_id).await;

    let (status, _) = app
        .post(
            &format!("/api/assets/{asset_id}/transition"),
            json!({ "action": "return" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/assets/{asset_id}/events")).await;
    assert_eq!(status, StatusCode::OK);
    let events = body["data"].as_array().cloned().unwrap_or_default();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["action"], "return");
    assert_eq!(events[1]["action"], "deploy");
    assert_eq!(events[2]["action"], "created");
}
