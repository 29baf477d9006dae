// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the REST surface, driven through the router
//! with an isolated temp database and a scripted AI gateway.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use strategist_core::{AiGateway, GeneratedIdea};
use strategist_gateway::{build_router, AppState};
use strategist_test_utils::{temp_database, MockGateway};
use tower::ServiceExt;

async fn test_app() -> (Router, Arc<MockGateway>, tempfile::TempDir) {
    let (db, dir) = temp_database().await;
    let mock = Arc::new(MockGateway::new());
    let state = AppState {
        db: Arc::new(db),
        ai: Some(mock.clone() as Arc<dyn AiGateway>),
        recent_limit: 5,
        start_time: std::time::Instant::now(),
    };
    (build_router(state), mock, dir)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes) }))
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _mock, _dir) = test_app().await;
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn platform_crud_with_form_coerced_numbers() {
    let (app, _mock, _dir) = test_app().await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/platforms",
        Some(json!({"platform_name": "TikTok", "current_followers": "1500"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["current_followers"], 1500);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/platforms/{id}"),
        Some(json!({"goal_followers": "10000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["goal_followers"], 10000);
    assert_eq!(updated["platform_name"], "TikTok");

    let (status, listed) = request(&app, "GET", "/api/platforms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = request(&app, "DELETE", &format!("/api/platforms/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "DELETE", &format!("/api/platforms/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_required_field_is_field_level_400() {
    let (app, _mock, _dir) = test_app().await;
    let (status, body) = request(
        &app,
        "POST",
        "/api/content-pillars",
        Some(json!({"description": "no name"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "pillar_name");
    assert!(body["error"].as_str().unwrap().contains("pillar_name"));

    let (_, listed) = request(&app, "GET", "/api/content-pillars", None).await;
    assert!(listed.as_array().unwrap().is_empty(), "no row on failure");
}

#[tokio::test]
async fn unknown_enum_value_is_rejected() {
    let (app, _mock, _dir) = test_app().await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/content-ideas",
        Some(json!({"title": "Idea", "status": "archived"})),
    )
    .await;
    assert!(status.is_client_error(), "got {status}");

    let (_, listed) = request(&app, "GET", "/api/content-ideas", None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn profile_is_a_lazy_singleton() {
    let (app, _mock, _dir) = test_app().await;
    let (status, first) = request(&app, "GET", "/api/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(first["mission"].is_null());

    let (_, updated) = request(
        &app,
        "PUT",
        "/api/profile",
        Some(json!({"mission": "Move more", "target_audience": "busy people"})),
    )
    .await;
    assert_eq!(updated["id"], first["id"]);
    assert_eq!(updated["mission"], "Move more");
}

#[tokio::test]
async fn pillar_to_published_content_scenario() {
    let (app, _mock, _dir) = test_app().await;

    let (_, platform) = request(
        &app,
        "POST",
        "/api/platforms",
        Some(json!({"platform_name": "Instagram"})),
    )
    .await;
    let p1 = platform["id"].as_i64().unwrap();

    let (_, pillar) = request(
        &app,
        "POST",
        "/api/content-pillars",
        Some(json!({"pillar_name": "Fitness", "color": "#3B82F6"})),
    )
    .await;
    let pillar_id = pillar["id"].as_i64().unwrap();

    let (_, idea) = request(
        &app,
        "POST",
        "/api/content-ideas",
        Some(json!({"title": "5 AM routine", "content_pillar_id": pillar_id, "status": "pending"})),
    )
    .await;
    let idea_id = idea["id"].as_i64().unwrap();

    let (status, item) = request(
        &app,
        "POST",
        "/api/content-manager",
        Some(json!({
            "content_title": "5AM Video",
            "content_idea_id": idea_id,
            "content_pillar_id": pillar_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["id"].as_i64().unwrap();
    assert_eq!(item["status"], "planning");

    let (status, published) = request(
        &app,
        "POST",
        &format!("/api/content-manager/{item_id}/publish"),
        Some(json!({
            "publish_time": "2026-08-06T09:00:00Z",
            "content_link": "https://example.com/v/1",
            "platform_ids": [p1]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(published["status"], "published");

    let (_, fetched) = request(&app, "GET", &format!("/api/content-manager/{item_id}"), None).await;
    assert_eq!(fetched["status"], "published");
    let platforms: Vec<i64> = fetched["platforms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(platforms, vec![p1]);
}

#[tokio::test]
async fn set_platforms_endpoint_replaces_the_set() {
    let (app, _mock, _dir) = test_app().await;
    let mut ids = Vec::new();
    for name in ["A", "B", "C"] {
        let (_, platform) = request(
            &app,
            "POST",
            "/api/platforms",
            Some(json!({"platform_name": name})),
        )
        .await;
        ids.push(platform["id"].as_i64().unwrap());
    }
    let (_, item) = request(
        &app,
        "POST",
        "/api/content-manager",
        Some(json!({"content_title": "Video"})),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let uri = format!("/api/content-manager/{item_id}/platforms");
    let (_, after_ab) = request(
        &app,
        "PUT",
        &uri,
        Some(json!({"platform_ids": [ids[0], ids[1]]})),
    )
    .await;
    assert_eq!(after_ab["platforms"].as_array().unwrap().len(), 2);

    let (_, after_c) = request(&app, "PUT", &uri, Some(json!({"platform_ids": [ids[2]]}))).await;
    let got: Vec<i64> = after_c["platforms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(got, vec![ids[2]], "replace, not union");
}

#[tokio::test]
async fn dashboard_counts_match_live_rows() {
    let (app, _mock, _dir) = test_app().await;
    for i in 0..3 {
        request(
            &app,
            "POST",
            "/api/content-ideas",
            Some(json!({"title": format!("idea-{i}")})),
        )
        .await;
    }
    request(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Edit video"})),
    )
    .await;

    let (status, summary) = request(&app, "GET", "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["content_ideas"], 3);
    assert_eq!(summary["tasks"], 1);
    assert_eq!(summary["pending_tasks"], 1);
    assert_eq!(summary["platforms"], 0);
    assert_eq!(summary["recent_tasks"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn generate_ideas_creates_pending_medium_rows_for_the_pillar() {
    let (app, mock, _dir) = test_app().await;
    let (_, pillar) = request(
        &app,
        "POST",
        "/api/content-pillars",
        Some(json!({"pillar_name": "Fitness"})),
    )
    .await;
    let pillar_id = pillar["id"].as_i64().unwrap();

    mock.push_ideas(vec![
        GeneratedIdea {
            title: "5 AM routine".into(),
            description: "morning habits".into(),
        },
        GeneratedIdea {
            title: "Desk stretches".into(),
            description: String::new(),
        },
        GeneratedIdea {
            title: "Meal prep".into(),
            description: "sunday batch".into(),
        },
    ])
    .await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/ai/generate-ideas",
        Some(json!({"pillar_id": pillar_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.as_array().unwrap().len(), 3);

    let (_, ideas) = request(&app, "GET", "/api/content-ideas", None).await;
    let ideas = ideas.as_array().unwrap();
    assert_eq!(ideas.len(), 3);
    for idea in ideas {
        assert_eq!(idea["content_pillar_id"], pillar_id);
        assert_eq!(idea["status"], "pending");
        assert_eq!(idea["priority"], "medium");
    }
}

#[tokio::test]
async fn generate_ideas_gateway_failure_creates_nothing() {
    let (app, mock, _dir) = test_app().await;
    let (_, pillar) = request(
        &app,
        "POST",
        "/api/content-pillars",
        Some(json!({"pillar_name": "Fitness"})),
    )
    .await;
    mock.fail_next().await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/ai/generate-ideas",
        Some(json!({"pillar_id": pillar["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("try again"));

    let (_, ideas) = request(&app, "GET", "/api/content-ideas", None).await;
    assert!(ideas.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn generate_ideas_for_unknown_pillar_is_404() {
    let (app, _mock, _dir) = test_app().await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/ai/generate-ideas",
        Some(json!({"pillar_id": 77})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ai_routes_without_configured_gateway_return_502() {
    let (db, _dir) = temp_database().await;
    let state = AppState {
        db: Arc::new(db),
        ai: None,
        recent_limit: 5,
        start_time: std::time::Instant::now(),
    };
    let app = build_router(state);

    let (status, body) = request(&app, "POST", "/api/ai/generate-strategy", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn generate_strategy_passes_value_through() {
    let (app, mock, _dir) = test_app().await;
    mock.push_value(json!({"strategy_recommendations": ["post more reels"]}))
        .await;

    let (status, body) = request(&app, "POST", "/api/ai/generate-strategy", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strategy_recommendations"][0], "post more reels");
}

#[tokio::test]
async fn analytics_honors_the_day_window_param() {
    let (app, _mock, _dir) = test_app().await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/analytics",
        Some(json!({
            "content_id": 1, "platform_id": 1,
            "date_recorded": "2020-01-01", "views": "50"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, recent) = request(&app, "GET", "/api/analytics", None).await;
    assert!(recent.as_array().unwrap().is_empty(), "old record outside default window");

    let (_, all) = request(&app, "GET", "/api/analytics?days=36500", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn subtask_checklist_round_trip() {
    let (app, _mock, _dir) = test_app().await;
    let (_, item) = request(
        &app,
        "POST",
        "/api/content-manager",
        Some(json!({"content_title": "Video"})),
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let uri = format!("/api/content-manager/{item_id}/subtasks");
    let (status, subtask) = request(
        &app,
        "POST",
        &uri,
        Some(json!({"task_title": "Record voiceover"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let subtask_id = subtask["id"].as_i64().unwrap();

    let (_, done) = request(
        &app,
        "PUT",
        &format!("/api/subtasks/{subtask_id}"),
        Some(json!({"status": "completed"})),
    )
    .await;
    assert_eq!(done["status"], "completed");

    let (_, listed) = request(&app, "GET", &uri, None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}
