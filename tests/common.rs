// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Starts an axum stub of the nutrition lookup service on an ephemeral port
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    dead_code,
    missing_docs
)]

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use nutrition_filter::config::ClientConfig;
use nutrition_filter::models::{ApiContract, ClusterResponse, NutritionItem};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Delay applied to the `High Fat` cluster so tests can overlap requests
pub const SLOW_CLUSTER_DELAY: Duration = Duration::from_millis(300);

type SeenRequests = Arc<Mutex<Vec<String>>>;

/// Running stub server
pub struct StubServer {
    pub base_url: String,
    seen: SeenRequests,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Path and query of every request received, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    /// Client configuration pointing at this stub
    pub fn config(&self, contract: ApiContract) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(&self.base_url)
            .unwrap()
            .with_contract(contract)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The Egg record from the service documentation
pub fn egg() -> NutritionItem {
    NutritionItem {
        fdc_id: 1,
        description: "Egg".to_owned(),
        cluster_name: "High Protein".to_owned(),
        calories_final: Some(78.0),
        protein: Some(6.3),
        fat: Some(5.3),
        carbohydrate: Some(0.6),
        fiber: Some(0.0),
        sodium: Some(62.0),
    }
}

fn single_item_cluster(cluster_name: &str, fdc_id: u64, description: &str) -> ClusterResponse {
    ClusterResponse {
        cluster_name: cluster_name.to_owned(),
        count: 1,
        results: vec![NutritionItem {
            fdc_id,
            description: description.to_owned(),
            cluster_name: cluster_name.to_owned(),
            calories_final: Some(100.0),
            protein: Some(1.0),
            fat: Some(1.0),
            carbohydrate: Some(1.0),
            fiber: Some(1.0),
            sodium: Some(1.0),
        }],
    }
}

fn record(seen: &SeenRequests, path: &str, query: Option<String>) {
    seen.lock()
        .unwrap()
        .push(format!("{path}?{}", query.unwrap_or_default()));
}

async fn by_cluster(
    State(seen): State<SeenRequests>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&seen, "/foods/by-cluster", raw);

    match params.get("cluster_name").map(String::as_str) {
        Some("High Protein") => Json(json!({
            "cluster_name": "High Protein",
            "count": 1,
            "results": [{
                "fdc_id": 1,
                "description": "Egg",
                "cluster_name": "High Protein",
                "calories_final": 78,
                "protein": 6.3,
                "fat": 5.3,
                "carbohydrate": 0.6,
                "fiber": 0,
                "sodium": 62
            }]
        }))
        .into_response(),
        Some("Low Calorie") => Json(json!({
            "cluster_name": "Low Calorie",
            "count": 0,
            "results": []
        }))
        .into_response(),
        Some("High Fat") => {
            sleep(SLOW_CLUSTER_DELAY).await;
            Json(single_item_cluster("High Fat", 20, "Butter")).into_response()
        }
        Some("High Carb") => Json(single_item_cluster("High Carb", 30, "Rice")).into_response(),
        Some("High Fiber") => (StatusCode::OK, "definitely not json").into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn macro_nutrition(
    State(seen): State<SeenRequests>,
    RawQuery(raw): RawQuery,
) -> Response {
    record(&seen, "/api/nutrition", raw.clone());

    match raw.as_deref() {
        Some("protein=high") => Json(json!([
            {"name": "Tofu", "protein": 8.1, "fat": 4.8, "carbs": 1.9},
            {"name": "Lentils", "protein": 9.0, "fat": 0.4, "carbs": 20.1}
        ]))
        .into_response(),
        Some("fat=low") => Json(json!([])).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start the stub on 127.0.0.1 with an OS-assigned port
pub async fn start_stub() -> StubServer {
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/foods/by-cluster", get(by_cluster))
        .route("/api/nutrition", get(macro_nutrition))
        .with_state(Arc::clone(&seen));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{addr}"),
        seen,
        handle,
    }
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
