#![allow(dead_code)]

use holonet::{build_app, migrate, AppState};
use holonet_data::{connect, DatabaseConfig};
use holonet_test::TestApp;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A fresh service over an empty in-memory database.
pub async fn app() -> TestApp {
    let pool = connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    migrate(&pool).await.expect("migrations");
    TestApp::from_builder(build_app(AppState::new(pool)))
}

/// Services over a migrated database file with a multi-connection pool,
/// for tests that race writers against each other. Keep the `TempDir`
/// alive for as long as the state is used.
pub async fn file_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("holonet.db").display()),
        pool_size: 5,
        ..DatabaseConfig::default()
    };
    let pool = connect(&config).await.expect("file database");
    migrate(&pool).await.expect("migrations");
    (dir, AppState::new(pool))
}

/// Deserialize a JSON fixture into a service payload.
pub fn payload<T: serde::de::DeserializeOwned>(body: Value) -> T {
    serde_json::from_value(body).expect("payload")
}

pub fn tatooine() -> Value {
    json!({
        "name": "Tatooine",
        "terrain": "desert",
        "climate": "arid",
        "population": 200000,
        "gravity": "1 standard",
        "diameter": 10465
    })
}

pub fn hoth() -> Value {
    json!({
        "name": "Hoth",
        "terrain": "tundra, ice caves, mountain ranges",
        "climate": "frozen",
        "population": 0,
        "gravity": "1.1 standard",
        "diameter": 7200
    })
}

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "gender": "male",
        "birth_year": "19BBY",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "height": 172,
        "mass": 77
    })
}

pub fn r2d2() -> Value {
    json!({
        "name": "R2-D2",
        "birth_year": "33BBY",
        "skin_color": "white, blue",
        "height": 96,
        "mass": 32
    })
}

pub fn user(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{username}@rebellion.org"),
        "password": "maytheforce"
    })
}

/// POST `body` to `path` and return the new record's id.
pub async fn create(app: &TestApp, path: &str, body: &Value) -> i64 {
    app.post(path).json(body).send().await.assert_ok().json_path("id")
}
