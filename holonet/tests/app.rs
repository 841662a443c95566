mod common;

use common::app;

#[tokio::test]
async fn sitemap_lists_every_endpoint() {
    let app = app().await;
    let resp = app
        .get("/")
        .send()
        .await
        .assert_ok()
        .assert_json_path("endpoints.len()", 18)
        .assert_json_path("endpoints[0].path", "/");
    let endpoints: Vec<(String, String)> = resp
        .json::<serde_json::Value>()["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["method"].as_str().unwrap().to_string(),
                e["path"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    for expected in [
        ("GET", "/people/{id}"),
        ("POST", "/planets"),
        ("DELETE", "/users/{id}/favorites/people/{target_id}"),
        ("GET", "/health"),
    ] {
        assert!(
            endpoints
                .iter()
                .any(|(m, p)| m == expected.0 && p == expected.1),
            "{expected:?} missing from {endpoints:?}"
        );
    }
}

#[tokio::test]
async fn health_check() {
    let app = app().await;
    let resp = app.get("/health").send().await.assert_ok();
    assert_eq!(resp.text(), "OK");
}

#[tokio::test]
async fn cors_is_permissive() {
    let app = app().await;
    let resp = app
        .get("/planets")
        .header(http::header::ORIGIN, "https://example.org")
        .send()
        .await
        .assert_ok();
    assert_eq!(resp.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app().await;
    app.get("/starships").send().await.assert_not_found();
}
