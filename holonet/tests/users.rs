mod common;

use common::{app, create, user};
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_user() {
    let app = app().await;
    let id = create(&app, "/users", &user("leia")).await;
    app.get(&format!("/users/{id}"))
        .send()
        .await
        .assert_ok()
        .assert_json_path("username", "leia")
        .assert_json_path("email", "leia@rebellion.org")
        .assert_json_path("password", "maytheforce");
    app.get("/users")
        .send()
        .await
        .assert_ok()
        .assert_json_path("len()", 1)
        .assert_json_path("[0].id", id);
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = app().await;
    app.get("/users/12")
        .send()
        .await
        .assert_not_found()
        .assert_message("User with id 12 does not exist");
}

#[tokio::test]
async fn invalid_user_is_rejected() {
    let app = app().await;
    app.post("/users")
        .json(&json!({"username": "han", "password": "x"}))
        .send()
        .await
        .assert_bad_request()
        .assert_message("Some field is missing in request body")
        .assert_json_path("details[0].field", "email");
    app.post("/users")
        .json(&json!({
            "username": "toolongusername",
            "email": "x@y.org",
            "password": "x"
        }))
        .send()
        .await
        .assert_bad_request()
        .assert_message("Some field is invalid in request body");
    app.post("/users")
        .json(&json!({"username": "han", "email": "falcon", "password": "x"}))
        .send()
        .await
        .assert_bad_request()
        .assert_json_path("details[0].field", "email");
    app.get("/users")
        .send()
        .await
        .assert_json_path("len()", 0);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let app = app().await;
    create(&app, "/users", &user("lando")).await;
    app.post("/users")
        .json(&user("lando"))
        .send()
        .await
        .assert_conflict();
}
