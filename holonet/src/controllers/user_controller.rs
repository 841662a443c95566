use holonet_core::prelude::*;

use crate::error::AppError;
use crate::models::{User, UserPayload};
use crate::state::AppState;

pub struct UserController;

impl Controller<AppState> for UserController {
    fn routes() -> Routes<AppState> {
        Routes::new()
            .get("/users", list)
            .post("/users", create)
            .get("/users/{id}", get_by_id)
    }
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.users.list().await?))
}

async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.users.get(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.users.create(payload).await?))
}
