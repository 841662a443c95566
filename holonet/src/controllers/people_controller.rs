use holonet_core::prelude::*;

use crate::error::AppError;
use crate::models::{Character, CharacterPayload, Message};
use crate::state::AppState;

pub struct PeopleController;

impl Controller<AppState> for PeopleController {
    fn routes() -> Routes<AppState> {
        Routes::new()
            .get("/people", list)
            .post("/people", create)
            .get("/people/{id}", get_by_id)
            .delete("/people/{id}", delete)
    }
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Character>>, AppError> {
    Ok(Json(state.characters.list().await?))
}

async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Character>, AppError> {
    Ok(Json(state.characters.get(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CharacterPayload>,
) -> Result<Json<Character>, AppError> {
    Ok(Json(state.characters.create(payload).await?))
}

async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Message>, AppError> {
    Ok(Json(state.characters.delete(id).await?))
}
