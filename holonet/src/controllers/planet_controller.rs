use holonet_core::prelude::*;

use crate::error::AppError;
use crate::models::{Message, Planet, PlanetPayload};
use crate::state::AppState;

pub struct PlanetController;

impl Controller<AppState> for PlanetController {
    fn routes() -> Routes<AppState> {
        Routes::new()
            .get("/planets", list)
            .post("/planets", create)
            .get("/planets/{id}", get_by_id)
            .delete("/planets/{id}", delete)
    }
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    Ok(Json(state.planets.list().await?))
}

async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Planet>, AppError> {
    Ok(Json(state.planets.get(id).await?))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PlanetPayload>,
) -> Result<Json<Planet>, AppError> {
    Ok(Json(state.planets.create(payload).await?))
}

async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Message>, AppError> {
    Ok(Json(state.planets.delete(id).await?))
}
