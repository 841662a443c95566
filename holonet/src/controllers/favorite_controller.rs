use holonet_core::prelude::*;

use crate::error::AppError;
use crate::models::{FavoriteView, TargetKind};
use crate::state::AppState;

/// `/users/{id}/favorites`, with one route pair per [`TargetKind`].
pub struct FavoriteController;

impl Controller<AppState> for FavoriteController {
    fn routes() -> Routes<AppState> {
        Routes::new()
            .get("/users/{id}/favorites", list)
            .post("/users/{id}/favorites/planet/{target_id}", link_planet)
            .delete("/users/{id}/favorites/planet/{target_id}", unlink_planet)
            .post("/users/{id}/favorites/people/{target_id}", link_people)
            .delete("/users/{id}/favorites/people/{target_id}", unlink_people)
    }
}

async fn list(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i64>,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    Ok(Json(state.favorites.list(user_id).await?))
}

async fn link(
    state: AppState,
    (user_id, target_id): (i64, i64),
    kind: TargetKind,
) -> Result<Json<FavoriteView>, AppError> {
    Ok(Json(state.favorites.link(user_id, kind, target_id).await?))
}

async fn unlink(
    state: AppState,
    (user_id, target_id): (i64, i64),
    kind: TargetKind,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    Ok(Json(state.favorites.unlink(user_id, kind, target_id).await?))
}

async fn link_planet(
    State(state): State<AppState>,
    PathParams(ids): PathParams<(i64, i64)>,
) -> Result<Json<FavoriteView>, AppError> {
    link(state, ids, TargetKind::Planet).await
}

async fn unlink_planet(
    State(state): State<AppState>,
    PathParams(ids): PathParams<(i64, i64)>,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    unlink(state, ids, TargetKind::Planet).await
}

async fn link_people(
    State(state): State<AppState>,
    PathParams(ids): PathParams<(i64, i64)>,
) -> Result<Json<FavoriteView>, AppError> {
    link(state, ids, TargetKind::People).await
}

async fn unlink_people(
    State(state): State<AppState>,
    PathParams(ids): PathParams<(i64, i64)>,
) -> Result<Json<Vec<FavoriteView>>, AppError> {
    unlink(state, ids, TargetKind::People).await
}
