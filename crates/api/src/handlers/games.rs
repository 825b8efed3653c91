//! Handlers for the `/games` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gamecatalog_core::game::{validate_price, GameInput, GameView};
use gamecatalog_core::pagination::PageRequest;
use gamecatalog_core::types::GameId;

use crate::error::AppResult;
use crate::middleware::extract::{ApiPath, ApiQuery, ValidJson};
use crate::query::ListGamesParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/games?page=&pageSize=
///
/// 204 when the requested page holds no games.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListGamesParams>,
) -> AppResult<Response> {
    let page = PageRequest::from_params(params.page, params.page_size)?;
    let games = state.catalog.list(page).await?;
    if games.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(DataResponse { data: games }).into_response())
}

/// GET /api/v1/games/{id}
///
/// 204 when no game has this id.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
) -> AppResult<Response> {
    match state.catalog.get(id).await? {
        Some(game) => Ok(Json(DataResponse { data: game }).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/v1/games
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<GameInput>,
) -> AppResult<Json<DataResponse<GameView>>> {
    let game = state.catalog.create(input).await?;
    Ok(Json(DataResponse { data: game }))
}

/// POST /api/v1/games/{id}
///
/// The id must be well formed but is otherwise ignored; the server always
/// generates the new game's id.
pub async fn create_at(
    state: State<AppState>,
    ApiPath(_requested): ApiPath<GameId>,
    input: ValidJson<GameInput>,
) -> AppResult<Json<DataResponse<GameView>>> {
    create(state, input).await
}

/// PUT /api/v1/games/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
    ValidJson(input): ValidJson<GameInput>,
) -> AppResult<StatusCode> {
    state.catalog.update(id, input).await?;
    Ok(StatusCode::OK)
}

/// PATCH /api/v1/games/{id}/price/{price}
pub async fn patch_price(
    State(state): State<AppState>,
    ApiPath((id, price)): ApiPath<(GameId, f64)>,
) -> AppResult<StatusCode> {
    validate_price(price)?;
    state.catalog.update_price(id, price).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/v1/games/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<GameId>,
) -> AppResult<StatusCode> {
    state.catalog.remove(id).await?;
    Ok(StatusCode::OK)
}
