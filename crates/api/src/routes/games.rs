//! Route definitions for the `/games` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// POST   /{id}                  -> create_at
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// PATCH  /{id}/price/{price}    -> patch_price
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route(
            "/{id}",
            get(games::get_by_id)
                .post(games::create_at)
                .put(games::update)
                .delete(games::delete),
        )
        .route("/{id}/price/{price}", patch(games::patch_price))
}
