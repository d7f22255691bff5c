use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::errors::ApiError;
use crate::services::promotion_service;
use crate::state::promotions::PromotionStore;

/// Build the lookup routes under /promotions
///
/// `/promotions` and `/promotions/` match no route and get the router's
/// default empty 404.
pub fn routes(store: PromotionStore) -> Router {
    Router::new()
        .route("/*id", get(get_promotion))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// GET /promotions/{id}
// Return the promotion as JSON or 404
// ─────────────────────────────────────────────────────────────
//
async fn get_promotion(
    id: Result<Path<String>, PathRejection>,
    State(store): State<PromotionStore>,
) -> Result<impl IntoResponse, ApiError>
{
    // An id that does not decode to UTF-8 can never have been loaded.
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;

    let body = promotion_service::lookup_json(&store, &id)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
