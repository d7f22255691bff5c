use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes::promotion_routes;
use crate::state::promotions::PromotionStore;

/// Build the complete Axum application:
/// - /promotions/{id}   (point lookup)
///
/// Every other path falls through to axum's default 404.
pub fn build_app(store: PromotionStore) -> Router {
    Router::new()
        // /promotions/*
        .nest("/promotions", promotion_routes::routes(store))

        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
