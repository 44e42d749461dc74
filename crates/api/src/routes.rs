//! API route definitions

use crate::handlers;
use crate::SharedState;
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
};

/// Upper bound on a single request, and therefore on any query behind it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/Ping", get(handlers::ping))
        .route("/customer", get(handlers::list_customers))
        .route("/films", get(handlers::list_films))
        .route("/films/ratings/{rating}", get(handlers::films_by_rating))
        .route("/films/categories/{category}", get(handlers::films_by_category))
        .route("/films/titles/{title}", get(handlers::films_by_title))
        .route("/films/comment", post(handlers::post_comment))
        .route(
            "/films/{film_id}/comment/{customer_id}",
            get(handlers::comments_for_film),
        )
        .with_state(state)
        // Panic recovery first, so nothing below can take the process down.
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .layer(CompressionLayer::new())
}
