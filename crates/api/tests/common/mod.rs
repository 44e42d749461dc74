//! Shared helpers for the HTTP integration tests.
//!
//! Builds the production router over a per-test database pool and drives it
//! with tower's `oneshot`, no TCP listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use mockbuster_api::{create_router, AppState};
use mockbuster_database::Database;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;

/// Build the application router exactly as `serve` does, on top of the
/// given per-test pool.
pub async fn build_test_app(pool: PgPool) -> Router {
    let db = Database::from_pool(pool)
        .await
        .expect("schema setup failed");
    let state = Arc::new(AppState::new(db));
    create_router(state)
}

/// Seed a small catalog: two languages, two categories, two actors, two
/// customers, three films.
pub async fn seed_catalog(pool: &PgPool) {
    sqlx::raw_sql(SEED).execute(pool).await.expect("seed failed");
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an arbitrary byte payload as JSON, for malformed-body tests.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

const SEED: &str = r#"
INSERT INTO language (language_id, name) VALUES
    (1, 'English'),
    (2, 'Italian');

INSERT INTO category (category_id, name) VALUES
    (1, 'Action'),
    (2, 'Comedy');

INSERT INTO actor (actor_id, first_name, last_name) VALUES
    (1, 'NICK', 'WAHLBERG'),
    (2, 'PENELOPE', 'GUINESS');

INSERT INTO customer (customer_id, first_name, last_name) VALUES
    (1, 'MARY', 'SMITH'),
    (2, 'PATRICIA', 'JOHNSON');

INSERT INTO film (film_id, title, description, release_year, language_id,
                  rental_duration, rental_rate, length, replacement_cost,
                  rating, special_features) VALUES
    (1, 'ACADEMY DINOSAUR', 'A drama of a scientist in the Rockies', 2006, 1,
     6, 0.99, 86, 20.99, 'PG', 'Deleted Scenes'),
    (2, 'ACE GOLDFINGER', 'A tale of a spy in ancient China', 2006, 1,
     3, 4.99, 48, 12.99, 'G', 'Trailers'),
    (3, 'ADAPTATION HOLES', 'A reflection of a lumberjack', 2006, 2,
     7, 2.99, 50, 18.99, 'NC-17', NULL);

INSERT INTO film_category (film_id, category_id) VALUES
    (1, 1),
    (2, 1),
    (3, 2);

INSERT INTO film_actor (actor_id, film_id) VALUES
    (1, 1),
    (1, 2),
    (2, 2),
    (2, 3);
"#;
