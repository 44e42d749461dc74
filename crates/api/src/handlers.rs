//! API request handlers
//!
//! Each handler is one linear sequence: extract parameters, run one query,
//! serialize the rows, respond.

use crate::error::{ApiError, ApiResult};
use crate::SharedState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use mockbuster_database::{Comment, Customer, Film, NewComment};
use serde_json::{json, Value};

/// Static welcome message
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Mockbuster Portal" }))
}

/// Liveness probe; answers without touching the store.
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "Pong" }))
}

/// List all customers
pub async fn list_customers(State(state): State<SharedState>) -> ApiResult<Json<Vec<Customer>>> {
    let customers = state.db.get_customers().await?;
    Ok(Json(customers))
}

/// List all films
pub async fn list_films(State(state): State<SharedState>) -> ApiResult<Json<Vec<Film>>> {
    let films = state.db.get_films().await?;
    Ok(Json(films))
}

/// Films filtered by exact rating match; an unknown rating is an empty
/// array, not an error.
pub async fn films_by_rating(
    State(state): State<SharedState>,
    Path(rating): Path<String>,
) -> ApiResult<Json<Vec<Film>>> {
    let films = state.db.get_films_by_rating(&rating).await?;
    Ok(Json(films))
}

/// Films filtered by exact category name
pub async fn films_by_category(
    State(state): State<SharedState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Film>>> {
    let films = state.db.get_films_by_category(&category).await?;
    Ok(Json(films))
}

/// Films filtered by exact title, with category and leading actor attached
pub async fn films_by_title(
    State(state): State<SharedState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Film>>> {
    let films = state.db.get_films_by_title(&title).await?;
    Ok(Json(films))
}

/// Insert one comment and respond with the created record.
pub async fn post_comment(
    State(state): State<SharedState>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> ApiResult<Json<Comment>> {
    let Json(input) = payload.map_err(|e| ApiError::Decode(e.body_text()))?;

    let comment_id = state.db.insert_comment(&input).await?;

    Ok(Json(Comment {
        comment_id,
        customer_id: input.customer_id,
        film_id: input.film_id,
        comment: input.comment,
    }))
}

/// Comments matching both the film and the customer
pub async fn comments_for_film(
    State(state): State<SharedState>,
    Path((film_id, customer_id)): Path<(i32, i32)>,
) -> ApiResult<Json<Vec<Comment>>> {
    let comments = state.db.get_comments(film_id, customer_id).await?;
    Ok(Json(comments))
}
