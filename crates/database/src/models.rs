//! Database models for Mockbuster

use serde::{Deserialize, Serialize};

/// A film row as projected by the catalog queries.
///
/// The category and actor columns are only selected by the projections that
/// join them; they stay `None` elsewhere and are omitted from responses.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Film {
    pub film_id: i32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    pub language: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_first_name: Option<String>,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    pub rental_duration: i32,
    pub rental_rate: f64,
    pub replacement_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
}

/// A customer of the rental store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// A comment a customer left on a film
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub customer_id: i32,
    pub film_id: i32,
    pub comment: String,
}

/// Input for posting a comment.
///
/// The wire field names are contractual; unknown fields in the payload are
/// ignored and missing fields fall back to zero-equivalents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewComment {
    #[serde(rename = "CustomerId")]
    pub customer_id: i32,
    #[serde(rename = "FilmID")]
    pub film_id: i32,
    pub comment: String,
}
