//! Database query functions
//!
//! One function per route. Parameters are always bound positionally with
//! `$n` placeholders, never interpolated into the query text, and every
//! filter is an exact, case-sensitive match.

use crate::models::*;
use crate::schema::Database;
use crate::Result;

impl Database {
    // ==================== Customers ====================

    /// Get all customers
    pub async fn get_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>(
            "SELECT customer_id, first_name, last_name FROM customer ORDER BY customer_id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    // ==================== Films ====================

    /// Get all films, one row per film id, joined with language
    pub async fn get_films(&self) -> Result<Vec<Film>> {
        let rows = sqlx::query_as::<_, Film>(
            "SELECT DISTINCT ON (f.film_id)
                    f.film_id, f.title, f.description, f.release_year, f.rating,
                    l.name AS language,
                    f.length, f.rental_duration, f.rental_rate, f.replacement_cost,
                    f.special_features
             FROM film f
             INNER JOIN language l ON l.language_id = f.language_id
             ORDER BY f.film_id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Get films with exactly this rating
    pub async fn get_films_by_rating(&self, rating: &str) -> Result<Vec<Film>> {
        let rows = sqlx::query_as::<_, Film>(
            "SELECT DISTINCT ON (f.film_id)
                    f.film_id, f.title, f.description, f.release_year, f.rating,
                    l.name AS language,
                    f.length, f.rental_duration, f.rental_rate, f.replacement_cost,
                    f.special_features
             FROM film f
             INNER JOIN language l ON l.language_id = f.language_id
             WHERE f.rating = $1
             ORDER BY f.film_id",
        )
        .bind(rating)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Get films in exactly this category
    pub async fn get_films_by_category(&self, category: &str) -> Result<Vec<Film>> {
        let rows = sqlx::query_as::<_, Film>(
            "SELECT DISTINCT ON (f.film_id)
                    f.film_id, f.title, f.description, f.release_year, f.rating,
                    l.name AS language,
                    c.name AS category,
                    f.length, f.rental_duration, f.rental_rate, f.replacement_cost,
                    f.special_features
             FROM film f
             INNER JOIN language l ON l.language_id = f.language_id
             INNER JOIN film_category fc ON fc.film_id = f.film_id
             INNER JOIN category c ON c.category_id = fc.category_id
             WHERE c.name = $1
             ORDER BY f.film_id",
        )
        .bind(category)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    /// Get films with exactly this title, joined with category and the
    /// leading (lowest-id) actor.
    pub async fn get_films_by_title(&self, title: &str) -> Result<Vec<Film>> {
        let rows = sqlx::query_as::<_, Film>(
            "SELECT DISTINCT ON (f.film_id)
                    f.film_id, f.title, f.description, f.release_year, f.rating,
                    l.name AS language,
                    c.name AS category,
                    a.first_name AS actor_first_name,
                    a.last_name AS actor_last_name,
                    f.length, f.rental_duration, f.rental_rate, f.replacement_cost,
                    f.special_features
             FROM film f
             INNER JOIN language l ON l.language_id = f.language_id
             INNER JOIN film_category fc ON fc.film_id = f.film_id
             INNER JOIN category c ON c.category_id = fc.category_id
             INNER JOIN film_actor fa ON fa.film_id = f.film_id
             INNER JOIN actor a ON a.actor_id = fa.actor_id
             WHERE f.title = $1
             ORDER BY f.film_id, a.actor_id",
        )
        .bind(title)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    // ==================== Comments ====================

    /// Insert a comment and return the store-assigned id
    pub async fn insert_comment(&self, comment: &NewComment) -> Result<i32> {
        let comment_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO comment (comment, customer_id, film_id)
             VALUES ($1, $2, $3)
             RETURNING comment_id",
        )
        .bind(&comment.comment)
        .bind(comment.customer_id)
        .bind(comment.film_id)
        .fetch_one(self.pool())
        .await?;

        Ok(comment_id)
    }

    /// Get comments matching both the film and the customer
    pub async fn get_comments(&self, film_id: i32, customer_id: i32) -> Result<Vec<Comment>> {
        let rows = sqlx::query_as::<_, Comment>(
            "SELECT comment_id, customer_id, film_id, comment
             FROM comment
             WHERE film_id = $1 AND customer_id = $2
             ORDER BY comment_id",
        )
        .bind(film_id)
        .bind(customer_id)
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }
}
