// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::Review;
use tracing::debug;

use crate::data_models::ReviewRow;
use crate::diesel_schema::{employees, reviews};
use crate::error::PersistenceError;

/// Lists the reviews on a bid written by one author, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `bid_id` - The reviewed bid
/// * `author_username` - The author's username
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_reviews_for_bid(
    conn: &mut SqliteConnection,
    bid_id: i64,
    author_username: &str,
) -> Result<Vec<Review>, PersistenceError> {
    debug!(bid_id, author_username, "Listing reviews for bid");

    let rows: Vec<(ReviewRow, String)> = reviews::table
        .inner_join(employees::table)
        .filter(reviews::bid_id.eq(bid_id))
        .filter(employees::username.eq(author_username))
        .order((reviews::created_at.asc(), reviews::review_id.asc()))
        .select((ReviewRow::as_select(), employees::username))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, username)| row.into_review(username))
        .collect())
}

/// Retrieves a review by ID together with its author's username.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the review is not found.
pub fn get_review(
    conn: &mut SqliteConnection,
    review_id: i64,
) -> Result<Option<Review>, PersistenceError> {
    debug!(review_id, "Looking up review");

    let row: Option<(ReviewRow, String)> = reviews::table
        .inner_join(employees::table)
        .filter(reviews::review_id.eq(review_id))
        .select((ReviewRow::as_select(), employees::username))
        .first(conn)
        .optional()?;

    Ok(row.map(|(row, username)| row.into_review(username)))
}
