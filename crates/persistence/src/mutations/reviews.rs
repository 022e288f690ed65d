// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tender_bid_domain::Review;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::reviews;
use crate::error::PersistenceError;
use crate::mutations::timestamp_now;

/// Appends a review to a bid.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `bid_id` - The reviewed bid
/// * `author_id` - The authoring employee
/// * `author_username` - The author's username, echoed on the result
/// * `content` - The review text
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the bid or author does
/// not exist, or another error if the insert fails.
pub fn insert_review(
    conn: &mut SqliteConnection,
    bid_id: i64,
    author_id: i64,
    author_username: &str,
    content: &str,
) -> Result<Review, PersistenceError> {
    let now: String = timestamp_now()?;

    diesel::insert_into(reviews::table)
        .values((
            reviews::bid_id.eq(bid_id),
            reviews::author_id.eq(author_id),
            reviews::content.eq(content),
            reviews::created_at.eq(&now),
        ))
        .execute(conn)?;

    let review_id: i64 = conn.get_last_insert_rowid()?;
    info!(review_id, bid_id, author_id, "Review created");

    Ok(Review {
        review_id,
        bid_id,
        author_id,
        author_username: author_username.to_string(),
        content: content.to_string(),
        created_at: now,
    })
}
