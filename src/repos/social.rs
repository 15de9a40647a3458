// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::social::{Follow, NewFollow, NewReview, Review, UpdateFollow, UpdateReview};
use crate::schema::{follows, reviews};

use super::{RepoError, RepoResult};

pub async fn list_follows(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Follow>> {
    follows::table
        .order(follows::id.asc())
        .select(Follow::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_follow(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Follow> {
    follows::table
        .find(id)
        .select(Follow::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "follow", id))
}

pub async fn create_follow(conn: &mut AsyncPgConnection, new_follow: NewFollow) -> RepoResult<Follow> {
    diesel::insert_into(follows::table)
        .values(&new_follow)
        .returning(Follow::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_follow(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateFollow,
) -> RepoResult<Follow> {
    diesel::update(follows::table.find(id))
        .set(&changes)
        .returning(Follow::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "follow", id))
}

pub async fn delete_follow(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(follows::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("follow", id));
    }
    Ok(())
}

/// Follower totals for a batch of users; users nobody follows are absent
/// from the map.
pub async fn follower_counts(
    conn: &mut AsyncPgConnection,
    user_ids: &[i64],
) -> RepoResult<HashMap<i64, i64>> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = follows::table
        .filter(follows::following_id.eq_any(user_ids.to_vec()))
        .group_by(follows::following_id)
        .select((follows::following_id, count_star()))
        .load::<(i64, i64)>(conn)
        .await
        .map_err(RepoError::Database)?;
    Ok(rows.into_iter().collect())
}

pub async fn list_reviews(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Review>> {
    reviews::table
        .order(reviews::id.asc())
        .select(Review::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_review(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Review> {
    reviews::table
        .find(id)
        .select(Review::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "review", id))
}

pub async fn create_review(conn: &mut AsyncPgConnection, new_review: NewReview) -> RepoResult<Review> {
    diesel::insert_into(reviews::table)
        .values(&new_review)
        .returning(Review::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_review(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateReview,
) -> RepoResult<Review> {
    diesel::update(reviews::table.find(id))
        .set(&changes)
        .returning(Review::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "review", id))
}

pub async fn delete_review(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(reviews::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("review", id));
    }
    Ok(())
}

/// Mean review rating for a batch of users. Every requested id is present in
/// the result; users with no reviews get 0.
pub async fn ratings_by_target(
    conn: &mut AsyncPgConnection,
    user_ids: &[i64],
) -> RepoResult<HashMap<i64, f64>> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = reviews::table
        .filter(reviews::target_id.eq_any(user_ids.to_vec()))
        .select((reviews::target_id, reviews::rating))
        .load::<(i64, i16)>(conn)
        .await
        .map_err(RepoError::Database)?;

    let mut grouped: HashMap<i64, Vec<i16>> = HashMap::new();
    for (target_id, rating) in rows {
        grouped.entry(target_id).or_default().push(rating);
    }

    Ok(user_ids
        .iter()
        .map(|id| {
            let ratings = grouped.get(id).map(Vec::as_slice).unwrap_or(&[]);
            (*id, mean_rating(ratings))
        })
        .collect())
}

/// Arithmetic mean rounded to one decimal place; 0 when there are no
/// reviews (never NaN).
pub fn mean_rating(ratings: &[i16]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    (sum as f64 / ratings.len() as f64 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::mean_rating;

    #[test]
    fn no_reviews_is_zero_not_nan() {
        assert_eq!(mean_rating(&[]), 0.0);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        assert_eq!(mean_rating(&[4, 5, 3]), 4.0);
        assert_eq!(mean_rating(&[4, 4, 5]), 4.3);
        assert_eq!(mean_rating(&[1, 2]), 1.5);
    }

    #[test]
    fn single_review_is_its_own_mean() {
        assert_eq!(mean_rating(&[5]), 5.0);
    }
}
