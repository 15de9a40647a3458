// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::models::profile::{NewProfile, Profile, UpdateProfile};
use crate::models::user::User;
use crate::schema::{games, profiles, user_games, users};

use super::{RepoError, RepoResult};

/// Query parameters accepted by the profile listing.
#[derive(Debug, Default)]
pub struct ProfileFilter {
    pub search: Option<String>,
    pub game: Option<i64>,
    pub sort_by: Option<String>,
}

/// Orderings the listing can actually produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOrder {
    UsernameDesc,
    NewestFirst,
}

impl ProfileOrder {
    pub fn from_param(sort_by: Option<&str>) -> Self {
        match sort_by {
            Some("newest") => ProfileOrder::NewestFirst,
            // TODO: give `rating` and `followers` real orderings once the
            // aggregate values are sortable in the query; until then they
            // fall back to the default, as the platform has always done.
            Some("rating") | Some("followers") => ProfileOrder::UsernameDesc,
            _ => ProfileOrder::UsernameDesc,
        }
    }
}

/// List profiles with their owning user, honoring search / game / sort
/// parameters. The username-or-game search resolves matching user ids with
/// two explicit queries and de-duplicates before filtering.
pub async fn list(
    conn: &mut AsyncPgConnection,
    filter: &ProfileFilter,
) -> RepoResult<Vec<(Profile, User)>> {
    let mut query = profiles::table
        .inner_join(users::table)
        .select((Profile::as_select(), User::as_select()))
        .into_boxed();

    if let Some(game_id) = filter.game {
        let player_ids = user_games::table
            .filter(user_games::game_id.eq(game_id))
            .select(user_games::user_id)
            .load::<i64>(conn)
            .await
            .map_err(RepoError::Database)?;
        query = query.filter(profiles::user_id.eq_any(player_ids));
    }

    if let Some(term) = filter.search.as_deref() {
        let pattern = format!("%{}%", term);
        let mut matched = users::table
            .filter(users::username.ilike(pattern.clone()))
            .select(users::id)
            .load::<i64>(conn)
            .await
            .map_err(RepoError::Database)?;
        let by_game_name = user_games::table
            .inner_join(games::table)
            .filter(games::name.ilike(pattern))
            .select(user_games::user_id)
            .load::<i64>(conn)
            .await
            .map_err(RepoError::Database)?;
        matched.extend(by_game_name);
        matched.sort_unstable();
        matched.dedup();
        debug!(term, matches = matched.len(), "profile search resolved");
        query = query.filter(profiles::user_id.eq_any(matched));
    }

    query = match ProfileOrder::from_param(filter.sort_by.as_deref()) {
        ProfileOrder::NewestFirst => query.order(users::created_at.desc()),
        ProfileOrder::UsernameDesc => query.order(users::username.desc()),
    };

    query.load(conn).await.map_err(RepoError::Database)
}

pub async fn find(conn: &mut AsyncPgConnection, user_id: i64) -> RepoResult<(Profile, User)> {
    profiles::table
        .inner_join(users::table)
        .filter(profiles::user_id.eq(user_id))
        .select((Profile::as_select(), User::as_select()))
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "profile", user_id))
}

pub async fn create(conn: &mut AsyncPgConnection, new_profile: NewProfile) -> RepoResult<Profile> {
    diesel::insert_into(profiles::table)
        .values(&new_profile)
        .returning(Profile::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    user_id: i64,
    changes: UpdateProfile,
) -> RepoResult<Profile> {
    diesel::update(profiles::table.find(user_id))
        .set(&changes)
        .returning(Profile::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "profile", user_id))
}

pub async fn delete(conn: &mut AsyncPgConnection, user_id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(profiles::table.find(user_id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("profile", user_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ProfileOrder;

    #[test]
    fn newest_sorts_by_creation_time() {
        assert_eq!(
            ProfileOrder::from_param(Some("newest")),
            ProfileOrder::NewestFirst
        );
    }

    // Pins the long-standing fallback: rating and followers are accepted as
    // sort keys but order identically to the default.
    #[test]
    fn rating_and_followers_fall_back_to_default_order() {
        let default = ProfileOrder::from_param(None);
        assert_eq!(ProfileOrder::from_param(Some("rating")), default);
        assert_eq!(ProfileOrder::from_param(Some("followers")), default);
        assert_eq!(default, ProfileOrder::UsernameDesc);
    }

    #[test]
    fn unknown_sort_keys_use_default_order() {
        assert_eq!(
            ProfileOrder::from_param(Some("garbage")),
            ProfileOrder::UsernameDesc
        );
    }
}
