// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::game::{
    Achievement, Game, NewAchievement, NewGame, NewUserGame, UpdateAchievement, UpdateGame,
    UpdateUserGame, UserGame,
};
use crate::models::user::User;
use crate::schema::{achievements, games, user_games, users};

use super::{RepoError, RepoResult};

pub async fn list_games(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Game>> {
    games::table
        .order(games::id.asc())
        .select(Game::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_game(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Game> {
    games::table
        .find(id)
        .select(Game::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "game", id))
}

pub async fn create_game(conn: &mut AsyncPgConnection, new_game: NewGame) -> RepoResult<Game> {
    diesel::insert_into(games::table)
        .values(&new_game)
        .returning(Game::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_game(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateGame,
) -> RepoResult<Game> {
    diesel::update(games::table.find(id))
        .set(&changes)
        .returning(Game::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "game", id))
}

pub async fn delete_game(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(games::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("game", id));
    }
    Ok(())
}

pub async fn list_user_games(
    conn: &mut AsyncPgConnection,
) -> RepoResult<Vec<(UserGame, User, Game)>> {
    user_games::table
        .inner_join(users::table)
        .inner_join(games::table)
        .order(user_games::id.asc())
        .select((UserGame::as_select(), User::as_select(), Game::as_select()))
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_user_game(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> RepoResult<(UserGame, User, Game)> {
    user_games::table
        .inner_join(users::table)
        .inner_join(games::table)
        .filter(user_games::id.eq(id))
        .select((UserGame::as_select(), User::as_select(), Game::as_select()))
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "user game", id))
}

/// Batched expansion used by the profile representation: every user_game of
/// the given users, with the game and owning user attached.
pub async fn user_games_for_users(
    conn: &mut AsyncPgConnection,
    user_ids: &[i64],
) -> RepoResult<Vec<(UserGame, User, Game)>> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }
    user_games::table
        .inner_join(users::table)
        .inner_join(games::table)
        .filter(user_games::user_id.eq_any(user_ids.to_vec()))
        .order(user_games::id.asc())
        .select((UserGame::as_select(), User::as_select(), Game::as_select()))
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn create_user_game(
    conn: &mut AsyncPgConnection,
    new_user_game: NewUserGame,
) -> RepoResult<UserGame> {
    diesel::insert_into(user_games::table)
        .values(&new_user_game)
        .returning(UserGame::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_user_game(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateUserGame,
) -> RepoResult<UserGame> {
    diesel::update(user_games::table.find(id))
        .set(&changes)
        .returning(UserGame::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "user game", id))
}

pub async fn delete_user_game(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(user_games::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("user game", id));
    }
    Ok(())
}

pub async fn list_achievements(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Achievement>> {
    achievements::table
        .order(achievements::id.asc())
        .select(Achievement::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_achievement(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Achievement> {
    achievements::table
        .find(id)
        .select(Achievement::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "achievement", id))
}

pub async fn create_achievement(
    conn: &mut AsyncPgConnection,
    new_achievement: NewAchievement,
) -> RepoResult<Achievement> {
    diesel::insert_into(achievements::table)
        .values(&new_achievement)
        .returning(Achievement::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_achievement(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateAchievement,
) -> RepoResult<Achievement> {
    diesel::update(achievements::table.find(id))
        .set(&changes)
        .returning(Achievement::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "achievement", id))
}

pub async fn delete_achievement(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(achievements::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("achievement", id));
    }
    Ok(())
}
