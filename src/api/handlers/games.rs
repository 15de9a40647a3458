// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::game::{
    Achievement, Game, NewAchievement, NewGame, NewUserGame, UpdateAchievement, UpdateGame,
    UpdateUserGame,
};
use crate::repos;
use crate::views::{self, UserGameView};

pub async fn list_games(State(pool): State<DbPool>) -> Result<Json<Vec<Game>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::games::list_games(&mut conn).await?))
}

pub async fn get_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Game>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::games::find_game(&mut conn, id).await?))
}

pub async fn create_game(
    State(pool): State<DbPool>,
    Json(new_game): Json<NewGame>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let mut conn = pool.get().await?;
    let game = repos::games::create_game(&mut conn, new_game).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn update_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateGame>,
) -> Result<Json<Game>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::games::update_game(&mut conn, id, changes).await?))
}

pub async fn delete_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::games::delete_game(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_user_games(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<UserGameView>>, ApiError> {
    let mut conn = pool.get().await?;
    let rows = repos::games::list_user_games(&mut conn).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(user_game, user, game)| views::user_game_view(user_game, &user, game))
            .collect(),
    ))
}

pub async fn get_user_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<UserGameView>, ApiError> {
    let mut conn = pool.get().await?;
    let (user_game, user, game) = repos::games::find_user_game(&mut conn, id).await?;
    Ok(Json(views::user_game_view(user_game, &user, game)))
}

pub async fn create_user_game(
    State(pool): State<DbPool>,
    Json(new_user_game): Json<NewUserGame>,
) -> Result<(StatusCode, Json<UserGameView>), ApiError> {
    let mut conn = pool.get().await?;
    let created = repos::games::create_user_game(&mut conn, new_user_game).await?;
    let (user_game, user, game) = repos::games::find_user_game(&mut conn, created.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(views::user_game_view(user_game, &user, game)),
    ))
}

pub async fn update_user_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateUserGame>,
) -> Result<Json<UserGameView>, ApiError> {
    let mut conn = pool.get().await?;
    let updated = repos::games::update_user_game(&mut conn, id, changes).await?;
    let (user_game, user, game) = repos::games::find_user_game(&mut conn, updated.id).await?;
    Ok(Json(views::user_game_view(user_game, &user, game)))
}

pub async fn delete_user_game(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::games::delete_user_game(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_achievements(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Achievement>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::games::list_achievements(&mut conn).await?))
}

pub async fn get_achievement(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Achievement>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::games::find_achievement(&mut conn, id).await?))
}

pub async fn create_achievement(
    State(pool): State<DbPool>,
    Json(new_achievement): Json<NewAchievement>,
) -> Result<(StatusCode, Json<Achievement>), ApiError> {
    let mut conn = pool.get().await?;
    let achievement = repos::games::create_achievement(&mut conn, new_achievement).await?;
    Ok((StatusCode::CREATED, Json(achievement)))
}

pub async fn update_achievement(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateAchievement>,
) -> Result<Json<Achievement>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::games::update_achievement(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_achievement(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::games::delete_achievement(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
