// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::social::{Follow, NewFollow, NewReview, Review, UpdateFollow, UpdateReview};
use crate::repos;

pub async fn list_follows(State(pool): State<DbPool>) -> Result<Json<Vec<Follow>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::list_follows(&mut conn).await?))
}

pub async fn get_follow(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Follow>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::find_follow(&mut conn, id).await?))
}

pub async fn create_follow(
    State(pool): State<DbPool>,
    Json(new_follow): Json<NewFollow>,
) -> Result<(StatusCode, Json<Follow>), ApiError> {
    let mut conn = pool.get().await?;
    let follow = repos::social::create_follow(&mut conn, new_follow).await?;
    Ok((StatusCode::CREATED, Json(follow)))
}

pub async fn update_follow(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateFollow>,
) -> Result<Json<Follow>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::update_follow(&mut conn, id, changes).await?))
}

pub async fn delete_follow(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::social::delete_follow(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_reviews(State(pool): State<DbPool>) -> Result<Json<Vec<Review>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::list_reviews(&mut conn).await?))
}

pub async fn get_review(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Review>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::find_review(&mut conn, id).await?))
}

pub async fn create_review(
    State(pool): State<DbPool>,
    Json(new_review): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let mut conn = pool.get().await?;
    let review = repos::social::create_review(&mut conn, new_review).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

pub async fn update_review(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateReview>,
) -> Result<Json<Review>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social::update_review(&mut conn, id, changes).await?))
}

pub async fn delete_review(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::social::delete_review(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
