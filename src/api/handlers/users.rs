// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::social_auth::{NewSocialAuth, SocialAuth, UpdateSocialAuth};
use crate::models::user::{NewUser, UpdateUser};
use crate::repos;
use crate::views::PublicUser;

pub async fn list_users(State(pool): State<DbPool>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let mut conn = pool.get().await?;
    let users = repos::users::list(&mut conn).await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

pub async fn get_user(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PublicUser>, ApiError> {
    let mut conn = pool.get().await?;
    let user = repos::users::find(&mut conn, id).await?;
    Ok(Json(PublicUser::from(user)))
}

pub async fn create_user(
    State(pool): State<DbPool>,
    Json(new_user): Json<NewUser>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let mut conn = pool.get().await?;
    let user = repos::users::create(&mut conn, new_user).await?;
    Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
}

pub async fn update_user(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateUser>,
) -> Result<Json<PublicUser>, ApiError> {
    let mut conn = pool.get().await?;
    let user = repos::users::update(&mut conn, id, changes).await?;
    Ok(Json(PublicUser::from(user)))
}

pub async fn delete_user(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::users::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_social_auth(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<SocialAuth>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social_auth::list(&mut conn).await?))
}

pub async fn get_social_auth(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<SocialAuth>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social_auth::find(&mut conn, id).await?))
}

pub async fn create_social_auth(
    State(pool): State<DbPool>,
    Json(new_link): Json<NewSocialAuth>,
) -> Result<(StatusCode, Json<SocialAuth>), ApiError> {
    let mut conn = pool.get().await?;
    let link = repos::social_auth::create(&mut conn, new_link).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_social_auth(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateSocialAuth>,
) -> Result<Json<SocialAuth>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::social_auth::update(&mut conn, id, changes).await?))
}

pub async fn delete_social_auth(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::social_auth::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
