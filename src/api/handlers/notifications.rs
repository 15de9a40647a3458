// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::notification::{NewNotification, Notification, UpdateNotification};
use crate::repos;

pub async fn list_notifications(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::notifications::list(&mut conn).await?))
}

pub async fn get_notification(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Notification>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::notifications::find(&mut conn, id).await?))
}

pub async fn create_notification(
    State(pool): State<DbPool>,
    Json(new_notification): Json<NewNotification>,
) -> Result<(StatusCode, Json<Notification>), ApiError> {
    let mut conn = pool.get().await?;
    let notification = repos::notifications::create(&mut conn, new_notification).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

pub async fn update_notification(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateNotification>,
) -> Result<Json<Notification>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::notifications::update(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_notification(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::notifications::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
