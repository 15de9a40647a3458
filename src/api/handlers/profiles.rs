// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::profile::{NewProfile, UpdateProfile};
use crate::repos::{self, profiles::ProfileFilter};
use crate::views::{self, ProfileView};

#[derive(Debug, Deserialize)]
pub struct ProfileListQuery {
    pub search: Option<String>,
    pub game: Option<i64>,
    pub sort_by: Option<String>,
}

/// List profiles, optionally filtered by username/game-name search or by
/// game id, in the requested order.
pub async fn list_profiles(
    State(pool): State<DbPool>,
    Query(query): Query<ProfileListQuery>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let filter = ProfileFilter {
        search: query.search,
        game: query.game,
        sort_by: query.sort_by,
    };

    let mut conn = pool.get().await?;
    let rows = repos::profiles::list(&mut conn, &filter).await?;
    Ok(Json(views::profile_views(&mut conn, rows).await?))
}

pub async fn get_profile(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<ProfileView>, ApiError> {
    let mut conn = pool.get().await?;
    let row = repos::profiles::find(&mut conn, id).await?;
    Ok(Json(views::profile_view(&mut conn, row).await?))
}

pub async fn create_profile(
    State(pool): State<DbPool>,
    Json(new_profile): Json<NewProfile>,
) -> Result<(StatusCode, Json<ProfileView>), ApiError> {
    let mut conn = pool.get().await?;
    let profile = repos::profiles::create(&mut conn, new_profile).await?;
    let user = repos::users::find(&mut conn, profile.user_id).await?;
    let view = views::profile_view(&mut conn, (profile, user)).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_profile(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateProfile>,
) -> Result<Json<ProfileView>, ApiError> {
    let mut conn = pool.get().await?;
    let profile = repos::profiles::update(&mut conn, id, changes).await?;
    let user = repos::users::find(&mut conn, profile.user_id).await?;
    Ok(Json(views::profile_view(&mut conn, (profile, user)).await?))
}

pub async fn delete_profile(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::profiles::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
