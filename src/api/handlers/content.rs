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
use crate::models::content::{
    GalleryImage, NewGalleryImage, NewPost, NewPostComment, NewPostLike, PostComment, PostLike,
    UpdateGalleryImage, UpdatePost, UpdatePostComment, UpdatePostLike,
};
use crate::repos;
use crate::views::{self, PostView};

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub author: Option<i64>,
}

pub async fn list_posts(
    State(pool): State<DbPool>,
    Query(query): Query<PostListQuery>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let mut conn = pool.get().await?;
    let rows = repos::content::list_posts(&mut conn, query.author).await?;
    Ok(Json(views::post_views(&mut conn, rows).await?))
}

pub async fn get_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PostView>, ApiError> {
    let mut conn = pool.get().await?;
    let row = repos::content::find_post(&mut conn, id).await?;
    Ok(Json(views::post_view(&mut conn, row).await?))
}

pub async fn create_post(
    State(pool): State<DbPool>,
    Json(new_post): Json<NewPost>,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let mut conn = pool.get().await?;
    let post = repos::content::create_post(&mut conn, new_post).await?;
    let author = repos::users::find(&mut conn, post.author_id).await?;
    let view = views::post_view(&mut conn, (post, author)).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdatePost>,
) -> Result<Json<PostView>, ApiError> {
    let mut conn = pool.get().await?;
    let post = repos::content::update_post(&mut conn, id, changes).await?;
    let author = repos::users::find(&mut conn, post.author_id).await?;
    Ok(Json(views::post_view(&mut conn, (post, author)).await?))
}

pub async fn delete_post(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::content::delete_post(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_gallery(State(pool): State<DbPool>) -> Result<Json<Vec<GalleryImage>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::list_gallery(&mut conn).await?))
}

pub async fn get_gallery_image(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<GalleryImage>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::find_gallery_image(&mut conn, id).await?))
}

pub async fn create_gallery_image(
    State(pool): State<DbPool>,
    Json(new_image): Json<NewGalleryImage>,
) -> Result<(StatusCode, Json<GalleryImage>), ApiError> {
    let mut conn = pool.get().await?;
    let image = repos::content::create_gallery_image(&mut conn, new_image).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn update_gallery_image(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateGalleryImage>,
) -> Result<Json<GalleryImage>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::content::update_gallery_image(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_gallery_image(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::content::delete_gallery_image(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_likes(State(pool): State<DbPool>) -> Result<Json<Vec<PostLike>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::list_likes(&mut conn).await?))
}

pub async fn get_like(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PostLike>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::find_like(&mut conn, id).await?))
}

pub async fn create_like(
    State(pool): State<DbPool>,
    Json(new_like): Json<NewPostLike>,
) -> Result<(StatusCode, Json<PostLike>), ApiError> {
    let mut conn = pool.get().await?;
    let like = repos::content::create_like(&mut conn, new_like).await?;
    Ok((StatusCode::CREATED, Json(like)))
}

pub async fn update_like(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdatePostLike>,
) -> Result<Json<PostLike>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::update_like(&mut conn, id, changes).await?))
}

pub async fn delete_like(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::content::delete_like(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_comments(State(pool): State<DbPool>) -> Result<Json<Vec<PostComment>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::list_comments(&mut conn).await?))
}

pub async fn get_comment(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PostComment>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::content::find_comment(&mut conn, id).await?))
}

pub async fn create_comment(
    State(pool): State<DbPool>,
    Json(new_comment): Json<NewPostComment>,
) -> Result<(StatusCode, Json<PostComment>), ApiError> {
    let mut conn = pool.get().await?;
    let comment = repos::content::create_comment(&mut conn, new_comment).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn update_comment(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdatePostComment>,
) -> Result<Json<PostComment>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::content::update_comment(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_comment(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::content::delete_comment(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
