// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::content::{
    ContentPost, GalleryImage, NewGalleryImage, NewPost, NewPostComment, NewPostLike, PostComment,
    PostLike, UpdateGalleryImage, UpdatePost, UpdatePostComment, UpdatePostLike,
};
use crate::models::user::User;
use crate::schema::{gallery_images, post_comments, post_likes, posts, users};

use super::{RepoError, RepoResult};

pub async fn list_posts(
    conn: &mut AsyncPgConnection,
    author: Option<i64>,
) -> RepoResult<Vec<(ContentPost, User)>> {
    let mut query = posts::table
        .inner_join(users::table)
        .select((ContentPost::as_select(), User::as_select()))
        .order(posts::id.asc())
        .into_boxed();

    if let Some(author_id) = author {
        query = query.filter(posts::author_id.eq(author_id));
    }

    query.load(conn).await.map_err(RepoError::Database)
}

pub async fn find_post(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<(ContentPost, User)> {
    posts::table
        .inner_join(users::table)
        .filter(posts::id.eq(id))
        .select((ContentPost::as_select(), User::as_select()))
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "post", id))
}

pub async fn create_post(conn: &mut AsyncPgConnection, new_post: NewPost) -> RepoResult<ContentPost> {
    diesel::insert_into(posts::table)
        .values(&new_post)
        .returning(ContentPost::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_post(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdatePost,
) -> RepoResult<ContentPost> {
    diesel::update(posts::table.find(id))
        .set((&changes, posts::updated_at.eq(diesel::dsl::now)))
        .returning(ContentPost::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "post", id))
}

pub async fn delete_post(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(posts::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("post", id));
    }
    Ok(())
}

/// Like totals for a batch of posts, computed at read time. Posts without
/// likes are absent from the map.
pub async fn like_counts(
    conn: &mut AsyncPgConnection,
    post_ids: &[i64],
) -> RepoResult<HashMap<i64, i64>> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = post_likes::table
        .filter(post_likes::post_id.eq_any(post_ids.to_vec()))
        .group_by(post_likes::post_id)
        .select((post_likes::post_id, count_star()))
        .load::<(i64, i64)>(conn)
        .await
        .map_err(RepoError::Database)?;
    Ok(rows.into_iter().collect())
}

pub async fn comment_counts(
    conn: &mut AsyncPgConnection,
    post_ids: &[i64],
) -> RepoResult<HashMap<i64, i64>> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows = post_comments::table
        .filter(post_comments::post_id.eq_any(post_ids.to_vec()))
        .group_by(post_comments::post_id)
        .select((post_comments::post_id, count_star()))
        .load::<(i64, i64)>(conn)
        .await
        .map_err(RepoError::Database)?;
    Ok(rows.into_iter().collect())
}

pub async fn list_gallery(conn: &mut AsyncPgConnection) -> RepoResult<Vec<GalleryImage>> {
    gallery_images::table
        .order(gallery_images::id.asc())
        .select(GalleryImage::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_gallery_image(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> RepoResult<GalleryImage> {
    gallery_images::table
        .find(id)
        .select(GalleryImage::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "gallery image", id))
}

pub async fn create_gallery_image(
    conn: &mut AsyncPgConnection,
    new_image: NewGalleryImage,
) -> RepoResult<GalleryImage> {
    diesel::insert_into(gallery_images::table)
        .values(&new_image)
        .returning(GalleryImage::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_gallery_image(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateGalleryImage,
) -> RepoResult<GalleryImage> {
    diesel::update(gallery_images::table.find(id))
        .set(&changes)
        .returning(GalleryImage::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "gallery image", id))
}

pub async fn delete_gallery_image(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(gallery_images::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("gallery image", id));
    }
    Ok(())
}

pub async fn list_likes(conn: &mut AsyncPgConnection) -> RepoResult<Vec<PostLike>> {
    post_likes::table
        .order(post_likes::id.asc())
        .select(PostLike::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_like(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<PostLike> {
    post_likes::table
        .find(id)
        .select(PostLike::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "post like", id))
}

pub async fn create_like(conn: &mut AsyncPgConnection, new_like: NewPostLike) -> RepoResult<PostLike> {
    diesel::insert_into(post_likes::table)
        .values(&new_like)
        .returning(PostLike::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_like(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdatePostLike,
) -> RepoResult<PostLike> {
    diesel::update(post_likes::table.find(id))
        .set(&changes)
        .returning(PostLike::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "post like", id))
}

pub async fn delete_like(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(post_likes::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("post like", id));
    }
    Ok(())
}

pub async fn list_comments(conn: &mut AsyncPgConnection) -> RepoResult<Vec<PostComment>> {
    post_comments::table
        .order(post_comments::id.asc())
        .select(PostComment::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_comment(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<PostComment> {
    post_comments::table
        .find(id)
        .select(PostComment::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "post comment", id))
}

pub async fn create_comment(
    conn: &mut AsyncPgConnection,
    new_comment: NewPostComment,
) -> RepoResult<PostComment> {
    diesel::insert_into(post_comments::table)
        .values(&new_comment)
        .returning(PostComment::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_comment(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdatePostComment,
) -> RepoResult<PostComment> {
    diesel::update(post_comments::table.find(id))
        .set(&changes)
        .returning(PostComment::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "post comment", id))
}

pub async fn delete_comment(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(post_comments::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("post comment", id));
    }
    Ok(())
}
