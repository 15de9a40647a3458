// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{gallery_images, post_comments, post_likes, posts};

/// A published piece of content. `access_type` is one of `free`,
/// `subscription` or `pay_per_view`; `price` only matters for the paid tiers.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ContentPost {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub preview_image_url: Option<String>,
    pub access_type: String,
    pub price: BigDecimal,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub preview_image_url: Option<String>,
    pub access_type: Option<String>,
    pub price: Option<BigDecimal>,
    pub is_published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = posts)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub preview_image_url: Option<String>,
    pub access_type: Option<String>,
    pub price: Option<BigDecimal>,
    pub is_published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = gallery_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GalleryImage {
    pub id: i64,
    pub user_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub access_type: String,
    pub price: BigDecimal,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = gallery_images)]
pub struct NewGalleryImage {
    pub user_id: i64,
    pub image_url: String,
    pub caption: Option<String>,
    pub access_type: Option<String>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = gallery_images)]
pub struct UpdateGalleryImage {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub access_type: Option<String>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = post_likes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostLike {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = post_likes)]
pub struct NewPostLike {
    pub post_id: i64,
    pub user_id: i64,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = post_likes)]
pub struct UpdatePostLike {
    pub post_id: Option<i64>,
    pub user_id: Option<i64>,
}

/// Comment on a post; `parent_comment_id` threads replies under another
/// comment of the same post.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = post_comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostComment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub parent_comment_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = post_comments)]
pub struct NewPostComment {
    pub post_id: i64,
    pub author_id: i64,
    pub parent_comment_id: Option<i64>,
    pub content: String,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = post_comments)]
pub struct UpdatePostComment {
    pub content: Option<String>,
}
