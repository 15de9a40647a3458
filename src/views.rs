// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

//! Response representations. Each view lists its fields explicitly; related
//! users are embedded as [`PublicUser`] rather than bare ids, and the
//! aggregate fields (follower count, rating, like/comment counts) are
//! computed per request from the referencing rows.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel_async::AsyncPgConnection;
use serde::Serialize;

use crate::models::content::ContentPost;
use crate::models::game::{Game, UserGame};
use crate::models::profile::Profile;
use crate::models::subscription::SubscriptionPlan;
use crate::models::user::User;
use crate::repos::{self, RepoResult};

/// The user fields every endpoint is allowed to expose. Phone and the 2FA
/// flag stay internal.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            username: user.username,
            email: user.email,
            avatar_url: user.avatar_url,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser::from(user.clone())
    }
}

#[derive(Debug, Serialize)]
pub struct UserGameView {
    pub id: i64,
    pub user: PublicUser,
    pub game: Game,
    pub playtime_hours: i32,
    pub current_rank: Option<String>,
    pub max_rank: Option<String>,
    pub is_primary: bool,
}

pub fn user_game_view(user_game: UserGame, user: &User, game: Game) -> UserGameView {
    UserGameView {
        id: user_game.id,
        user: PublicUser::from(user),
        game,
        playtime_hours: user_game.playtime_hours,
        current_rank: user_game.current_rank,
        max_rank: user_game.max_rank,
        is_primary: user_game.is_primary,
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user: PublicUser,
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
    pub user_games: Vec<UserGameView>,
    pub followers_count: i64,
    pub rating: f64,
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: i64,
    pub author: PublicUser,
    pub title: String,
    pub content: String,
    pub preview_image_url: Option<String>,
    pub access_type: String,
    pub price: BigDecimal,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub likes_count: i64,
    pub comments_count: i64,
}

#[derive(Debug, Serialize)]
pub struct PlanView {
    pub id: i64,
    pub author: PublicUser,
    pub title: String,
    pub description: Option<String>,
    pub price_per_month: BigDecimal,
    pub is_active: bool,
}

/// Expand profiles into their full representation. The relation expansions
/// run as three batched queries over the whole row set, not per profile.
pub async fn profile_views(
    conn: &mut AsyncPgConnection,
    rows: Vec<(Profile, User)>,
) -> RepoResult<Vec<ProfileView>> {
    let user_ids: Vec<i64> = rows.iter().map(|(profile, _)| profile.user_id).collect();

    let mut games_by_user: HashMap<i64, Vec<UserGameView>> = HashMap::new();
    for (user_game, user, game) in repos::games::user_games_for_users(conn, &user_ids).await? {
        games_by_user
            .entry(user_game.user_id)
            .or_default()
            .push(user_game_view(user_game, &user, game));
    }

    let follower_counts = repos::social::follower_counts(conn, &user_ids).await?;
    let ratings = repos::social::ratings_by_target(conn, &user_ids).await?;

    Ok(rows
        .into_iter()
        .map(|(profile, user)| ProfileView {
            user_games: games_by_user.remove(&profile.user_id).unwrap_or_default(),
            followers_count: follower_counts.get(&profile.user_id).copied().unwrap_or(0),
            rating: ratings.get(&profile.user_id).copied().unwrap_or(0.0),
            user: PublicUser::from(user),
            country: profile.country,
            city: profile.city,
            timezone: profile.timezone,
            preferred_language: profile.preferred_language,
        })
        .collect())
}

pub async fn profile_view(
    conn: &mut AsyncPgConnection,
    row: (Profile, User),
) -> RepoResult<ProfileView> {
    let mut views = profile_views(conn, vec![row]).await?;
    Ok(views.remove(0))
}

/// Expand posts with their author and read-time like/comment counts.
pub async fn post_views(
    conn: &mut AsyncPgConnection,
    rows: Vec<(ContentPost, User)>,
) -> RepoResult<Vec<PostView>> {
    let post_ids: Vec<i64> = rows.iter().map(|(post, _)| post.id).collect();
    let likes = repos::content::like_counts(conn, &post_ids).await?;
    let comments = repos::content::comment_counts(conn, &post_ids).await?;

    Ok(rows
        .into_iter()
        .map(|(post, author)| PostView {
            likes_count: likes.get(&post.id).copied().unwrap_or(0),
            comments_count: comments.get(&post.id).copied().unwrap_or(0),
            id: post.id,
            author: PublicUser::from(author),
            title: post.title,
            content: post.content,
            preview_image_url: post.preview_image_url,
            access_type: post.access_type,
            price: post.price,
            is_published: post.is_published,
            created_at: post.created_at,
            updated_at: post.updated_at,
            published_at: post.published_at,
        })
        .collect())
}

pub async fn post_view(
    conn: &mut AsyncPgConnection,
    row: (ContentPost, User),
) -> RepoResult<PostView> {
    let mut views = post_views(conn, vec![row]).await?;
    Ok(views.remove(0))
}

pub fn plan_view(plan: SubscriptionPlan, author: User) -> PlanView {
    PlanView {
        id: plan.id,
        author: PublicUser::from(author),
        title: plan.title,
        description: plan.description,
        price_per_month: plan.price_per_month,
        is_active: plan.is_active,
    }
}

#[cfg(test)]
mod tests {
    use super::PublicUser;
    use crate::models::user::User;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "shroud".to_string(),
            email: "shroud@example.com".to_string(),
            phone: Some("+70000000000".to_string()),
            avatar_url: None,
            bio: Some("fps main".to_string()),
            is_2fa_enabled: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn public_user_keeps_only_public_fields() {
        let view = PublicUser::from(sample_user());
        let json = serde_json::to_value(&view).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert!(object.contains_key("username"));
        assert!(object.contains_key("email"));
        assert!(!object.contains_key("phone"));
        assert!(!object.contains_key("is_2fa_enabled"));
    }
}
