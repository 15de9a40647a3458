// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

//! Integration tests against a live PostgreSQL instance.
//!
//! Run with DATABASE_URL pointing at a disposable database:
//!   DATABASE_URL=postgres://... cargo test -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use gamehub_api::config::DatabaseConfig;
use gamehub_api::db::{Database, DbConnection};
use gamehub_api::models::content::{NewPost, NewPostLike};
use gamehub_api::models::profile::NewProfile;
use gamehub_api::models::social::NewReview;
use gamehub_api::models::user::{NewUser, User};
use gamehub_api::repos::{self, RepoError};

async fn connect() -> Database {
    let config = DatabaseConfig {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database"),
        max_connections: 4,
    };
    Database::new(&config).await.expect("database setup failed")
}

fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}_{nanos}")
}

async fn create_user(conn: &mut DbConnection, prefix: &str) -> User {
    let name = unique(prefix);
    repos::users::create(
        conn,
        NewUser {
            username: name.clone(),
            email: format!("{name}@example.com"),
            phone: None,
            avatar_url: None,
            bio: None,
            is_2fa_enabled: None,
        },
    )
    .await
    .expect("user creation failed")
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn duplicate_username_is_a_validation_error() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let user = create_user(&mut conn, "dup").await;
    let result = repos::users::create(
        &mut conn,
        NewUser {
            username: user.username.clone(),
            email: format!("other_{}@example.com", user.username),
            phone: None,
            avatar_url: None,
            bio: None,
            is_2fa_enabled: None,
        },
    )
    .await;

    assert!(matches!(result, Err(RepoError::Validation(_))));
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn deleting_a_user_cascades_to_owned_rows() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let user = create_user(&mut conn, "cascade").await;
    repos::profiles::create(
        &mut conn,
        NewProfile {
            user_id: user.id,
            country: Some("Finland".to_string()),
            city: None,
            timezone: None,
            preferred_language: None,
        },
    )
    .await
    .unwrap();

    repos::users::delete(&mut conn, user.id).await.unwrap();

    let profile = repos::profiles::find(&mut conn, user.id).await;
    assert!(matches!(profile, Err(RepoError::NotFound { .. })));
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn like_count_follows_the_rows() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let author = create_user(&mut conn, "author").await;
    let fan_a = create_user(&mut conn, "fan_a").await;
    let fan_b = create_user(&mut conn, "fan_b").await;

    let post = repos::content::create_post(
        &mut conn,
        NewPost {
            author_id: author.id,
            title: "patch notes".to_string(),
            content: "nerfs everywhere".to_string(),
            preview_image_url: None,
            access_type: None,
            price: None,
            is_published: Some(true),
            published_at: None,
        },
    )
    .await
    .unwrap();

    let like = repos::content::create_like(
        &mut conn,
        NewPostLike {
            post_id: post.id,
            user_id: fan_a.id,
        },
    )
    .await
    .unwrap();
    repos::content::create_like(
        &mut conn,
        NewPostLike {
            post_id: post.id,
            user_id: fan_b.id,
        },
    )
    .await
    .unwrap();

    let counts = repos::content::like_counts(&mut conn, &[post.id]).await.unwrap();
    assert_eq!(counts.get(&post.id), Some(&2));

    repos::content::delete_like(&mut conn, like.id).await.unwrap();
    let counts = repos::content::like_counts(&mut conn, &[post.id]).await.unwrap();
    assert_eq!(counts.get(&post.id), Some(&1));
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn rating_is_the_rounded_mean_of_reviews() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let target = create_user(&mut conn, "target").await;
    for rating in [4i16, 5, 3] {
        let reviewer = create_user(&mut conn, "reviewer").await;
        repos::social::create_review(
            &mut conn,
            NewReview {
                author_id: reviewer.id,
                target_id: target.id,
                rating,
                comment: None,
            },
        )
        .await
        .unwrap();
    }

    let ratings = repos::social::ratings_by_target(&mut conn, &[target.id]).await.unwrap();
    assert_eq!(ratings.get(&target.id), Some(&4.0));

    let unreviewed = create_user(&mut conn, "unreviewed").await;
    let ratings = repos::social::ratings_by_target(&mut conn, &[unreviewed.id]).await.unwrap();
    assert_eq!(ratings.get(&unreviewed.id), Some(&0.0));
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn review_rating_must_stay_in_range() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let target = create_user(&mut conn, "rated").await;

    for (rating, ok) in [(1i16, true), (5, true), (6, false)] {
        let author = create_user(&mut conn, "critic").await;
        let result = repos::social::create_review(
            &mut conn,
            NewReview {
                author_id: author.id,
                target_id: target.id,
                rating,
                comment: None,
            },
        )
        .await;

        if ok {
            assert!(result.is_ok(), "rating {rating} should be accepted");
        } else {
            assert!(
                matches!(result, Err(RepoError::Validation(_))),
                "rating {rating} should be rejected"
            );
        }
    }
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn post_listing_filters_by_author() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let alice = create_user(&mut conn, "alice").await;
    let bob = create_user(&mut conn, "bob").await;

    for (author, title) in [(&alice, "a post"), (&bob, "b post")] {
        repos::content::create_post(
            &mut conn,
            NewPost {
                author_id: author.id,
                title: title.to_string(),
                content: "...".to_string(),
                preview_image_url: None,
                access_type: None,
                price: None,
                is_published: None,
                published_at: None,
            },
        )
        .await
        .unwrap();
    }

    let posts = repos::content::list_posts(&mut conn, Some(alice.id)).await.unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|(post, _)| post.author_id == alice.id));
}

#[test_log::test(tokio::test)]
#[ignore = "requires database"]
async fn one_follow_row_per_pair() {
    let db = connect().await;
    let mut conn = db.pool().get().await.unwrap();

    let follower = create_user(&mut conn, "follower").await;
    let followed = create_user(&mut conn, "followed").await;

    repos::social::create_follow(
        &mut conn,
        gamehub_api::models::social::NewFollow {
            follower_id: follower.id,
            following_id: followed.id,
        },
    )
    .await
    .unwrap();

    let duplicate = repos::social::create_follow(
        &mut conn,
        gamehub_api::models::social::NewFollow {
            follower_id: follower.id,
            following_id: followed.id,
        },
    )
    .await;
    assert!(matches!(duplicate, Err(RepoError::Validation(_))));

    let counts = repos::social::follower_counts(&mut conn, &[followed.id]).await.unwrap();
    assert_eq!(counts.get(&followed.id), Some(&1));
}
