// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

mod error;
mod handlers;

pub use error::ApiError;

use crate::config::ServerConfig;
use crate::db::DbPool;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Start the API server
pub async fn start_api_server(config: &ServerConfig, pool: DbPool) -> Result<()> {
    // Set up CORS
    let cors = if config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    // Create router with all routes
    let app = Router::new()
        // General routes
        .route("/health", get(handlers::health::health_check))
        // Users and identity
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/api/users/:id",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .patch(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/api/social-auth",
            get(handlers::users::list_social_auth).post(handlers::users::create_social_auth),
        )
        .route(
            "/api/social-auth/:id",
            get(handlers::users::get_social_auth)
                .put(handlers::users::update_social_auth)
                .patch(handlers::users::update_social_auth)
                .delete(handlers::users::delete_social_auth),
        )
        // Profiles
        .route(
            "/api/profiles",
            get(handlers::profiles::list_profiles).post(handlers::profiles::create_profile),
        )
        .route(
            "/api/profiles/:id",
            get(handlers::profiles::get_profile)
                .put(handlers::profiles::update_profile)
                .patch(handlers::profiles::update_profile)
                .delete(handlers::profiles::delete_profile),
        )
        // Games
        .route(
            "/api/games",
            get(handlers::games::list_games).post(handlers::games::create_game),
        )
        .route(
            "/api/games/:id",
            get(handlers::games::get_game)
                .put(handlers::games::update_game)
                .patch(handlers::games::update_game)
                .delete(handlers::games::delete_game),
        )
        .route(
            "/api/user-games",
            get(handlers::games::list_user_games).post(handlers::games::create_user_game),
        )
        .route(
            "/api/user-games/:id",
            get(handlers::games::get_user_game)
                .put(handlers::games::update_user_game)
                .patch(handlers::games::update_user_game)
                .delete(handlers::games::delete_user_game),
        )
        .route(
            "/api/achievements",
            get(handlers::games::list_achievements).post(handlers::games::create_achievement),
        )
        .route(
            "/api/achievements/:id",
            get(handlers::games::get_achievement)
                .put(handlers::games::update_achievement)
                .patch(handlers::games::update_achievement)
                .delete(handlers::games::delete_achievement),
        )
        // Content
        .route(
            "/api/posts",
            get(handlers::content::list_posts).post(handlers::content::create_post),
        )
        .route(
            "/api/posts/:id",
            get(handlers::content::get_post)
                .put(handlers::content::update_post)
                .patch(handlers::content::update_post)
                .delete(handlers::content::delete_post),
        )
        .route(
            "/api/gallery",
            get(handlers::content::list_gallery).post(handlers::content::create_gallery_image),
        )
        .route(
            "/api/gallery/:id",
            get(handlers::content::get_gallery_image)
                .put(handlers::content::update_gallery_image)
                .patch(handlers::content::update_gallery_image)
                .delete(handlers::content::delete_gallery_image),
        )
        .route(
            "/api/post-likes",
            get(handlers::content::list_likes).post(handlers::content::create_like),
        )
        .route(
            "/api/post-likes/:id",
            get(handlers::content::get_like)
                .put(handlers::content::update_like)
                .patch(handlers::content::update_like)
                .delete(handlers::content::delete_like),
        )
        .route(
            "/api/post-comments",
            get(handlers::content::list_comments).post(handlers::content::create_comment),
        )
        .route(
            "/api/post-comments/:id",
            get(handlers::content::get_comment)
                .put(handlers::content::update_comment)
                .patch(handlers::content::update_comment)
                .delete(handlers::content::delete_comment),
        )
        // Subscriptions and purchases
        .route(
            "/api/subscription-plans",
            get(handlers::subscriptions::list_plans).post(handlers::subscriptions::create_plan),
        )
        .route(
            "/api/subscription-plans/:id",
            get(handlers::subscriptions::get_plan)
                .put(handlers::subscriptions::update_plan)
                .patch(handlers::subscriptions::update_plan)
                .delete(handlers::subscriptions::delete_plan),
        )
        .route(
            "/api/subscriptions",
            get(handlers::subscriptions::list_subscriptions)
                .post(handlers::subscriptions::create_subscription),
        )
        .route(
            "/api/subscriptions/:id",
            get(handlers::subscriptions::get_subscription)
                .put(handlers::subscriptions::update_subscription)
                .patch(handlers::subscriptions::update_subscription)
                .delete(handlers::subscriptions::delete_subscription),
        )
        .route(
            "/api/purchases",
            get(handlers::subscriptions::list_purchases)
                .post(handlers::subscriptions::create_purchase),
        )
        .route(
            "/api/purchases/:id",
            get(handlers::subscriptions::get_purchase)
                .put(handlers::subscriptions::update_purchase)
                .patch(handlers::subscriptions::update_purchase)
                .delete(handlers::subscriptions::delete_purchase),
        )
        // Social graph
        .route(
            "/api/follows",
            get(handlers::social::list_follows).post(handlers::social::create_follow),
        )
        .route(
            "/api/follows/:id",
            get(handlers::social::get_follow)
                .put(handlers::social::update_follow)
                .patch(handlers::social::update_follow)
                .delete(handlers::social::delete_follow),
        )
        .route(
            "/api/reviews",
            get(handlers::social::list_reviews).post(handlers::social::create_review),
        )
        .route(
            "/api/reviews/:id",
            get(handlers::social::get_review)
                .put(handlers::social::update_review)
                .patch(handlers::social::update_review)
                .delete(handlers::social::delete_review),
        )
        // Messaging
        .route(
            "/api/conversations",
            get(handlers::messaging::list_conversations)
                .post(handlers::messaging::create_conversation),
        )
        .route(
            "/api/conversations/:id",
            get(handlers::messaging::get_conversation)
                .put(handlers::messaging::update_conversation)
                .patch(handlers::messaging::update_conversation)
                .delete(handlers::messaging::delete_conversation),
        )
        .route(
            "/api/conversation-participants",
            get(handlers::messaging::list_participants)
                .post(handlers::messaging::create_participant),
        )
        .route(
            "/api/conversation-participants/:id",
            get(handlers::messaging::get_participant)
                .put(handlers::messaging::update_participant)
                .patch(handlers::messaging::update_participant)
                .delete(handlers::messaging::delete_participant),
        )
        .route(
            "/api/messages",
            get(handlers::messaging::list_messages).post(handlers::messaging::create_message),
        )
        .route(
            "/api/messages/:id",
            get(handlers::messaging::get_message)
                .put(handlers::messaging::update_message)
                .patch(handlers::messaging::update_message)
                .delete(handlers::messaging::delete_message),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(handlers::notifications::list_notifications)
                .post(handlers::notifications::create_notification),
        )
        .route(
            "/api/notifications/:id",
            get(handlers::notifications::get_notification)
                .put(handlers::notifications::update_notification)
                .patch(handlers::notifications::update_notification)
                .delete(handlers::notifications::delete_notification),
        )
        // Payments
        .route(
            "/api/payment-transactions",
            get(handlers::payments::list_transactions).post(handlers::payments::create_transaction),
        )
        .route(
            "/api/payment-transactions/:id",
            get(handlers::payments::get_transaction)
                .put(handlers::payments::update_transaction)
                .patch(handlers::payments::update_transaction)
                .delete(handlers::payments::delete_transaction),
        )
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Get bind address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    // Start server
    info!("Starting API server on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
