// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::{allow_tables_to_appear_in_same_query, joinable, table};

table! {
    users (id) {
        id -> Int8,
        username -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        avatar_url -> Nullable<Varchar>,
        bio -> Nullable<Text>,
        is_2fa_enabled -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    profiles (user_id) {
        user_id -> Int8,
        country -> Nullable<Varchar>,
        city -> Nullable<Varchar>,
        timezone -> Nullable<Varchar>,
        preferred_language -> Nullable<Varchar>,
    }
}

table! {
    social_auth (id) {
        id -> Int8,
        user_id -> Int8,
        provider -> Varchar,
        provider_user_id -> Varchar,
        created_at -> Timestamptz,
    }
}

table! {
    games (id) {
        id -> Int8,
        name -> Varchar,
        description -> Nullable<Text>,
        icon_url -> Nullable<Varchar>,
    }
}

table! {
    user_games (id) {
        id -> Int8,
        user_id -> Int8,
        game_id -> Int8,
        playtime_hours -> Int4,
        current_rank -> Nullable<Varchar>,
        max_rank -> Nullable<Varchar>,
        is_primary -> Bool,
    }
}

table! {
    achievements (id) {
        id -> Int8,
        user_game_id -> Int8,
        title -> Varchar,
        description -> Nullable<Text>,
        icon_url -> Nullable<Varchar>,
        unlocked_at -> Date,
    }
}

table! {
    posts (id) {
        id -> Int8,
        author_id -> Int8,
        title -> Varchar,
        content -> Text,
        preview_image_url -> Nullable<Varchar>,
        access_type -> Varchar,
        price -> Numeric,
        is_published -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        published_at -> Nullable<Timestamptz>,
    }
}

table! {
    gallery_images (id) {
        id -> Int8,
        user_id -> Int8,
        image_url -> Varchar,
        caption -> Nullable<Varchar>,
        access_type -> Varchar,
        price -> Numeric,
        uploaded_at -> Timestamptz,
    }
}

table! {
    subscription_plans (id) {
        id -> Int8,
        author_id -> Int8,
        title -> Varchar,
        description -> Nullable<Text>,
        price_per_month -> Numeric,
        is_active -> Bool,
    }
}

table! {
    subscriptions (id) {
        id -> Int8,
        subscriber_id -> Int8,
        plan_id -> Int8,
        status -> Varchar,
        starts_at -> Timestamptz,
        ends_at -> Timestamptz,
        created_at -> Timestamptz,
    }
}

table! {
    purchases (id) {
        id -> Int8,
        user_id -> Int8,
        content_type -> Varchar,
        content_id -> Int8,
        purchase_price -> Numeric,
        purchased_at -> Timestamptz,
    }
}

table! {
    follows (id) {
        id -> Int8,
        follower_id -> Int8,
        following_id -> Int8,
        created_at -> Timestamptz,
    }
}

table! {
    conversations (id) {
        id -> Int8,
        is_group -> Bool,
        title -> Nullable<Varchar>,
        created_by -> Int8,
        created_at -> Timestamptz,
    }
}

table! {
    conversation_participants (id) {
        id -> Int8,
        conversation_id -> Int8,
        user_id -> Int8,
        joined_at -> Timestamptz,
    }
}

table! {
    messages (id) {
        id -> Int8,
        conversation_id -> Int8,
        sender_id -> Int8,
        content -> Text,
        attachment_url -> Nullable<Varchar>,
        is_edited -> Bool,
        created_at -> Timestamptz,
    }
}

table! {
    notifications (id) {
        id -> Int8,
        user_id -> Int8,
        #[sql_name = "type"]
        kind -> Varchar,
        title -> Varchar,
        message -> Nullable<Text>,
        related_entity_type -> Nullable<Varchar>,
        related_entity_id -> Nullable<Int8>,
        is_read -> Bool,
        created_at -> Timestamptz,
    }
}

table! {
    reviews (id) {
        id -> Int8,
        author_id -> Int8,
        target_id -> Int8,
        rating -> Int2,
        comment -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

table! {
    post_likes (id) {
        id -> Int8,
        post_id -> Int8,
        user_id -> Int8,
        created_at -> Timestamptz,
    }
}

table! {
    post_comments (id) {
        id -> Int8,
        post_id -> Int8,
        author_id -> Int8,
        parent_comment_id -> Nullable<Int8>,
        content -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    payment_transactions (id) {
        id -> Int8,
        user_id -> Int8,
        #[sql_name = "type"]
        kind -> Varchar,
        amount -> Numeric,
        currency -> Varchar,
        status -> Varchar,
        payment_system -> Nullable<Varchar>,
        payment_system_id -> Nullable<Varchar>,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

joinable!(profiles -> users (user_id));
joinable!(social_auth -> users (user_id));
joinable!(user_games -> users (user_id));
joinable!(user_games -> games (game_id));
joinable!(achievements -> user_games (user_game_id));
joinable!(posts -> users (author_id));
joinable!(gallery_images -> users (user_id));
joinable!(subscription_plans -> users (author_id));
joinable!(subscriptions -> users (subscriber_id));
joinable!(subscriptions -> subscription_plans (plan_id));
joinable!(purchases -> users (user_id));
joinable!(conversations -> users (created_by));
joinable!(conversation_participants -> conversations (conversation_id));
joinable!(conversation_participants -> users (user_id));
joinable!(messages -> conversations (conversation_id));
joinable!(messages -> users (sender_id));
joinable!(notifications -> users (user_id));
joinable!(post_likes -> posts (post_id));
joinable!(post_likes -> users (user_id));
joinable!(post_comments -> posts (post_id));
joinable!(post_comments -> users (author_id));
joinable!(payment_transactions -> users (user_id));

// follows and reviews carry two foreign keys into users, so neither gets a
// joinable! declaration; their queries filter by id sets instead of joining.

allow_tables_to_appear_in_same_query!(
    users,
    profiles,
    social_auth,
    games,
    user_games,
    achievements,
    posts,
    gallery_images,
    subscription_plans,
    subscriptions,
    purchases,
    follows,
    conversations,
    conversation_participants,
    messages,
    notifications,
    reviews,
    post_likes,
    post_comments,
    payment_transactions,
);
