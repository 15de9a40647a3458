// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::social_auth;

/// Link between a user and an external identity provider.
/// (provider, provider_user_id) is unique across the platform.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = social_auth)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SocialAuth {
    pub id: i64,
    pub user_id: i64,
    pub provider: String,
    pub provider_user_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = social_auth)]
pub struct NewSocialAuth {
    pub user_id: i64,
    pub provider: String,
    pub provider_user_id: String,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = social_auth)]
pub struct UpdateSocialAuth {
    pub provider: Option<String>,
    pub provider_user_id: Option<String>,
}
