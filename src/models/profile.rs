// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::profiles;

/// Gamer profile; keyed by the owning user, at most one per user.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub user_id: i64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub user_id: i64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = profiles)]
pub struct UpdateProfile {
    pub country: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub preferred_language: Option<String>,
}
