// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{follows, reviews};

/// Follow edge in the social graph; one row per (follower, following) pair.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = follows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Follow {
    pub id: i64,
    pub follower_id: i64,
    pub following_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = follows)]
pub struct NewFollow {
    pub follower_id: i64,
    pub following_id: i64,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = follows)]
pub struct UpdateFollow {
    pub follower_id: Option<i64>,
    pub following_id: Option<i64>,
}

/// User-to-user review; each author may rate a target once, 1 through 5.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i64,
    pub author_id: i64,
    pub target_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = reviews)]
pub struct NewReview {
    pub author_id: i64,
    pub target_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = reviews)]
pub struct UpdateReview {
    pub rating: Option<i16>,
    pub comment: Option<String>,
}
