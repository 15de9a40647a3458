// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{achievements, games, user_games};

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = games)]
pub struct NewGame {
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = games)]
pub struct UpdateGame {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

/// Association between a user and a game they play; one row per (user, game).
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = user_games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserGame {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    pub playtime_hours: i32,
    pub current_rank: Option<String>,
    pub max_rank: Option<String>,
    pub is_primary: bool,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = user_games)]
pub struct NewUserGame {
    pub user_id: i64,
    pub game_id: i64,
    pub playtime_hours: Option<i32>,
    pub current_rank: Option<String>,
    pub max_rank: Option<String>,
    pub is_primary: Option<bool>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = user_games)]
pub struct UpdateUserGame {
    pub playtime_hours: Option<i32>,
    pub current_rank: Option<String>,
    pub max_rank: Option<String>,
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = achievements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Achievement {
    pub id: i64,
    pub user_game_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub unlocked_at: NaiveDate,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = achievements)]
pub struct NewAchievement {
    pub user_game_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = achievements)]
pub struct UpdateAchievement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub unlocked_at: Option<NaiveDate>,
}
