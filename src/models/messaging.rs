// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{conversation_participants, conversations, messages};

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = conversations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Conversation {
    pub id: i64,
    pub is_group: bool,
    pub title: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = conversations)]
pub struct NewConversation {
    pub is_group: Option<bool>,
    pub title: Option<String>,
    pub created_by: i64,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = conversations)]
pub struct UpdateConversation {
    pub is_group: Option<bool>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = conversation_participants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ConversationParticipant {
    pub id: i64,
    pub conversation_id: i64,
    pub user_id: i64,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = conversation_participants)]
pub struct NewConversationParticipant {
    pub conversation_id: i64,
    pub user_id: i64,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = conversation_participants)]
pub struct UpdateConversationParticipant {
    pub conversation_id: Option<i64>,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub attachment_url: Option<String>,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = messages)]
pub struct NewMessage {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub attachment_url: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = messages)]
pub struct UpdateMessage {
    pub content: Option<String>,
    pub attachment_url: Option<String>,
    pub is_edited: Option<bool>,
}
