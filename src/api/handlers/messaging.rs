// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::messaging::{
    Conversation, ConversationParticipant, Message, NewConversation, NewConversationParticipant,
    NewMessage, UpdateConversation, UpdateConversationParticipant, UpdateMessage,
};
use crate::repos;

pub async fn list_conversations(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Conversation>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::list_conversations(&mut conn).await?))
}

pub async fn get_conversation(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Conversation>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::find_conversation(&mut conn, id).await?))
}

pub async fn create_conversation(
    State(pool): State<DbPool>,
    Json(new_conversation): Json<NewConversation>,
) -> Result<(StatusCode, Json<Conversation>), ApiError> {
    let mut conn = pool.get().await?;
    let conversation = repos::messaging::create_conversation(&mut conn, new_conversation).await?;
    Ok((StatusCode::CREATED, Json(conversation)))
}

pub async fn update_conversation(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateConversation>,
) -> Result<Json<Conversation>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::messaging::update_conversation(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_conversation(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::messaging::delete_conversation(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_participants(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<ConversationParticipant>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::list_participants(&mut conn).await?))
}

pub async fn get_participant(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<ConversationParticipant>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::find_participant(&mut conn, id).await?))
}

pub async fn create_participant(
    State(pool): State<DbPool>,
    Json(new_participant): Json<NewConversationParticipant>,
) -> Result<(StatusCode, Json<ConversationParticipant>), ApiError> {
    let mut conn = pool.get().await?;
    let participant = repos::messaging::create_participant(&mut conn, new_participant).await?;
    Ok((StatusCode::CREATED, Json(participant)))
}

pub async fn update_participant(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateConversationParticipant>,
) -> Result<Json<ConversationParticipant>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::messaging::update_participant(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_participant(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::messaging::delete_participant(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_messages(State(pool): State<DbPool>) -> Result<Json<Vec<Message>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::list_messages(&mut conn).await?))
}

pub async fn get_message(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::messaging::find_message(&mut conn, id).await?))
}

pub async fn create_message(
    State(pool): State<DbPool>,
    Json(new_message): Json<NewMessage>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let mut conn = pool.get().await?;
    let message = repos::messaging::create_message(&mut conn, new_message).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

pub async fn update_message(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateMessage>,
) -> Result<Json<Message>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::messaging::update_message(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_message(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::messaging::delete_message(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
