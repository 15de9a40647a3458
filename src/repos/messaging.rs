// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::messaging::{
    Conversation, ConversationParticipant, Message, NewConversation, NewConversationParticipant,
    NewMessage, UpdateConversation, UpdateConversationParticipant, UpdateMessage,
};
use crate::schema::{conversation_participants, conversations, messages};

use super::{RepoError, RepoResult};

pub async fn list_conversations(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Conversation>> {
    conversations::table
        .order(conversations::id.asc())
        .select(Conversation::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_conversation(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Conversation> {
    conversations::table
        .find(id)
        .select(Conversation::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "conversation", id))
}

pub async fn create_conversation(
    conn: &mut AsyncPgConnection,
    new_conversation: NewConversation,
) -> RepoResult<Conversation> {
    diesel::insert_into(conversations::table)
        .values(&new_conversation)
        .returning(Conversation::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_conversation(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateConversation,
) -> RepoResult<Conversation> {
    diesel::update(conversations::table.find(id))
        .set(&changes)
        .returning(Conversation::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "conversation", id))
}

pub async fn delete_conversation(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(conversations::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("conversation", id));
    }
    Ok(())
}

pub async fn list_participants(
    conn: &mut AsyncPgConnection,
) -> RepoResult<Vec<ConversationParticipant>> {
    conversation_participants::table
        .order(conversation_participants::id.asc())
        .select(ConversationParticipant::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_participant(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> RepoResult<ConversationParticipant> {
    conversation_participants::table
        .find(id)
        .select(ConversationParticipant::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "conversation participant", id))
}

pub async fn create_participant(
    conn: &mut AsyncPgConnection,
    new_participant: NewConversationParticipant,
) -> RepoResult<ConversationParticipant> {
    diesel::insert_into(conversation_participants::table)
        .values(&new_participant)
        .returning(ConversationParticipant::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_participant(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateConversationParticipant,
) -> RepoResult<ConversationParticipant> {
    diesel::update(conversation_participants::table.find(id))
        .set(&changes)
        .returning(ConversationParticipant::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "conversation participant", id))
}

pub async fn delete_participant(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(conversation_participants::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("conversation participant", id));
    }
    Ok(())
}

pub async fn list_messages(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Message>> {
    messages::table
        .order(messages::id.asc())
        .select(Message::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_message(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Message> {
    messages::table
        .find(id)
        .select(Message::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "message", id))
}

pub async fn create_message(
    conn: &mut AsyncPgConnection,
    new_message: NewMessage,
) -> RepoResult<Message> {
    diesel::insert_into(messages::table)
        .values(&new_message)
        .returning(Message::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_message(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateMessage,
) -> RepoResult<Message> {
    diesel::update(messages::table.find(id))
        .set(&changes)
        .returning(Message::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "message", id))
}

pub async fn delete_message(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(messages::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("message", id));
    }
    Ok(())
}
