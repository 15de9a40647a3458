// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::notification::{NewNotification, Notification, UpdateNotification};
use crate::schema::notifications;

use super::{RepoError, RepoResult};

pub async fn list(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Notification>> {
    notifications::table
        .order(notifications::id.asc())
        .select(Notification::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Notification> {
    notifications::table
        .find(id)
        .select(Notification::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "notification", id))
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_notification: NewNotification,
) -> RepoResult<Notification> {
    diesel::insert_into(notifications::table)
        .values(&new_notification)
        .returning(Notification::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateNotification,
) -> RepoResult<Notification> {
    diesel::update(notifications::table.find(id))
        .set(&changes)
        .returning(Notification::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "notification", id))
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(notifications::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("notification", id));
    }
    Ok(())
}
