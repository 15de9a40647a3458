// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::user::{NewUser, UpdateUser, User};
use crate::schema::users;

use super::{RepoError, RepoResult};

pub async fn list(conn: &mut AsyncPgConnection) -> RepoResult<Vec<User>> {
    users::table
        .order(users::id.asc())
        .select(User::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<User> {
    users::table
        .find(id)
        .select(User::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "user", id))
}

pub async fn create(conn: &mut AsyncPgConnection, new_user: NewUser) -> RepoResult<User> {
    diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateUser,
) -> RepoResult<User> {
    diesel::update(users::table.find(id))
        .set((&changes, users::updated_at.eq(diesel::dsl::now)))
        .returning(User::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "user", id))
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(users::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("user", id));
    }
    Ok(())
}
