// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::social_auth::{NewSocialAuth, SocialAuth, UpdateSocialAuth};
use crate::schema::social_auth;

use super::{RepoError, RepoResult};

pub async fn list(conn: &mut AsyncPgConnection) -> RepoResult<Vec<SocialAuth>> {
    social_auth::table
        .order(social_auth::id.asc())
        .select(SocialAuth::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<SocialAuth> {
    social_auth::table
        .find(id)
        .select(SocialAuth::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "social auth link", id))
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_link: NewSocialAuth,
) -> RepoResult<SocialAuth> {
    diesel::insert_into(social_auth::table)
        .values(&new_link)
        .returning(SocialAuth::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateSocialAuth,
) -> RepoResult<SocialAuth> {
    diesel::update(social_auth::table.find(id))
        .set(&changes)
        .returning(SocialAuth::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "social auth link", id))
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(social_auth::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("social auth link", id));
    }
    Ok(())
}
