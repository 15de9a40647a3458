// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

//! Repository layer: one module per resource family, explicit queries only.
//! Constraint violations coming back from PostgreSQL (unique keys, foreign
//! keys, CHECK ranges) surface as [`RepoError::Validation`].

pub mod content;
pub mod games;
pub mod messaging;
pub mod notifications;
pub mod payments;
pub mod profiles;
pub mod social;
pub mod social_auth;
pub mod subscriptions;
pub mod users;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(DieselError),
}

impl RepoError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        RepoError::NotFound { resource, id }
    }

    /// Classify an error coming back from an INSERT or UPDATE.
    pub(crate) fn on_write(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            | DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info)
            | DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info)
            | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info) => {
                RepoError::Validation(info.message().to_string())
            }
            // An all-None changeset never reaches the database.
            DieselError::QueryBuilderError(_) => {
                RepoError::Validation("no fields to update".to_string())
            }
            other => RepoError::Database(other),
        }
    }

    /// Classify an error from a lookup addressed by key.
    pub(crate) fn on_read(err: DieselError, resource: &'static str, id: i64) -> Self {
        match err {
            DieselError::NotFound => RepoError::NotFound { resource, id },
            other => RepoError::Database(other),
        }
    }

    /// Classify an error from an UPDATE addressed by key.
    pub(crate) fn on_update(err: DieselError, resource: &'static str, id: i64) -> Self {
        match err {
            DieselError::NotFound => RepoError::NotFound { resource, id },
            other => RepoError::on_write(other),
        }
    }
}
