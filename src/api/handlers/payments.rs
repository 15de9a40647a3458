// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::payment::{NewPaymentTransaction, PaymentTransaction, UpdatePaymentTransaction};
use crate::repos;

pub async fn list_transactions(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<PaymentTransaction>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::payments::list(&mut conn).await?))
}

pub async fn get_transaction(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PaymentTransaction>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::payments::find(&mut conn, id).await?))
}

pub async fn create_transaction(
    State(pool): State<DbPool>,
    Json(new_transaction): Json<NewPaymentTransaction>,
) -> Result<(StatusCode, Json<PaymentTransaction>), ApiError> {
    let mut conn = pool.get().await?;
    let transaction = repos::payments::create(&mut conn, new_transaction).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn update_transaction(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdatePaymentTransaction>,
) -> Result<Json<PaymentTransaction>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::payments::update(&mut conn, id, changes).await?))
}

pub async fn delete_transaction(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::payments::delete(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
