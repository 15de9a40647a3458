// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::api::ApiError;
use crate::db::DbPool;
use crate::models::subscription::{
    NewPurchase, NewSubscription, NewSubscriptionPlan, Purchase, Subscription, UpdatePurchase,
    UpdateSubscription, UpdateSubscriptionPlan,
};
use crate::repos;
use crate::views::{self, PlanView};

#[derive(Debug, Deserialize)]
pub struct PlanListQuery {
    pub author: Option<i64>,
}

pub async fn list_plans(
    State(pool): State<DbPool>,
    Query(query): Query<PlanListQuery>,
) -> Result<Json<Vec<PlanView>>, ApiError> {
    let mut conn = pool.get().await?;
    let rows = repos::subscriptions::list_plans(&mut conn, query.author).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(plan, author)| views::plan_view(plan, author))
            .collect(),
    ))
}

pub async fn get_plan(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<PlanView>, ApiError> {
    let mut conn = pool.get().await?;
    let (plan, author) = repos::subscriptions::find_plan(&mut conn, id).await?;
    Ok(Json(views::plan_view(plan, author)))
}

pub async fn create_plan(
    State(pool): State<DbPool>,
    Json(new_plan): Json<NewSubscriptionPlan>,
) -> Result<(StatusCode, Json<PlanView>), ApiError> {
    let mut conn = pool.get().await?;
    let plan = repos::subscriptions::create_plan(&mut conn, new_plan).await?;
    let author = repos::users::find(&mut conn, plan.author_id).await?;
    Ok((StatusCode::CREATED, Json(views::plan_view(plan, author))))
}

pub async fn update_plan(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateSubscriptionPlan>,
) -> Result<Json<PlanView>, ApiError> {
    let mut conn = pool.get().await?;
    let plan = repos::subscriptions::update_plan(&mut conn, id, changes).await?;
    let author = repos::users::find(&mut conn, plan.author_id).await?;
    Ok(Json(views::plan_view(plan, author)))
}

pub async fn delete_plan(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::subscriptions::delete_plan(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_subscriptions(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<Subscription>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::subscriptions::list_subscriptions(&mut conn).await?))
}

pub async fn get_subscription(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Subscription>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::subscriptions::find_subscription(&mut conn, id).await?,
    ))
}

pub async fn create_subscription(
    State(pool): State<DbPool>,
    Json(new_subscription): Json<NewSubscription>,
) -> Result<(StatusCode, Json<Subscription>), ApiError> {
    let mut conn = pool.get().await?;
    let subscription = repos::subscriptions::create_subscription(&mut conn, new_subscription).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

pub async fn update_subscription(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdateSubscription>,
) -> Result<Json<Subscription>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::subscriptions::update_subscription(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_subscription(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::subscriptions::delete_subscription(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_purchases(State(pool): State<DbPool>) -> Result<Json<Vec<Purchase>>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::subscriptions::list_purchases(&mut conn).await?))
}

pub async fn get_purchase(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<Json<Purchase>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(repos::subscriptions::find_purchase(&mut conn, id).await?))
}

pub async fn create_purchase(
    State(pool): State<DbPool>,
    Json(new_purchase): Json<NewPurchase>,
) -> Result<(StatusCode, Json<Purchase>), ApiError> {
    let mut conn = pool.get().await?;
    let purchase = repos::subscriptions::create_purchase(&mut conn, new_purchase).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

pub async fn update_purchase(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(changes): Json<UpdatePurchase>,
) -> Result<Json<Purchase>, ApiError> {
    let mut conn = pool.get().await?;
    Ok(Json(
        repos::subscriptions::update_purchase(&mut conn, id, changes).await?,
    ))
}

pub async fn delete_purchase(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let mut conn = pool.get().await?;
    repos::subscriptions::delete_purchase(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
