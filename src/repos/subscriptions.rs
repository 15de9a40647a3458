// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::subscription::{
    NewPurchase, NewSubscription, NewSubscriptionPlan, Purchase, Subscription, SubscriptionPlan,
    UpdatePurchase, UpdateSubscription, UpdateSubscriptionPlan,
};
use crate::models::user::User;
use crate::schema::{purchases, subscription_plans, subscriptions, users};

use super::{RepoError, RepoResult};

pub async fn list_plans(
    conn: &mut AsyncPgConnection,
    author: Option<i64>,
) -> RepoResult<Vec<(SubscriptionPlan, User)>> {
    let mut query = subscription_plans::table
        .inner_join(users::table)
        .select((SubscriptionPlan::as_select(), User::as_select()))
        .order(subscription_plans::id.asc())
        .into_boxed();

    if let Some(author_id) = author {
        query = query.filter(subscription_plans::author_id.eq(author_id));
    }

    query.load(conn).await.map_err(RepoError::Database)
}

pub async fn find_plan(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> RepoResult<(SubscriptionPlan, User)> {
    subscription_plans::table
        .inner_join(users::table)
        .filter(subscription_plans::id.eq(id))
        .select((SubscriptionPlan::as_select(), User::as_select()))
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "subscription plan", id))
}

pub async fn create_plan(
    conn: &mut AsyncPgConnection,
    new_plan: NewSubscriptionPlan,
) -> RepoResult<SubscriptionPlan> {
    diesel::insert_into(subscription_plans::table)
        .values(&new_plan)
        .returning(SubscriptionPlan::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_plan(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateSubscriptionPlan,
) -> RepoResult<SubscriptionPlan> {
    diesel::update(subscription_plans::table.find(id))
        .set(&changes)
        .returning(SubscriptionPlan::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "subscription plan", id))
}

pub async fn delete_plan(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(subscription_plans::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("subscription plan", id));
    }
    Ok(())
}

pub async fn list_subscriptions(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Subscription>> {
    subscriptions::table
        .order(subscriptions::id.asc())
        .select(Subscription::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_subscription(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Subscription> {
    subscriptions::table
        .find(id)
        .select(Subscription::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "subscription", id))
}

pub async fn create_subscription(
    conn: &mut AsyncPgConnection,
    new_subscription: NewSubscription,
) -> RepoResult<Subscription> {
    diesel::insert_into(subscriptions::table)
        .values(&new_subscription)
        .returning(Subscription::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_subscription(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdateSubscription,
) -> RepoResult<Subscription> {
    diesel::update(subscriptions::table.find(id))
        .set(&changes)
        .returning(Subscription::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "subscription", id))
}

pub async fn delete_subscription(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(subscriptions::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("subscription", id));
    }
    Ok(())
}

pub async fn list_purchases(conn: &mut AsyncPgConnection) -> RepoResult<Vec<Purchase>> {
    purchases::table
        .order(purchases::id.asc())
        .select(Purchase::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find_purchase(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<Purchase> {
    purchases::table
        .find(id)
        .select(Purchase::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "purchase", id))
}

pub async fn create_purchase(
    conn: &mut AsyncPgConnection,
    new_purchase: NewPurchase,
) -> RepoResult<Purchase> {
    diesel::insert_into(purchases::table)
        .values(&new_purchase)
        .returning(Purchase::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update_purchase(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdatePurchase,
) -> RepoResult<Purchase> {
    diesel::update(purchases::table.find(id))
        .set(&changes)
        .returning(Purchase::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "purchase", id))
}

pub async fn delete_purchase(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(purchases::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("purchase", id));
    }
    Ok(())
}
