// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{purchases, subscription_plans, subscriptions};

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = subscription_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubscriptionPlan {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price_per_month: BigDecimal,
    pub is_active: bool,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = subscription_plans)]
pub struct NewSubscriptionPlan {
    pub author_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price_per_month: BigDecimal,
    pub is_active: Option<bool>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = subscription_plans)]
pub struct UpdateSubscriptionPlan {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_month: Option<BigDecimal>,
    pub is_active: Option<bool>,
}

/// A subscriber's standing against a plan. `status` is one of `active`,
/// `canceled` or `expired`.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = subscriptions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Subscription {
    pub id: i64,
    pub subscriber_id: i64,
    pub plan_id: i64,
    pub status: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = subscriptions)]
pub struct NewSubscription {
    pub subscriber_id: i64,
    pub plan_id: i64,
    pub status: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = subscriptions)]
pub struct UpdateSubscription {
    pub status: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// One-off purchase of a post or gallery image; a user can buy a given
/// content item once.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = purchases)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Purchase {
    pub id: i64,
    pub user_id: i64,
    pub content_type: String,
    pub content_id: i64,
    pub purchase_price: BigDecimal,
    pub purchased_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = purchases)]
pub struct NewPurchase {
    pub user_id: i64,
    pub content_type: String,
    pub content_id: i64,
    pub purchase_price: BigDecimal,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = purchases)]
pub struct UpdatePurchase {
    pub content_type: Option<String>,
    pub content_id: Option<i64>,
    pub purchase_price: Option<BigDecimal>,
}
