// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::payment_transactions;

/// Ledger entry for money movement. `kind` is one of `subscription`,
/// `one_time_purchase` or `payout`; `status` one of `pending`, `completed`,
/// `failed` or `refunded`.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = payment_transactions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentTransaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub status: String,
    pub payment_system: Option<String>,
    pub payment_system_id: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable, Deserialize)]
#[diesel(table_name = payment_transactions)]
pub struct NewPaymentTransaction {
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: BigDecimal,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub payment_system: Option<String>,
    pub payment_system_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = payment_transactions)]
pub struct UpdatePaymentTransaction {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<BigDecimal>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub payment_system: Option<String>,
    pub payment_system_id: Option<String>,
    pub description: Option<String>,
}
