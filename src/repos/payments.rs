// Copyright (c) GameHub Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::models::payment::{NewPaymentTransaction, PaymentTransaction, UpdatePaymentTransaction};
use crate::schema::payment_transactions;

use super::{RepoError, RepoResult};

pub async fn list(conn: &mut AsyncPgConnection) -> RepoResult<Vec<PaymentTransaction>> {
    payment_transactions::table
        .order(payment_transactions::id.asc())
        .select(PaymentTransaction::as_select())
        .load(conn)
        .await
        .map_err(RepoError::Database)
}

pub async fn find(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<PaymentTransaction> {
    payment_transactions::table
        .find(id)
        .select(PaymentTransaction::as_select())
        .first(conn)
        .await
        .map_err(|e| RepoError::on_read(e, "payment transaction", id))
}

pub async fn create(
    conn: &mut AsyncPgConnection,
    new_transaction: NewPaymentTransaction,
) -> RepoResult<PaymentTransaction> {
    diesel::insert_into(payment_transactions::table)
        .values(&new_transaction)
        .returning(PaymentTransaction::as_returning())
        .get_result(conn)
        .await
        .map_err(RepoError::on_write)
}

pub async fn update(
    conn: &mut AsyncPgConnection,
    id: i64,
    changes: UpdatePaymentTransaction,
) -> RepoResult<PaymentTransaction> {
    diesel::update(payment_transactions::table.find(id))
        .set(&changes)
        .returning(PaymentTransaction::as_returning())
        .get_result(conn)
        .await
        .map_err(|e| RepoError::on_update(e, "payment transaction", id))
}

pub async fn delete(conn: &mut AsyncPgConnection, id: i64) -> RepoResult<()> {
    let deleted = diesel::delete(payment_transactions::table.find(id))
        .execute(conn)
        .await
        .map_err(RepoError::Database)?;
    if deleted == 0 {
        return Err(RepoError::not_found("payment transaction", id));
    }
    Ok(())
}
