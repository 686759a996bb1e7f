// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionDirection;
use crate::store::{LedgerStore, RECENT_RECIPIENTS};
use crate::utils::{fmt_money, fmt_signed_money, pretty_table, relative_date};
use anyhow::Result;
use chrono::Utc;

const RECENT_TRANSACTIONS: usize = 5;

pub fn handle(store: &LedgerStore) -> Result<()> {
    let account = store.account();
    println!("Welcome back, {}", account.account_holder);
    println!(
        "Available Balance: {}  ({})",
        fmt_money(&account.balance),
        account.account_number
    );

    let recents = store.recent_recipients(RECENT_RECIPIENTS);
    if !recents.is_empty() {
        println!("\nRecent recipients:");
        let rows = recents
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.bank_name.clone().unwrap_or_default(),
                    r.account_number.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Bank", "Account"], rows));
    }

    let now = Utc::now();
    let recent_txs: Vec<_> = store
        .transactions_desc()
        .into_iter()
        .take(RECENT_TRANSACTIONS)
        .collect();
    if recent_txs.is_empty() {
        println!("\nNo transactions yet");
    } else {
        println!("\nRecent activity:");
        let rows = recent_txs
            .iter()
            .map(|t| {
                vec![
                    relative_date(t.timestamp, now),
                    t.recipient_name.clone(),
                    fmt_signed_money(&t.amount, t.direction == TransactionDirection::Sent),
                    t.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["When", "Recipient", "Amount", "Status"], rows)
        );
    }
    Ok(())
}
