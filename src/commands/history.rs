// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionDirection;
use crate::store::LedgerStore;
use crate::utils::{fmt_datetime, fmt_signed_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub recipient: String,
    pub amount: String,
    pub status: String,
    pub note: String,
}

pub fn query_rows(store: &LedgerStore, sub: &clap::ArgMatches) -> Vec<HistoryRow> {
    let mut txs = store.transactions_desc();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    txs.into_iter()
        .map(|t| HistoryRow {
            date: fmt_datetime(t.timestamp),
            recipient: t.recipient_name.clone(),
            amount: fmt_signed_money(&t.amount, t.direction == TransactionDirection::Sent),
            status: t.status.to_string(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn handle(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub);
    if data.is_empty() {
        println!("No transactions yet");
        return Ok(());
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.recipient.clone(),
                    r.amount.clone(),
                    r.status.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Recipient", "Amount", "Status", "Note"], rows)
        );
    }
    Ok(())
}
