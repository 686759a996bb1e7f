// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::TerminalAuthenticator;
use crate::store::LedgerStore;
use crate::transfer::{TransferOutcome, TransferWorkflow};
use crate::utils::{fmt_datetime, fmt_money, pretty_table};
use anyhow::{Context, Result};
use chrono::Utc;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let raw_amount = m
        .get_one::<String>("amount")
        .map(String::as_str)
        .unwrap_or("");
    let note = m.get_one::<String>("note").map(String::as_str);

    // A recipient id that matches nothing is a caller mistake, not a
    // workflow outcome; an absent id flows through as "none selected".
    let recipient = match m.get_one::<String>("to") {
        Some(id) => Some(
            store
                .recipient_by_id(id)
                .with_context(|| format!("Recipient '{}' not found", id))?
                .clone(),
        ),
        None => None,
    };

    let workflow = TransferWorkflow::new();
    match workflow.execute(
        store,
        &TerminalAuthenticator,
        recipient.as_ref(),
        raw_amount,
        note,
    ) {
        Ok(TransferOutcome::Completed(receipt)) => {
            println!("Payment Successful!");
            println!("Your payment has been sent to {}", receipt.recipient_name);
            let rows = vec![
                vec!["Amount Sent".to_string(), fmt_money(&receipt.amount)],
                vec!["New Balance".to_string(), fmt_money(&receipt.new_balance)],
                vec!["Date".to_string(), fmt_datetime(Utc::now())],
                vec!["Reference".to_string(), receipt.transaction_id],
            ];
            println!("{}", pretty_table(&["Detail", "Value"], rows));
        }
        Ok(TransferOutcome::Declined) => {
            println!("Authentication cancelled, nothing was sent");
        }
        Err(err) if err.is_validation() => {
            println!("Invalid transfer: {}", err);
        }
        Err(err) => {
            println!("Transfer failed: {}", err);
        }
    }
    Ok(())
}
