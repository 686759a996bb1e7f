// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{Authenticator, ChallengeOutcome};
use crate::models::{Recipient, Transaction, TransactionDirection, TransactionStatus};
use crate::store::LedgerStore;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Free-text notes are capped at this many characters.
pub const MAX_NOTE_LEN: usize = 100;

const AUTH_PROMPT: &str = "Authenticate to confirm payment";
const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

static NON_AMOUNT_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    #[error("please select a recipient")]
    MissingRecipient,
    #[error("please enter a valid amount")]
    InvalidAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("biometric authentication is not available on this device")]
    AuthUnavailable,
    #[error("no biometric credential is enrolled on this device")]
    AuthNotEnrolled,
    #[error("authentication failed, please try again")]
    AuthFailed,
    #[error("an error occurred while processing your transfer, please try again")]
    Failed,
}

impl TransferError {
    /// Validation failures are data problems the user can correct in place;
    /// everything else is a capability or processing problem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TransferError::MissingRecipient
                | TransferError::InvalidAmount
                | TransferError::InsufficientFunds
        )
    }
}

/// What a successful commit hands back for display.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub transaction_id: String,
    pub recipient_name: String,
    pub amount: Decimal,
    pub new_balance: Decimal,
}

/// Terminal states of one workflow run. A user declining the challenge is
/// an outcome, not an error: no dialog, no mutation, control back to the
/// caller.
#[derive(Debug)]
pub enum TransferOutcome {
    Completed(TransferReceipt),
    Declined,
}

/// Strip everything but digits and a decimal point, collapse extra points
/// into one, and truncate the fraction to two digits.
pub fn normalize_amount(raw: &str) -> String {
    let cleaned = NON_AMOUNT_CHARS.replace_all(raw, "");
    match cleaned.split_once('.') {
        None => cleaned.into_owned(),
        Some((whole, rest)) => {
            let frac: String = rest.chars().filter(|c| *c != '.').take(2).collect();
            format!("{}.{}", whole, frac)
        }
    }
}

/// Pure validation, first failing check wins: recipient, then amount shape,
/// then funds. Returns the recipient and the parsed amount on success.
pub fn validate_transfer<'a>(
    recipient: Option<&'a Recipient>,
    normalized_amount: &str,
    balance: Decimal,
) -> Result<(&'a Recipient, Decimal), TransferError> {
    let recipient = recipient.ok_or(TransferError::MissingRecipient)?;
    // A trailing point is fine on input ("12." means 12).
    let candidate = normalized_amount
        .strip_suffix('.')
        .unwrap_or(normalized_amount);
    let amount = candidate
        .parse::<Decimal>()
        .map_err(|_| TransferError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(TransferError::InvalidAmount);
    }
    if amount > balance {
        return Err(TransferError::InsufficientFunds);
    }
    Ok((recipient, amount))
}

/// The validate → authenticate → commit sequence for a single transfer.
///
/// The whole run holds `&mut` on the store, so the window between a
/// successful challenge and the commit is non-reentrant by construction.
/// Nothing mutates until the commit step, and the commit itself is one
/// store call.
pub struct TransferWorkflow {
    processing_delay: Duration,
}

impl Default for TransferWorkflow {
    fn default() -> Self {
        Self {
            processing_delay: PROCESSING_DELAY,
        }
    }
}

impl TransferWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero delay makes the workflow synchronous for tests.
    pub fn with_delay(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    pub fn execute<A: Authenticator>(
        &self,
        store: &mut LedgerStore,
        authenticator: &A,
        recipient: Option<&Recipient>,
        raw_amount: &str,
        note: Option<&str>,
    ) -> Result<TransferOutcome, TransferError> {
        let normalized = normalize_amount(raw_amount);
        let (recipient, amount) =
            validate_transfer(recipient, &normalized, store.account().balance)?;

        let availability = authenticator.check_availability();
        if !availability.available {
            return Err(TransferError::AuthUnavailable);
        }
        if !availability.enrolled {
            return Err(TransferError::AuthNotEnrolled);
        }
        match authenticator.challenge(AUTH_PROMPT) {
            ChallengeOutcome::Success => {}
            ChallengeOutcome::Declined => {
                tracing::info!(recipient = %recipient.name, "transfer declined at challenge");
                return Ok(TransferOutcome::Declined);
            }
            ChallengeOutcome::Error(reason) => {
                tracing::warn!(%reason, "authentication challenge failed");
                return Err(TransferError::AuthFailed);
            }
        }

        // Stands in for the network round-trip of a real commit.
        if !self.processing_delay.is_zero() {
            thread::sleep(self.processing_delay);
        }

        let note = note
            .map(|n| n.chars().take(MAX_NOTE_LEN).collect::<String>())
            .filter(|n| !n.is_empty());
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            recipient_id: recipient.id.clone(),
            recipient_name: recipient.name.clone(),
            amount,
            note,
            timestamp: Utc::now(),
            status: TransactionStatus::Completed,
            direction: TransactionDirection::Sent,
        };
        let transaction_id = transaction.id.clone();
        let new_balance = store.commit_sent(transaction).map_err(|err| {
            tracing::error!(%err, "commit rejected after validation");
            TransferError::Failed
        })?;

        tracing::info!(
            %amount,
            recipient = %recipient.name,
            %new_balance,
            "transfer committed"
        );
        Ok(TransferOutcome::Completed(TransferReceipt {
            transaction_id,
            recipient_name: recipient.name.clone(),
            amount,
            new_balance,
        }))
    }
}
