// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, Recipient, Transaction, TransactionDirection, TransactionStatus};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// How many recipients the "recent" view shows.
pub const RECENT_RECIPIENTS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("recipient id '{0}' already exists")]
    DuplicateRecipient(String),
    #[error("transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("balance cannot be negative, got {0}")]
    NegativeBalance(Decimal),
    #[error("insufficient balance: need {needed}, available {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },
}

/// Single source of truth for the account, the recipient directory, and the
/// transaction history. The store owns all three for the lifetime of the
/// process; callers hold read views only.
///
/// Every mutation goes through a `&mut self` method, so the single-writer
/// discipline the commit pair needs is enforced at compile time, and the
/// invariants (non-negative balance, positive amounts, unique recipient ids)
/// hold after every call no matter who the caller is.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    account: Account,
    recipients: Vec<Recipient>,
    // Storage order is most-recent-first; display order is always resolved
    // through transactions_desc().
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            recipients: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// The demo dataset every session starts from. Restarting the process
    /// resets to exactly this state.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let recipients = vec![
            Recipient {
                id: "1".into(),
                name: "Syamsul Kamil".into(),
                account_number: "****4529".into(),
                bank_name: Some("CIMB Bank".into()),
                avatar: Some("https://i.pravatar.cc/150?img=1".into()),
                phone_number: None,
            },
            Recipient {
                id: "2".into(),
                name: "Albert Chin".into(),
                account_number: "****7836".into(),
                bank_name: Some("Hong Leong Bank".into()),
                avatar: Some("https://i.pravatar.cc/150?img=3".into()),
                phone_number: None,
            },
            Recipient {
                id: "3".into(),
                name: "Sivarasa".into(),
                account_number: "****2109".into(),
                bank_name: Some("RHB Bank".into()),
                avatar: Some("https://i.pravatar.cc/150?img=5".into()),
                phone_number: None,
            },
        ];
        let transactions = vec![
            Transaction {
                id: "1".into(),
                recipient_id: "1".into(),
                recipient_name: "Syamsul Kamil".into(),
                amount: Decimal::new(12550, 2),
                note: Some("Dinner last night".into()),
                timestamp: now - Duration::hours(2),
                status: TransactionStatus::Completed,
                direction: TransactionDirection::Sent,
            },
            Transaction {
                id: "2".into(),
                recipient_id: "2".into(),
                recipient_name: "Albert Chin".into(),
                amount: Decimal::new(50000, 2),
                note: None,
                timestamp: now - Duration::days(1),
                status: TransactionStatus::Completed,
                direction: TransactionDirection::Sent,
            },
            Transaction {
                id: "3".into(),
                recipient_id: "3".into(),
                recipient_name: "Sivarasa".into(),
                amount: Decimal::new(7525, 2),
                note: Some("Concert tickets".into()),
                timestamp: now - Duration::days(2),
                status: TransactionStatus::Completed,
                direction: TransactionDirection::Received,
            },
        ];
        Self {
            account: Account {
                balance: Decimal::new(410_580, 2),
                account_number: "****8901".into(),
                account_holder: "David Beckham".into(),
            },
            recipients,
            transactions,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends to the directory, insertion order preserved. Duplicate ids
    /// are rejected at this boundary rather than left to caller discipline.
    pub fn add_recipient(&mut self, recipient: Recipient) -> Result<(), StoreError> {
        if self.recipients.iter().any(|r| r.id == recipient.id) {
            return Err(StoreError::DuplicateRecipient(recipient.id));
        }
        self.recipients.push(recipient);
        Ok(())
    }

    /// Prepends to the history (most-recent-first storage order). A
    /// non-positive amount never enters the ledger.
    pub fn append_transaction(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        if transaction.amount <= Decimal::ZERO {
            return Err(StoreError::NonPositiveAmount(transaction.amount));
        }
        self.transactions.insert(0, transaction);
        Ok(())
    }

    /// Replaces the account balance. The non-negativity invariant lives
    /// here, not in the callers.
    pub fn update_balance(&mut self, new_balance: Decimal) -> Result<(), StoreError> {
        if new_balance < Decimal::ZERO {
            return Err(StoreError::NegativeBalance(new_balance));
        }
        self.account.balance = new_balance;
        Ok(())
    }

    /// The commit pair as one indivisible unit: debit the balance by the
    /// transaction amount and record the transaction, together or not at
    /// all. No reader can observe one without the other. Returns the new
    /// balance.
    pub fn commit_sent(&mut self, transaction: Transaction) -> Result<Decimal, StoreError> {
        if transaction.amount <= Decimal::ZERO {
            return Err(StoreError::NonPositiveAmount(transaction.amount));
        }
        let new_balance = self.account.balance - transaction.amount;
        if new_balance < Decimal::ZERO {
            return Err(StoreError::InsufficientBalance {
                needed: transaction.amount,
                available: self.account.balance,
            });
        }
        self.account.balance = new_balance;
        self.transactions.insert(0, transaction);
        Ok(new_balance)
    }

    pub fn recipient_by_id(&self, id: &str) -> Option<&Recipient> {
        self.recipients.iter().find(|r| r.id == id)
    }

    /// Case-insensitive match on name or account number.
    pub fn search_recipients(&self, query: &str) -> Vec<&Recipient> {
        let query = query.to_lowercase();
        self.recipients
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&query)
                    || r.account_number.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// First N recipients by insertion order.
    pub fn recent_recipients(&self, n: usize) -> &[Recipient] {
        &self.recipients[..n.min(self.recipients.len())]
    }

    /// History ordered by timestamp descending, regardless of how entries
    /// were inserted.
    pub fn transactions_desc(&self) -> Vec<&Transaction> {
        let mut txs: Vec<&Transaction> = self.transactions.iter().collect();
        txs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        txs
    }
}
