// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use payclip::auth::ScriptedAuthenticator;
use payclip::models::{TransactionDirection, TransactionStatus};
use payclip::store::LedgerStore;
use payclip::transfer::{
    TransferError, TransferOutcome, TransferWorkflow, normalize_amount, validate_transfer,
};
use rust_decimal::Decimal;
use std::time::Duration;

fn workflow() -> TransferWorkflow {
    TransferWorkflow::with_delay(Duration::ZERO)
}

#[test]
fn normalize_collapses_points_and_truncates_fraction() {
    assert_eq!(normalize_amount("12.3.45"), "12.34");
    assert_eq!(normalize_amount("1.239"), "1.23");
    assert_eq!(normalize_amount("RM 1,250.75"), "1250.75");
    assert_eq!(normalize_amount("50"), "50");
    assert_eq!(normalize_amount("12."), "12.");
    assert_eq!(normalize_amount("abc"), "");
    assert_eq!(normalize_amount("-5"), "5");

    for raw in ["12.3.45", "1.2.3.4", "999.999", "..5"] {
        let normalized = normalize_amount(raw);
        assert!(normalized.matches('.').count() <= 1, "raw {:?}", raw);
        if let Some((_, frac)) = normalized.split_once('.') {
            assert!(frac.len() <= 2, "raw {:?}", raw);
        }
    }
}

#[test]
fn validation_precedence_is_recipient_then_amount_then_funds() {
    let store = LedgerStore::seeded();
    let balance = store.account().balance;
    let recipient = store.recipient_by_id("1").unwrap();

    // Bad amount and missing recipient: recipient wins
    assert_eq!(
        validate_transfer(None, "", balance).unwrap_err(),
        TransferError::MissingRecipient
    );
    assert_eq!(
        validate_transfer(Some(recipient), "", balance).unwrap_err(),
        TransferError::InvalidAmount
    );
    assert_eq!(
        validate_transfer(Some(recipient), "0", balance).unwrap_err(),
        TransferError::InvalidAmount
    );
    assert_eq!(
        validate_transfer(Some(recipient), "9999.99", balance).unwrap_err(),
        TransferError::InsufficientFunds
    );
    let (r, amount) = validate_transfer(Some(recipient), "125.50", balance).unwrap();
    assert_eq!(r.name, "Syamsul Kamil");
    assert_eq!(amount, Decimal::new(12_550, 2));
}

#[test]
fn successful_transfer_debits_and_records() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::approving();

    let outcome = workflow()
        .execute(&mut store, &auth, Some(&recipient), "125.50", None)
        .unwrap();
    let receipt = match outcome {
        TransferOutcome::Completed(receipt) => receipt,
        other => panic!("expected completion, got {:?}", other),
    };

    assert_eq!(receipt.amount, Decimal::new(12_550, 2));
    assert_eq!(receipt.recipient_name, "Syamsul Kamil");
    assert_eq!(receipt.new_balance, Decimal::new(398_030, 2));
    assert_eq!(store.account().balance, Decimal::new(398_030, 2));
    assert_eq!(store.transactions().len(), 4);

    let head = store.transactions_desc()[0].clone();
    assert_eq!(head.id, receipt.transaction_id);
    assert_eq!(head.recipient_id, "1");
    assert_eq!(head.recipient_name, "Syamsul Kamil");
    assert_eq!(head.amount, Decimal::new(12_550, 2));
    assert_eq!(head.status, TransactionStatus::Completed);
    assert_eq!(head.direction, TransactionDirection::Sent);
    assert_eq!(auth.challenges_issued(), 1);
}

#[test]
fn raw_amount_is_normalized_before_parsing() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::approving();

    let outcome = workflow()
        .execute(&mut store, &auth, Some(&recipient), "RM 125.509", None)
        .unwrap();
    match outcome {
        TransferOutcome::Completed(receipt) => {
            assert_eq!(receipt.amount, Decimal::new(12_550, 2));
        }
        other => panic!("expected completion, got {:?}", other),
    }
}

#[test]
fn insufficient_funds_leaves_store_untouched() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::approving();

    let err = workflow()
        .execute(&mut store, &auth, Some(&recipient), "5000.00", None)
        .unwrap_err();
    assert_eq!(err, TransferError::InsufficientFunds);
    assert_eq!(store.account().balance, Decimal::new(410_580, 2));
    assert_eq!(store.transactions().len(), 3);
    assert_eq!(auth.challenges_issued(), 0);
}

#[test]
fn missing_recipient_fails_before_any_challenge() {
    let mut store = LedgerStore::seeded();
    let auth = ScriptedAuthenticator::approving();

    let err = workflow()
        .execute(&mut store, &auth, None, "50.00", None)
        .unwrap_err();
    assert_eq!(err, TransferError::MissingRecipient);
    assert_eq!(auth.challenges_issued(), 0);
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn declined_challenge_aborts_silently() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::declining();

    let outcome = workflow()
        .execute(&mut store, &auth, Some(&recipient), "125.50", None)
        .unwrap();
    assert!(matches!(outcome, TransferOutcome::Declined));
    assert_eq!(store.account().balance, Decimal::new(410_580, 2));
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn capability_problems_abort_before_the_challenge() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();

    let auth = ScriptedAuthenticator::unavailable();
    let err = workflow()
        .execute(&mut store, &auth, Some(&recipient), "125.50", None)
        .unwrap_err();
    assert_eq!(err, TransferError::AuthUnavailable);
    assert_eq!(auth.challenges_issued(), 0);

    let auth = ScriptedAuthenticator::not_enrolled();
    let err = workflow()
        .execute(&mut store, &auth, Some(&recipient), "125.50", None)
        .unwrap_err();
    assert_eq!(err, TransferError::AuthNotEnrolled);
    assert_eq!(auth.challenges_issued(), 0);

    assert!(!err.is_validation());
    assert_eq!(store.account().balance, Decimal::new(410_580, 2));
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn challenge_error_surfaces_as_auth_failure() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::erroring("sensor fault");

    let err = workflow()
        .execute(&mut store, &auth, Some(&recipient), "125.50", None)
        .unwrap_err();
    assert_eq!(err, TransferError::AuthFailed);
    assert_eq!(store.account().balance, Decimal::new(410_580, 2));
    assert_eq!(store.transactions().len(), 3);
}

#[test]
fn note_is_kept_and_capped_at_one_hundred_chars() {
    let mut store = LedgerStore::seeded();
    let recipient = store.recipient_by_id("1").unwrap().clone();
    let auth = ScriptedAuthenticator::approving();
    let long_note = "x".repeat(150);

    workflow()
        .execute(&mut store, &auth, Some(&recipient), "10.00", Some(&long_note))
        .unwrap();
    let head = store.transactions_desc()[0];
    assert_eq!(head.note.as_ref().unwrap().len(), 100);

    workflow()
        .execute(&mut store, &auth, Some(&recipient), "10.00", Some(""))
        .unwrap();
    let head = store.transactions_desc()[0];
    assert!(head.note.is_none());
}
