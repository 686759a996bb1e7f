// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Recipient;
use crate::store::LedgerStore;
use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// At most this many contacts are imported per run.
pub const IMPORT_CAP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied,
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub name: String,
    pub phone_number: String,
}

/// External address-book source. Access must be granted before anything is
/// fetched.
pub trait ContactsProvider {
    fn request_access(&self) -> Result<AccessStatus>;
    fn fetch_contacts(&self) -> Result<Vec<Contact>>;
}

/// Address book backed by a CSV file with a `name,phone` header row. An
/// unreadable path maps to denied access.
pub struct CsvContacts {
    path: PathBuf,
}

impl CsvContacts {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactsProvider for CsvContacts {
    fn request_access(&self) -> Result<AccessStatus> {
        if fs::metadata(&self.path).is_ok() {
            Ok(AccessStatus::Granted)
        } else {
            Ok(AccessStatus::Denied)
        }
    }

    fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Open contacts CSV {}", self.path.display()))?;
        let mut contacts = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            let name = rec.get(0).unwrap_or("").trim().to_string();
            let phone_number = rec.get(1).unwrap_or("").trim().to_string();
            contacts.push(Contact { name, phone_number });
        }
        Ok(contacts)
    }
}

/// Map imported contacts into recipients: generated id, synthesized masked
/// account number, the phone number carried along. Entries without a name
/// or phone are skipped, and at most `limit` are taken. Returns how many
/// were added.
pub fn import_recipients<P: ContactsProvider>(
    store: &mut LedgerStore,
    provider: &P,
    limit: usize,
) -> Result<usize> {
    match provider.request_access()? {
        AccessStatus::Granted => {}
        AccessStatus::Denied => {
            bail!("Contacts permission denied, enable contacts access to import recipients")
        }
    }

    let contacts = provider.fetch_contacts()?;
    let mut imported = 0;
    for contact in contacts
        .into_iter()
        .filter(|c| !c.name.is_empty() && !c.phone_number.is_empty())
        .take(limit)
    {
        let recipient = Recipient {
            id: Uuid::new_v4().to_string(),
            name: contact.name,
            account_number: synth_account_number(),
            bank_name: None,
            avatar: None,
            phone_number: Some(contact.phone_number),
        };
        if store.add_recipient(recipient).is_ok() {
            imported += 1;
        }
    }
    tracing::info!(imported, "contacts imported as recipients");
    Ok(imported)
}

// Cosmetic only; carries no real account meaning.
fn synth_account_number() -> String {
    format!("****{}", rand::thread_rng().gen_range(1000..10000))
}
