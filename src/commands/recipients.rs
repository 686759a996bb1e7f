// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::contacts::{CsvContacts, import_recipients};
use crate::models::Recipient;
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("add", sub)) => add(store, sub)?,
        Some(("import", sub)) => import(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct RecipientRow {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub bank: String,
    pub phone: String,
}

pub fn query_rows(store: &LedgerStore, sub: &clap::ArgMatches) -> Vec<RecipientRow> {
    let recipients: Vec<&Recipient> = match sub.get_one::<String>("search") {
        Some(query) => store.search_recipients(query.trim()),
        None => store.recipients().iter().collect(),
    };
    recipients
        .into_iter()
        .map(|r| RecipientRow {
            id: r.id.clone(),
            name: r.name.clone(),
            account_number: r.account_number.clone(),
            bank: r.bank_name.clone().unwrap_or_default(),
            phone: r.phone_number.clone().unwrap_or_default(),
        })
        .collect()
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.account_number.clone(),
                    r.bank.clone(),
                    r.phone.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Account", "Bank", "Phone"], rows)
        );
    }
    Ok(())
}

fn add(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let account_number = sub
        .get_one::<String>("account-number")
        .unwrap()
        .trim()
        .to_string();
    let bank_name = sub.get_one::<String>("bank").map(|s| s.trim().to_string());
    let phone_number = sub.get_one::<String>("phone").map(|s| s.trim().to_string());

    let recipient = Recipient {
        id: Uuid::new_v4().to_string(),
        name: name.clone(),
        account_number: account_number.clone(),
        bank_name,
        avatar: None,
        phone_number,
    };
    store.add_recipient(recipient)?;
    println!("Added recipient '{}' ({})", name, account_number);
    Ok(())
}

fn import(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let limit = *sub.get_one::<usize>("limit").unwrap();
    let provider = CsvContacts::new(path);
    let imported = import_recipients(store, &provider, limit)?;
    println!("Imported {} contacts as recipients", imported);
    Ok(())
}
