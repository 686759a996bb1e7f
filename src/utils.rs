// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

/// Demo currency display, two decimal places.
pub fn fmt_money(d: &Decimal) -> String {
    format!("RM {:.2}", d)
}

/// Signed display amount for history rows: sent is a debit, received a
/// credit.
pub fn fmt_signed_money(d: &Decimal, sent: bool) -> String {
    let sign = if sent { "-" } else { "+" };
    format!("{}{}", sign, fmt_money(d))
}

pub fn fmt_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%b %d, %Y %H:%M").to_string()
}

/// Human-friendly recency label for the overview list.
pub fn relative_date(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now.date_naive() - ts.date_naive()).num_days();
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => ts.format("%b %d").to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
