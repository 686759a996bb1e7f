// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use payclip::{cli, commands, store::LedgerStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "payclip=warn".to_string()))
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Process-lifetime state only: every run starts from the seed dataset.
    let mut store = LedgerStore::seeded();

    match matches.subcommand() {
        Some(("account", _)) => commands::account::handle(&store)?,
        Some(("recipients", sub)) => commands::recipients::handle(&mut store, sub)?,
        Some(("transfer", sub)) => commands::transfer::handle(&mut store, sub)?,
        Some(("history", sub)) => commands::history::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
