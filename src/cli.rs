// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

pub fn build_cli() -> Command {
    Command::new("payclip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("PayClip: in-memory money-transfer demo")
        .subcommand(Command::new("account").about("Show the account overview"))
        .subcommand(
            Command::new("recipients")
                .about("Manage transfer recipients")
                .subcommand(
                    Command::new("list")
                        .about("List recipients")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Filter by name or account number"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add a recipient manually")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("account-number")
                                .long("account-number")
                                .required(true),
                        )
                        .arg(Arg::new("bank").long("bank"))
                        .arg(Arg::new("phone").long("phone")),
                )
                .subcommand(
                    Command::new("import")
                        .about("Import recipients from a contacts CSV (name,phone)")
                        .arg(Arg::new("path").long("path").required(true))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize))
                                .default_value("10")
                                .help("Maximum contacts to import"),
                        ),
                ),
        )
        .subcommand(
            Command::new("transfer")
                .about("Send money to a recipient")
                .arg(Arg::new("to").long("to").help("Recipient id"))
                .arg(Arg::new("amount").long("amount").help("Amount to send"))
                .arg(Arg::new("note").long("note").help("Optional note")),
        )
        .subcommand(
            Command::new("history")
                .about("Show transaction history, newest first")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
}
