// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use bank_ledger::{Account, Amount, Clock, ManualClock, SystemClock, TransactionKind, statement};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Bank Ledger - Replay account operations and print the statement
///
/// Reads deposits and withdrawals from a CSV file, records them in a fresh
/// account, and writes the statement to stdout, newest first.
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Replays account operations from a CSV file and prints the statement", long_about = None)]
struct Args {
    /// Path to CSV file with operations
    ///
    /// Expected format: type,amount,date
    /// Example: cargo run -- operations.csv > statement.txt
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Statement output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log every recorded transaction (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `Date || Amount || Balance` lines
    Text,
    /// `date,amount,balance` CSV rows
    Csv,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let account = match process_operations(BufReader::new(file)) {
        Ok(account) => account,
        Err(e) => {
            eprintln!("Error processing operations: {}", e);
            process::exit(1);
        }
    };
    debug!(
        transactions = account.transactions().len(),
        balance = account.balance(),
        "replayed operations"
    );

    if let Err(e) = write_statement(&account, args.format, io::stdout().lock()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so they never mix with the statement on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Raw CSV record matching the input format.
///
/// Fields: `type, amount, date`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "type")]
    op_type: String,
    amount: Amount,
    /// ISO date (`YYYY-MM-DD`); empty or missing means today.
    #[serde(default)]
    date: Option<NaiveDate>,
}

impl CsvRecord {
    /// Returns `None` for unknown operation types.
    fn kind(&self) -> Option<TransactionKind> {
        match self.op_type.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" | "withdraw" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

/// Replays operations from a CSV reader into a new account.
///
/// Each row is dated with its own `date` column, or today's date when the
/// column is empty. Malformed rows, unknown operation types, and rejected
/// amounts are logged and skipped.
///
/// # CSV Format
///
/// ```csv
/// type,amount,date
/// deposit,1000,2012-01-10
/// deposit,2000,2012-01-13
/// withdrawal,500,2012-01-14
/// ```
///
/// # Errors
///
/// Returns a CSV error if the header row cannot be read.
pub fn process_operations<R: Read>(reader: R) -> Result<Account<ManualClock>, csv::Error> {
    let today = SystemClock.today();
    let mut account = Account::with_clock(ManualClock::new(today));

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true) // Allow a missing date column
        .has_headers(true)
        .from_reader(reader);
    rdr.headers()?;

    for result in rdr.deserialize::<CsvRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping malformed row");
                continue;
            }
        };

        let Some(kind) = record.kind() else {
            warn!(op = %record.op_type, "skipping unknown operation");
            continue;
        };

        account.clock().set(record.date.unwrap_or(today));
        let applied = match kind {
            TransactionKind::Deposit => account.deposit(record.amount),
            TransactionKind::Withdrawal => account.withdraw(record.amount),
        };
        if let Err(e) = applied {
            warn!(error = %e, "skipping rejected operation");
        }
    }

    Ok(account)
}

/// Writes the account statement in the requested format.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
fn write_statement<C: Clock, W: Write>(
    account: &Account<C>,
    format: Format,
    writer: W,
) -> Result<(), csv::Error> {
    match format {
        Format::Text => account.print_statement_to(writer)?,
        Format::Csv => statement::write_csv(account.transactions(), writer)?,
    }
    Ok(())
}
