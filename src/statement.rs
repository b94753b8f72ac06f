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

//! Account statement rendering.
//!
//! A statement lists every transaction newest first:
//!
//! ```text
//! Date || Amount || Balance
//! 14/01/2012 || -500 || 2500
//! 13/01/2012 || 2000 || 3000
//! 10/01/2012 || 1000 || 1000
//! ```
//!
//! Sorting is stable, so transactions sharing a date keep the order in which
//! they were recorded.

use crate::transaction::{Amount, Transaction};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::{self, Write};

pub const HEADER: &str = "Date || Amount || Balance";

/// `chrono` format string for statement dates (`DD/MM/YYYY`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const SEPARATOR: &str = " || ";

/// Returns the transactions sorted by date, newest first.
pub fn newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    // `sort_by` is stable: same-day ties stay in recorded order.
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

/// Formats one statement line, without the line terminator.
pub fn format_line(transaction: &Transaction) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        transaction.date().format(DATE_FORMAT),
        transaction.amount(),
        transaction.balance()
    )
}

/// Writes the statement header followed by one line per transaction.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn print<W: Write>(transactions: &[Transaction], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for transaction in newest_first(transactions) {
        writeln!(writer, "{}", format_line(transaction))?;
    }
    writer.flush()
}

/// Renders the statement into a `String`.
pub fn render(transactions: &[Transaction]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for transaction in newest_first(transactions) {
        out.push_str(&format_line(transaction));
        out.push('\n');
    }
    out
}

/// One statement row as written by [`write_csv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    pub date: String,
    pub amount: Amount,
    pub balance: Amount,
}

impl From<&Transaction> for StatementRow {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date().format(DATE_FORMAT).to_string(),
            amount: transaction.amount(),
            balance: transaction.balance(),
        }
    }
}

/// Writes the statement as CSV (`date,amount,balance`), newest first.
///
/// The header row is always written, even for an empty ledger.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), csv::Error> {
    // serde only emits headers alongside the first row.
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["date", "amount", "balance"])?;
    for transaction in newest_first(transactions) {
        wtr.serialize(StatementRow::from(transaction))?;
    }
    wtr.flush()?;
    Ok(())
}
