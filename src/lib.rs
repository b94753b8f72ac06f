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

//! # Bank Ledger
//!
//! This library models a single bank account: it records deposits and
//! withdrawals, keeps a running balance, and prints a statement of every
//! transaction, newest first.
//!
//! ## Core Components
//!
//! - [`Account`]: Append-only ledger exposing deposit, withdraw, and print-statement
//! - [`Transaction`]: Immutable record of a date, a signed amount, and the resulting balance
//! - [`Clock`]: Injectable date source ([`SystemClock`], [`FixedClock`], [`SequenceClock`], [`ManualClock`])
//! - [`statement`]: Statement rendering as text or CSV
//! - [`LedgerError`]: Error types for rejected operations
//!
//! ## Example
//!
//! ```
//! use bank_ledger::{Account, SequenceClock};
//! use chrono::NaiveDate;
//!
//! let clock = SequenceClock::new([
//!     NaiveDate::from_ymd_opt(2012, 1, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2012, 1, 13).unwrap(),
//!     NaiveDate::from_ymd_opt(2012, 1, 14).unwrap(),
//! ])
//! .unwrap();
//! let mut account = Account::with_clock(clock);
//!
//! account.deposit(1000).unwrap();
//! account.deposit(2000).unwrap();
//! account.withdraw(500).unwrap();
//!
//! let mut out = Vec::new();
//! account.print_statement_to(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Date || Amount || Balance\n\
//!      14/01/2012 || -500 || 2500\n\
//!      13/01/2012 || 2000 || 3000\n\
//!      10/01/2012 || 1000 || 1000\n"
//! );
//! ```
//!
//! ## Thread Safety
//!
//! An account is owned by a single caller and mutated through `&mut self`.
//! Callers sharing one across threads must serialize access themselves.

pub mod account;
pub mod clock;
pub mod error;
pub mod statement;
mod transaction;

pub use account::Account;
pub use clock::{Clock, FixedClock, ManualClock, SequenceClock, SystemClock};
pub use error::LedgerError;
pub use transaction::{Amount, Transaction, TransactionKind};
