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

//! Account ledger.
//!
//! An [`Account`] records deposits and withdrawals as an append-only list of
//! [`Transaction`]s. Each transaction stores the running balance at the time
//! it was recorded; nothing is recomputed on read.
//!
//! Withdrawals are not checked against the balance, so an account may go
//! negative.
//!
//! # Example
//!
//! ```
//! use bank_ledger::{Account, FixedClock};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2012, 1, 14).unwrap();
//! let mut account = Account::with_clock(FixedClock(today));
//! account.deposit(1000).unwrap();
//! account.withdraw(1500).unwrap();
//! assert_eq!(account.balance(), -500);
//! ```

use crate::clock::{Clock, SystemClock};
use crate::statement;
use crate::transaction::{Amount, Transaction, TransactionKind};
use crate::LedgerError;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Single bank account ledger.
#[derive(Debug)]
pub struct Account<C = SystemClock> {
    transactions: Vec<Transaction>,
    clock: C,
}

impl Account<SystemClock> {
    /// Creates an empty account dated by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Account<C> {
    /// Creates an empty account that takes its dates from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            clock,
        }
    }

    /// Records a deposit of `amount`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] - `amount` is zero or negative.
    /// - [`LedgerError::BalanceOverflow`] - the balance would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), LedgerError> {
        Self::validate(TransactionKind::Deposit, amount)?;
        self.record(amount)
    }

    /// Records a withdrawal of `amount`. The balance may go negative.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] - `amount` is zero or negative.
    /// - [`LedgerError::BalanceOverflow`] - the balance would underflow.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), LedgerError> {
        Self::validate(TransactionKind::Withdrawal, amount)?;
        // `amount` is positive here, so negation cannot overflow.
        self.record(-amount)
    }

    /// Prints the statement to standard output.
    pub fn print_statement(&self) -> io::Result<()> {
        self.print_statement_to(io::stdout().lock())
    }

    /// Prints the statement to `writer`.
    pub fn print_statement_to<W: Write>(&self, writer: W) -> io::Result<()> {
        statement::print(&self.transactions, writer)
    }

    /// Balance after the most recent transaction, or zero for a new account.
    pub fn balance(&self) -> Amount {
        self.transactions.last().map_or(0, Transaction::balance)
    }

    /// Transactions in the order they were recorded.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn validate(kind: TransactionKind, amount: Amount) -> Result<(), LedgerError> {
        if amount <= 0 {
            warn!(%kind, amount, "rejected non-positive amount");
            return Err(LedgerError::InvalidAmount { kind, amount });
        }
        Ok(())
    }

    fn record(&mut self, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .balance()
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)
            .inspect_err(|_| warn!(amount, "rejected amount: balance overflow"))?;
        let date = self.clock.today();
        self.transactions.push(Transaction::new(date, amount, balance));
        debug!(%date, amount, balance, "recorded transaction");
        Ok(())
    }
}
