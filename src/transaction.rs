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

//! Transaction records.
//!
//! A [`Transaction`] is written once, when the ledger records a deposit or a
//! withdrawal, and never changes afterwards. It carries the balance of the
//! account immediately after it was applied, so statements never need to
//! recompute balances.

use chrono::NaiveDate;
use std::fmt;

/// Signed money amount in whole currency units.
pub type Amount = i64;

/// Direction of a transaction, derived from the sign of its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => f.write_str("deposit"),
            Self::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// One recorded deposit or withdrawal.
///
/// `amount` is positive for deposits and negative for withdrawals; it is
/// never zero. `balance` is the cumulative balance after this transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transaction {
    date: NaiveDate,
    amount: Amount,
    balance: Amount,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, amount: Amount, balance: Amount) -> Self {
        debug_assert!(amount != 0, "transactions never carry a zero amount");
        Self {
            date,
            amount,
            balance,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Signed amount: positive for deposits, negative for withdrawals.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Account balance immediately after this transaction.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount > 0 {
            TransactionKind::Deposit
        } else {
            TransactionKind::Withdrawal
        }
    }
}
