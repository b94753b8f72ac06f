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

//! End-to-end statement scenarios.

use bank_ledger::{Account, SequenceClock};
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 1, day).unwrap()
}

fn statement<C: bank_ledger::Clock>(account: &Account<C>) -> String {
    let mut out = Vec::new();
    account.print_statement_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_statement_after_multiple_transactions() {
    let clock = SequenceClock::new([date(10), date(13), date(14)]).unwrap();
    let mut account = Account::with_clock(clock);

    account.deposit(1000).unwrap();
    account.deposit(2000).unwrap();
    account.withdraw(500).unwrap();

    assert_eq!(
        statement(&account),
        "Date || Amount || Balance\n\
         14/01/2012 || -500 || 2500\n\
         13/01/2012 || 2000 || 3000\n\
         10/01/2012 || 1000 || 1000\n"
    );
}

#[test]
fn fresh_account_prints_header_only() {
    let account = Account::with_clock(SequenceClock::new([date(10)]).unwrap());
    assert_eq!(statement(&account), "Date || Amount || Balance\n");
}

#[test]
fn same_day_transactions_keep_recording_order() {
    let clock = SequenceClock::new([date(10), date(10), date(11), date(11)]).unwrap();
    let mut account = Account::with_clock(clock);

    account.deposit(100).unwrap();
    account.withdraw(30).unwrap();
    account.deposit(5).unwrap();
    account.deposit(7).unwrap();

    assert_eq!(
        statement(&account),
        "Date || Amount || Balance\n\
         11/01/2012 || 5 || 75\n\
         11/01/2012 || 7 || 82\n\
         10/01/2012 || 100 || 100\n\
         10/01/2012 || -30 || 70\n"
    );
}

#[test]
fn non_monotonic_clock_is_sorted_by_date() {
    // Balances stay in recording order; only the printed order changes.
    let clock = SequenceClock::new([date(14), date(10), date(12)]).unwrap();
    let mut account = Account::with_clock(clock);

    account.deposit(1000).unwrap();
    account.withdraw(200).unwrap();
    account.deposit(50).unwrap();

    assert_eq!(
        statement(&account),
        "Date || Amount || Balance\n\
         14/01/2012 || 1000 || 1000\n\
         12/01/2012 || 50 || 850\n\
         10/01/2012 || -200 || 800\n"
    );
}

#[test]
fn overdrawn_account_prints_negative_balance() {
    let clock = SequenceClock::new([date(10), date(11)]).unwrap();
    let mut account = Account::with_clock(clock);

    account.deposit(100).unwrap();
    account.withdraw(300).unwrap();

    assert_eq!(
        statement(&account),
        "Date || Amount || Balance\n\
         11/01/2012 || -300 || -200\n\
         10/01/2012 || 100 || 100\n"
    );
}
