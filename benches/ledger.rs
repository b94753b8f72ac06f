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

//! Benchmarks for the account ledger.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Recording deposits and withdrawals
//! - Rendering statements of increasing length

use bank_ledger::{Account, FixedClock, SequenceClock, statement};
use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 1, 10).unwrap()
}

fn fixed_account() -> Account<FixedClock> {
    Account::with_clock(FixedClock(start_date()))
}

/// Builds an account with `count` transactions spread over a few weeks.
fn populated_account(count: u64) -> Account<SequenceClock> {
    let dates = (0..count).map(|i| start_date().checked_add_days(Days::new(i % 30)).unwrap());
    let clock = SequenceClock::new(dates).unwrap();
    let mut account = Account::with_clock(clock);
    for i in 0..count {
        if i % 3 == 2 {
            account.withdraw(500).unwrap();
        } else {
            account.deposit(1000).unwrap();
        }
    }
    account
}

// =============================================================================
// Recording Benchmarks
// =============================================================================

fn bench_single_deposit(c: &mut Criterion) {
    c.bench_function("single_deposit", |b| {
        b.iter(|| {
            let mut account = fixed_account();
            account.deposit(black_box(10000)).unwrap();
            black_box(&account);
        })
    });
}

fn bench_deposit_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("deposit_throughput");

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut account = fixed_account();
                for _ in 0..count {
                    account.deposit(10000).unwrap();
                }
                black_box(&account);
            })
        });
    }
    group.finish();
}

fn bench_mixed_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_transactions");

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let mut account = fixed_account();
                for _ in 0..count {
                    account.deposit(10000).unwrap();
                    account.withdraw(5000).unwrap();
                }
                black_box(&account);
            })
        });
    }
    group.finish();
}

// =============================================================================
// Statement Benchmarks
// =============================================================================

fn bench_render_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_statement");

    for count in [10u64, 1_000, 10_000].iter() {
        let account = populated_account(*count);
        group.throughput(Throughput::Elements(*count));
        group.bench_with_input(BenchmarkId::new("text", count), &account, |b, account| {
            b.iter(|| {
                let mut out = Vec::new();
                account.print_statement_to(&mut out).unwrap();
                black_box(out);
            })
        });
        group.bench_with_input(BenchmarkId::new("csv", count), &account, |b, account| {
            b.iter(|| {
                let mut out = Vec::new();
                statement::write_csv(account.transactions(), &mut out).unwrap();
                black_box(out);
            })
        });
    }
    group.finish();
}

criterion_group!(
    recording,
    bench_single_deposit,
    bench_deposit_throughput,
    bench_mixed_transactions,
);

criterion_group!(statements, bench_render_statement,);

criterion_main!(recording, statements);
