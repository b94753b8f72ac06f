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

//! Date sources for the ledger.
//!
//! The ledger never reads the system date itself; it asks the [`Clock`] it
//! was built with. Tests and replay tools swap in a deterministic clock.
//!
//! # Example
//!
//! ```
//! use bank_ledger::{Clock, SequenceClock};
//! use chrono::NaiveDate;
//!
//! let d1 = NaiveDate::from_ymd_opt(2012, 1, 10).unwrap();
//! let d2 = NaiveDate::from_ymd_opt(2012, 1, 13).unwrap();
//! let clock = SequenceClock::new([d1, d2]).unwrap();
//!
//! assert_eq!(clock.today(), d1);
//! assert_eq!(clock.today(), d2);
//! assert_eq!(clock.today(), d2); // last date repeats
//! ```

use chrono::{Local, NaiveDate};
use std::cell::Cell;

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Returns a pre-programmed sequence of dates, one per call.
///
/// Once the sequence is exhausted the last date is returned forever.
#[derive(Debug, Clone)]
pub struct SequenceClock {
    dates: Vec<NaiveDate>,
    next: Cell<usize>,
}

impl SequenceClock {
    /// Returns `None` when `dates` is empty.
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        let dates: Vec<NaiveDate> = dates.into_iter().collect();
        if dates.is_empty() {
            return None;
        }
        Some(Self {
            dates,
            next: Cell::new(0),
        })
    }
}

impl Clock for SequenceClock {
    fn today(&self) -> NaiveDate {
        let index = self.next.get();
        if index + 1 < self.dates.len() {
            self.next.set(index + 1);
        }
        self.dates[index]
    }
}

/// A clock whose date is set explicitly by its owner.
///
/// Used when replaying operations that carry their own dates.
#[derive(Debug, Clone)]
pub struct ManualClock {
    date: Cell<NaiveDate>,
}

impl ManualClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
