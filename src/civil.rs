// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil calendar fields.

use std::fmt;

/// A broken-down wall-clock reading.
///
/// This is plain data: nothing is validated on construction. The
/// [`encode`](crate::encode) module checks a value before turning it into a
/// Julian Date, and values produced by [`decode`](crate::decode) are always
/// well-formed.
///
/// `year` is a civil year (no year 0; `-1` is 1 BC). Field order makes the
/// derived `Ord` chronological for values read in the same zone.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Same date, time set to 00:00:00.
    pub const fn at_midnight(self) -> Self {
        Self::date(self.year, self.month, self.day)
    }

    pub const fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }

    /// Seconds elapsed since local midnight.
    pub const fn second_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// `yyyy/mm/dd hh:mm:ss`
impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Names one slot of a [`CivilDateTime`]; used in error reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_fields() {
        let civil = CivilDateTime::new(2024, 3, 7, 9, 5, 0);
        assert_eq!(civil.to_string(), "2024/03/07 09:05:00");
        assert_eq!(CivilDateTime::date(-44, 3, 15).to_string(), "-44/03/15 00:00:00");
    }

    #[test]
    fn midnight_helpers() {
        let civil = CivilDateTime::new(2024, 3, 7, 23, 59, 59);
        assert!(!civil.is_midnight());
        assert_eq!(civil.second_of_day(), 86_399);
        assert!(civil.at_midnight().is_midnight());
        assert_eq!(civil.at_midnight().day, 7);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilDateTime::new(2024, 3, 7, 23, 59, 59);
        let b = CivilDateTime::date(2024, 3, 8);
        assert!(a < b);
    }
}
