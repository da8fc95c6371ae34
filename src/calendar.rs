// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar rules shared by both converters.
//!
//! Years are **civil** years: there is no year 0 and `-1` is 1 BC. Before a
//! rule is applied a negative year is mapped to its astronomical number
//! (`-1 → 0`, `-5 → -4`), so 1 BC, 5 BC, … are leap years.
//!
//! The Gregorian leap rule (divisible by 4, except centuries not divisible
//! by 400) is applied uniformly, including before the 1582 reform. The
//! day-count formulas still follow the Julian calendar before the cutover;
//! only month lengths used for validation and roll-over follow this rule.

/// First Gregorian date: 1582-10-15.
pub const GREGORIAN_CUTOVER: (i32, u32, u32) = (1582, 10, 15);

/// Astronomical year number of a civil year (`-1 → 0`).
#[inline]
pub const fn astronomical_year(year: i32) -> i32 {
    if year < 0 {
        year + 1
    } else {
        year
    }
}

/// Leap-year test on a civil year.
pub const fn is_leap_year(year: i32) -> bool {
    let y = astronomical_year(year);
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Number of days in `month` (1–12) of `year`; `0` for an invalid month.
pub const fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// `true` for 1582-10-05 ..= 1582-10-14, which were skipped by the reform.
#[inline]
pub const fn is_reform_gap(year: i32, month: u32, day: u32) -> bool {
    year == 1582 && month == 10 && day > 4 && day < 15
}

/// `true` if the date is on or after [`GREGORIAN_CUTOVER`].
pub const fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    let (y, m, d) = GREGORIAN_CUTOVER;
    year > y || (year == y && (month > m || (month == m && day >= d)))
}
