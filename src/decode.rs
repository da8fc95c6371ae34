// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date → civil fields.
//!
//! Inverse of [`encode`](crate::encode), after Meeus, *Astronomical
//! Algorithms* ch. 7:
//!
//! 1. Shift onto the local axis by adding the zone offset.
//! 2. Split into a day number `Z` and a fraction, moving the day boundary
//!    from noon to midnight.
//! 3. From JD 2299160.5 (1582-10-15 00:00) on, apply the Gregorian
//!    correction `α = ⌊(Z − 1867216.25) / 36524.25⌋`, `A = Z + 1 + α − ⌊α/4⌋`.
//! 4. Recover year, month and day with the 365.25 / 30.6001 inverse, folding
//!    months 13 and 14 into the next year and skipping year 0.
//! 5. Round the fraction to whole seconds. A fraction within half a second
//!    of midnight rounds up to 24:00:00, which rolls into the next day.
//!    A roll-over out of 1582-10-04 lands on 1582-10-15.
//!
//! Month lengths for the roll-over come from the uniform leap rule, while
//! the day count before 1582 is Julian. Half a second before Julian
//! 1500-02-29 therefore reads as 1500-03-01, since 1500 has no 29 February
//! under that rule.

use crate::calendar::{is_reform_gap, last_day_of_month};
use crate::civil::CivilDateTime;
use crate::decimal::Decimal;
use crate::encode::ensure_supported;
use crate::error::{Error, Result};
use crate::{GREGORIAN_CUTOVER_JD, SECONDS_PER_DAY};

const ALPHA_ORIGIN: Decimal = Decimal::new(1_867_216_25, 2);
const GREGORIAN_CENTURY: Decimal = Decimal::new(36_524_25, 2);
const MARCH_BASE: Decimal = Decimal::new(122_1, 1);
const JULIAN_YEAR: Decimal = Decimal::new(365_25, 2);
const MONTH_FACTOR: Decimal = Decimal::new(30_6001, 4);
const MONTH_LENGTH: Decimal = Decimal::new(30_6, 1);

/// Civil fields of `jd` read at UTC `offset` (in days).
///
/// Fails with [`Error::Underflow`] for a negative `jd` and
/// [`Error::Overflow`] above [`MAX_JULIAN_DATE`](crate::MAX_JULIAN_DATE).
pub fn from_julian_date(jd: Decimal, offset: Decimal) -> Result<CivilDateTime> {
    let jd = ensure_supported(jd)?;
    let local = jd.checked_add(offset).ok_or(Error::Overflow)?;

    // floor / fractional split
    let mut whole = local.trunc();
    if local < whole {
        whole -= Decimal::ONE;
    }
    let mut fraction = local - whole;
    let mut z = whole.to_i64().ok_or(Error::Overflow)?;
    if fraction >= Decimal::HALF {
        z += 1;
        fraction -= Decimal::HALF;
    } else {
        fraction += Decimal::HALF;
    }

    if local >= GREGORIAN_CUTOVER_JD {
        let alpha = truncated_quotient(Decimal::from_int(z) - ALPHA_ORIGIN, GREGORIAN_CENTURY)?;
        z += 1 + alpha - alpha / 4;
    }

    let b = z + 1524;
    let c = truncated_quotient(Decimal::from_int(b) - MARCH_BASE, JULIAN_YEAR)?;
    let k = c * 365 + c / 4;
    let e = truncated_quotient(Decimal::from_int(b - k), MONTH_FACTOR)?;
    let month_start = MONTH_LENGTH
        .checked_mul(Decimal::from_int(e))
        .and_then(Decimal::to_i64)
        .ok_or(Error::Overflow)?;

    let mut day = b - k - month_start;
    let mut month = e - 1;
    let mut year = c - 4716;
    if month > 12 {
        month -= 12;
        year += 1;
    }
    if year <= 0 {
        year -= 1;
    }
    let mut year = i32::try_from(year).map_err(|_| Error::Overflow)?;

    let seconds = fraction
        .checked_mul(SECONDS_PER_DAY)
        .map(Decimal::round_half_away_from_zero)
        .and_then(Decimal::to_i64)
        .ok_or(Error::Overflow)?;
    let mut hour = seconds / 3600;
    if hour >= 24 {
        hour -= 24;
        day += 1;
        if day > i64::from(last_day_of_month(year, month as u32)) {
            day = 1;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
                if year == 0 {
                    year = 1;
                }
            }
        }
        if is_reform_gap(year, month as u32, day as u32) {
            day = 15;
        }
    }

    // month 1..=12, day 1..=31, seconds 0..=86400: all fit u32
    Ok(CivilDateTime::new(
        year,
        month as u32,
        day as u32,
        hour as u32,
        (seconds % 3600 / 60) as u32,
        (seconds % 60) as u32,
    ))
}

fn truncated_quotient(numerator: Decimal, denominator: Decimal) -> Result<i64> {
    numerator
        .checked_div(denominator)
        .and_then(Decimal::to_i64)
        .ok_or(Error::Overflow)
}
