// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil fields → Julian Date.
//!
//! The day count is the classic calendar-to-Julian-Day-Number formula with
//! January and February moved to months 13 and 14 of the previous year.
//! The Gregorian century term is added only for dates on or after
//! 1582-10-15; earlier dates are counted on the proleptic Julian calendar.
//!
//! Julian Dates increment at noon, so the time of day enters as a half-day
//! term plus the elapsed fraction of the day. The zone offset is subtracted
//! last, which puts the result on the UTC axis.

use crate::calendar::{astronomical_year, is_gregorian, is_reform_gap, last_day_of_month};
use crate::civil::{CivilDateTime, Field};
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::{MAX_JULIAN_DATE, SECONDS_PER_DAY};

/// Check every field of `civil`, in order: year, month, day, hour, minute,
/// second, then the reform gap.
pub fn validate(civil: &CivilDateTime) -> Result<()> {
    if civil.year == 0 {
        reject!(Error::YearZero);
    }
    check_field(Field::Month, civil.month, 1, 12)?;
    check_field(
        Field::Day,
        civil.day,
        1,
        last_day_of_month(civil.year, civil.month),
    )?;
    check_field(Field::Hour, civil.hour, 0, 23)?;
    check_field(Field::Minute, civil.minute, 0, 59)?;
    check_field(Field::Second, civil.second, 0, 59)?;
    if is_reform_gap(civil.year, civil.month, civil.day) {
        reject!(Error::ReformGap { day: civil.day });
    }
    Ok(())
}

fn check_field(field: Field, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        reject!(Error::InvalidField {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Julian Date of `civil` read at UTC `offset` (in days).
///
/// Fails with the first invalid field, or with [`Error::Underflow`] /
/// [`Error::Overflow`] when the result leaves the supported range.
pub fn to_julian_date(civil: &CivilDateTime, offset: Decimal) -> Result<Decimal> {
    validate(civil)?;
    julian_date_unchecked(civil, offset)
}

/// [`to_julian_date`] without field validation.
///
/// Used for fields that came out of the decoder, which may name a
/// 29 February that the uniform leap rule would reject before 1582.
pub(crate) fn julian_date_unchecked(civil: &CivilDateTime, offset: Decimal) -> Result<Decimal> {
    let (carry, half_day) = if civil.hour < 12 {
        (0, Decimal::HALF)
    } else {
        (1, -Decimal::HALF)
    };
    let elapsed = Decimal::from(civil.second_of_day())
        .checked_div(SECONDS_PER_DAY)
        .ok_or(Error::Overflow)?;

    let jd = Decimal::from_int(noon_before(civil) + carry)
        .checked_add(half_day + elapsed)
        .and_then(|jd| jd.checked_sub(offset))
        .ok_or(Error::Overflow)?;
    ensure_supported(jd)
}

/// Integer Julian Date of the noon preceding the civil date.
fn noon_before(civil: &CivilDateTime) -> i64 {
    let mut year = i64::from(astronomical_year(civil.year));
    let mut month = i64::from(civil.month);
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let mut days = year.div_euclid(4);
    if is_gregorian(civil.year, civil.month, civil.day) {
        days += 2 - year / 100 + year / 400;
    }
    days + 1_720_994 + year * 365 + (month + 1) * 30 + (month + 1) * 3 / 5 + i64::from(civil.day)
}

/// Reject Julian Dates outside `0 ..= MAX_JULIAN_DATE`.
pub(crate) fn ensure_supported(jd: Decimal) -> Result<Decimal> {
    if jd.is_negative() {
        reject!(Error::Underflow(jd));
    }
    if jd > MAX_JULIAN_DATE {
        reject!(Error::Overflow);
    }
    Ok(jd)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTC: Decimal = Decimal::ZERO;
    const JST: Decimal = Decimal::new(375, 3);

    fn jd(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn encode(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, offset: Decimal) -> Result<Decimal> {
        to_julian_date(&CivilDateTime::new(y, mo, d, h, mi, s), offset)
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(encode(1970, 1, 1, 0, 0, 0, UTC), Ok(jd("2440587.5")));
        assert_eq!(encode(1970, 1, 1, 9, 0, 0, JST), Ok(jd("2440587.5")));
    }

    #[test]
    fn j2000_noon_and_quarter_days() {
        assert_eq!(encode(2000, 1, 1, 12, 0, 0, UTC), Ok(jd("2451545")));
        assert_eq!(encode(2000, 1, 1, 18, 0, 0, UTC), Ok(jd("2451545.25")));
        assert_eq!(encode(2000, 1, 1, 6, 0, 0, UTC), Ok(jd("2451544.75")));
    }

    #[test]
    fn seconds_are_truncated_fractions_of_a_day() {
        assert_eq!(
            encode(1970, 1, 1, 0, 0, 1, UTC),
            Ok(jd("2440587.500011574074074074"))
        );
    }

    #[test]
    fn cutover_is_contiguous() {
        assert_eq!(encode(1582, 10, 4, 0, 0, 0, UTC), Ok(jd("2299159.5")));
        assert_eq!(encode(1582, 10, 15, 0, 0, 0, UTC), Ok(jd("2299160.5")));
    }

    #[test]
    fn no_year_zero_between_bc_and_ad() {
        assert_eq!(encode(-1, 12, 31, 0, 0, 0, UTC), Ok(jd("1721422.5")));
        assert_eq!(encode(1, 1, 1, 0, 0, 0, UTC), Ok(jd("1721423.5")));
        assert_eq!(encode(-1, 1, 1, 0, 0, 0, UTC), Ok(jd("1721057.5")));
        // 1 BC is leap: 366 days from -1-01-01 to 1-01-01
        assert_eq!(jd("1721423.5") - jd("1721057.5"), Decimal::from_int(366));
        assert_eq!(encode(0, 1, 1, 0, 0, 0, UTC), Err(Error::YearZero));
    }

    #[test]
    fn julian_period_origin() {
        assert_eq!(encode(-4713, 1, 1, 12, 0, 0, UTC), Ok(Decimal::ZERO));
        assert_eq!(encode(-4713, 1, 1, 21, 0, 0, JST), Ok(Decimal::ZERO));
    }

    #[test]
    fn before_the_origin_underflows() {
        let err = encode(-4713, 1, 1, 11, 59, 59, UTC).unwrap_err();
        assert!(matches!(err, Error::Underflow(v) if v.is_negative()));
        assert!(matches!(
            encode(-4713, 1, 1, 0, 0, 0, JST),
            Err(Error::Underflow(_))
        ));
    }

    #[test]
    fn far_future_overflows() {
        assert_eq!(encode(300_000_000, 1, 1, 0, 0, 0, UTC), Err(Error::Overflow));
    }

    #[test]
    fn reform_gap_is_rejected() {
        for day in 5..=14 {
            assert_eq!(
                encode(1582, 10, day, 0, 0, 0, UTC),
                Err(Error::ReformGap { day })
            );
        }
    }

    #[test]
    fn field_ranges() {
        let field = |r: Result<Decimal>| match r {
            Err(Error::InvalidField { field, .. }) => Some(field),
            _ => None,
        };
        assert_eq!(field(encode(2024, 0, 1, 0, 0, 0, UTC)), Some(Field::Month));
        assert_eq!(field(encode(2024, 13, 1, 0, 0, 0, UTC)), Some(Field::Month));
        assert_eq!(field(encode(2024, 2, 30, 0, 0, 0, UTC)), Some(Field::Day));
        assert_eq!(field(encode(2023, 2, 29, 0, 0, 0, UTC)), Some(Field::Day));
        assert_eq!(field(encode(2024, 4, 0, 0, 0, 0, UTC)), Some(Field::Day));
        assert_eq!(field(encode(2024, 4, 1, 24, 0, 0, UTC)), Some(Field::Hour));
        assert_eq!(field(encode(2024, 4, 1, 0, 60, 0, UTC)), Some(Field::Minute));
        assert_eq!(field(encode(2024, 4, 1, 0, 0, 60, UTC)), Some(Field::Second));
        assert!(encode(2024, 2, 29, 23, 59, 59, UTC).is_ok());
    }

    #[test]
    fn validation_reports_the_first_bad_field() {
        assert_eq!(encode(0, 13, 40, 25, 61, 61, UTC), Err(Error::YearZero));
        assert_eq!(
            encode(2024, 13, 40, 0, 0, 0, UTC),
            Err(Error::InvalidField {
                field: Field::Month,
                value: 13,
                min: 1,
                max: 12
            })
        );
    }

    #[test]
    fn uniform_leap_rule_applies_before_1582() {
        assert!(encode(1500, 2, 29, 0, 0, 0, UTC).is_err());
        assert!(encode(1600, 2, 29, 0, 0, 0, UTC).is_ok());
    }
}
