// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bridges to `chrono` and `qtty`.
//!
//! Wall-clock instants cross at whole-second resolution: sub-second parts
//! of a `DateTime<Utc>` are dropped on the way in, and epoch milliseconds
//! are rounded and then truncated to whole seconds on the way out.

use crate::ajd::{Ajd, Day};
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::zone::{Zone, JST};
use crate::{decode, encode, EPOCH_JULIAN_DATE, SECONDS_PER_DAY};
use chrono::{DateTime, Utc};
use qtty::Days;

const MILLIS_PER_DAY: i128 = 86_400_000;

/// Source of "now".
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The operating system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl Ajd<JST> {
    /// Current instant, Japan Standard Time, truncated to the second.
    pub fn now() -> Result<Self> {
        Self::now_with(&SystemClock, JST)
    }

    /// From a `chrono` UTC instant, read as Japan Standard Time.
    pub fn from_utc(datetime: DateTime<Utc>) -> Result<Self> {
        Self::from_utc_in(datetime, JST)
    }
}

impl<Z: Zone> Ajd<Z> {
    /// Current instant read in `zone`.
    pub fn now_in(zone: Z) -> Result<Self> {
        Self::now_with(&SystemClock, zone)
    }

    /// Current instant according to `clock`, read in `zone`.
    pub fn now_with<C: Clock + ?Sized>(clock: &C, zone: Z) -> Result<Self> {
        Self::from_utc_in(clock.now(), zone)
    }

    /// From a `chrono` UTC instant, read in `zone`.
    ///
    /// The instant is first broken into local civil fields, then encoded
    /// again, so the result is the Julian Date those fields encode to.
    pub fn from_utc_in(datetime: DateTime<Utc>, zone: Z) -> Result<Self> {
        let elapsed = Decimal::from_int(datetime.timestamp())
            .checked_div(SECONDS_PER_DAY)
            .ok_or(Error::Overflow)?;
        let approx = EPOCH_JULIAN_DATE
            .checked_add(elapsed)
            .ok_or(Error::Overflow)?;
        let civil = decode::from_julian_date(approx, zone.offset_at(approx))?;
        let jd = encode::julian_date_unchecked(&civil, zone.offset_for(&civil))?;
        Self::from_julian_date_in(jd, zone)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z, at whole-second resolution.
    pub fn epoch_millis(&self) -> i64 {
        let since_epoch = self.julian_date() - EPOCH_JULIAN_DATE;
        // |since_epoch| < 1e11 days, so the product fits both i128 and i64
        let millis = Decimal::from_raw(since_epoch.raw() * MILLIS_PER_DAY)
            .round_half_away_from_zero()
            .raw()
            / Decimal::ONE.raw();
        (millis as i64) / 1000 * 1000
    }

    /// The same instant as a `chrono` UTC timestamp.
    ///
    /// `None` if the instant lies outside chrono's range.
    pub fn to_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_millis())
    }

    /// Local midnight of this value's date, as a UTC timestamp.
    pub fn to_date(&self) -> Option<DateTime<Utc>> {
        self.truncate_to_midnight().ok()?.to_timestamp()
    }

    /// This value's time of day on 1970-01-01 in the same zone, as a UTC
    /// timestamp.
    pub fn to_time(&self) -> Option<DateTime<Utc>> {
        let civil = self.civil();
        Ajd::new_in(
            1970,
            1,
            1,
            civil.hour,
            civil.minute,
            civil.second,
            self.zone().clone(),
        )
        .ok()?
        .to_timestamp()
    }

    /// Julian Date as a `qtty` day quantity.
    pub fn to_days(&self) -> Days {
        Days::new(self.julian_date().to_f64())
    }

    /// `self − other` as a `qtty` day quantity.
    pub fn days_between(&self, other: &impl Day) -> Days {
        Days::new(self.days_since(other).to_f64())
    }
}

impl<Z: Zone> From<&Ajd<Z>> for Days {
    fn from(ajd: &Ajd<Z>) -> Self {
        ajd.to_days()
    }
}
