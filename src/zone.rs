// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Offset-resolution strategies.
//!
//! A [`Zone`] tells the converters how far local wall-clock time is ahead
//! of UTC, as a fraction of a day. [`Ajd<Z>`](crate::Ajd) stores its zone
//! and uses it both to read civil fields out of a Julian Date and to build
//! Julian Dates from civil fields.
//!
//! | Zone | Offset (days) | Offset (hours) |
//! |------|---------------|----------------|
//! | [`JST`] | 0.375 | +9 |
//! | [`UT`] | 0 | 0 |
//! | [`FixedOffset`] | any | any |
//!
//! Offsets are resolved through two hooks so that a rule-based zone
//! (daylight saving, historical changes) can be plugged in: one for a
//! physical instant and one for a local reading. Fixed zones answer both
//! with the same constant.

use crate::civil::CivilDateTime;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::SECONDS_PER_DAY;
use std::fmt;

/// Offset-resolution strategy.
pub trait Zone: Clone + fmt::Debug {
    /// Offset in effect at the instant `jd` (UTC axis).
    fn offset_at(&self, jd: Decimal) -> Decimal;

    /// Offset that applies to a local wall-clock reading.
    fn offset_for(&self, civil: &CivilDateTime) -> Decimal;
}

// ---------------------------------------------------------------------------
// Fixed markers
// ---------------------------------------------------------------------------

/// Japan Standard Time, UTC+9. The default zone of [`Ajd`](crate::Ajd).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct JST;

impl JST {
    /// `+9 h` = 0.375 day.
    pub const OFFSET: Decimal = Decimal::new(375, 3);
}

impl Zone for JST {
    #[inline(always)]
    fn offset_at(&self, _jd: Decimal) -> Decimal {
        Self::OFFSET
    }

    #[inline(always)]
    fn offset_for(&self, _civil: &CivilDateTime) -> Decimal {
        Self::OFFSET
    }
}

/// Universal Time, zero offset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct UT;

impl Zone for UT {
    #[inline(always)]
    fn offset_at(&self, _jd: Decimal) -> Decimal {
        Decimal::ZERO
    }

    #[inline(always)]
    fn offset_for(&self, _civil: &CivilDateTime) -> Decimal {
        Decimal::ZERO
    }
}

// ---------------------------------------------------------------------------
// Runtime offset
// ---------------------------------------------------------------------------

/// Any constant offset from UTC, chosen at runtime.
///
/// Offsets that are not a whole number of 10⁻¹⁸ day (e.g. +5:30) are
/// truncated once, when the zone is built; every conversion through the
/// same zone then uses the identical value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FixedOffset {
    days: Decimal,
}

impl FixedOffset {
    /// Offsets are limited to strictly less than one day either way.
    pub fn from_days(days: Decimal) -> Result<Self> {
        if days.abs() >= Decimal::ONE {
            reject!(Error::InvalidOffset(days));
        }
        Ok(Self { days })
    }

    /// Offset given in seconds east of Greenwich.
    pub fn from_seconds(seconds: i32) -> Result<Self> {
        let days = Decimal::from(seconds)
            .checked_div(SECONDS_PER_DAY)
            .ok_or(Error::Overflow)?;
        Self::from_days(days)
    }

    /// `hours` and `minutes` share a sign: `(-3, -30)` is UTC−3:30.
    pub fn from_hours_minutes(hours: i32, minutes: i32) -> Result<Self> {
        let seconds = hours
            .checked_mul(3600)
            .zip(minutes.checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m));
        match seconds {
            Some(seconds) => Self::from_seconds(seconds),
            None => {
                let days = Decimal::from(hours)
                    .checked_div(Decimal::from_int(24))
                    .ok_or(Error::Overflow)?;
                reject!(Error::InvalidOffset(days))
            }
        }
    }

    /// Offset in days.
    #[inline]
    pub const fn days(&self) -> Decimal {
        self.days
    }
}

impl From<JST> for FixedOffset {
    fn from(_: JST) -> Self {
        Self { days: JST::OFFSET }
    }
}

impl From<UT> for FixedOffset {
    fn from(_: UT) -> Self {
        Self::default()
    }
}

impl Zone for FixedOffset {
    #[inline]
    fn offset_at(&self, _jd: Decimal) -> Decimal {
        self.days
    }

    #[inline]
    fn offset_for(&self, _civil: &CivilDateTime) -> Decimal {
        self.days
    }
}
