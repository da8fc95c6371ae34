// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone-parameterised Julian Date value.
//!
//! [`Ajd<Z>`] owns one exact Julian Date plus the civil fields it reads as
//! in zone `Z`. The fields are decoded when the value is built, so a value
//! that exists is always fully valid; every "mutating" operation returns a
//! new value.
//!
//! Equality, ordering and hashing look only at the Julian Date: the same
//! instant read in two zones compares equal even though the civil fields
//! differ.

use crate::civil::CivilDateTime;
use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::zone::{Zone, JST};
use crate::{decode, encode};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Day trait
// ═══════════════════════════════════════════════════════════════════════════

/// A point in time identified by its Julian Date.
///
/// Collaborators (weekday or era resolvers, formatters) only need this:
/// the Julian Date and the civil fields it reads as.
pub trait Day {
    /// Exact Julian Date (UTC axis).
    fn julian_date(&self) -> Decimal;

    /// Civil fields in the value's own zone.
    fn civil(&self) -> CivilDateTime;
}

// ═══════════════════════════════════════════════════════════════════════════
// Ajd<Z>
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Date with its civil reading in zone `Z` (default [`JST`]).
#[derive(Debug, Clone)]
pub struct Ajd<Z: Zone = JST> {
    jd: Decimal,
    zone: Z,
    civil: CivilDateTime,
    // Written at most once from `jd`; racing first reads compute the same value.
    hash: OnceLock<u64>,
}

// ── constructors in the default zone ─────────────────────────────────────

impl Ajd<JST> {
    /// From a raw Julian Date. Fails with [`Error::Underflow`] if negative.
    pub fn from_julian_date(jd: Decimal) -> Result<Self> {
        Self::from_julian_date_in(jd, JST)
    }

    /// From civil fields read as Japan Standard Time.
    ///
    /// `year` is civil: there is no year 0 and 1 BC is `-1`.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::new_in(year, month, day, hour, minute, second, JST)
    }

    /// Midnight at the start of the given date, Japan Standard Time.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_in(year, month, day, JST)
    }

    /// Same instant as any other [`Day`].
    pub fn from_day(day: &impl Day) -> Result<Self> {
        Self::from_julian_date_in(day.julian_date(), JST)
    }
}

// ── generic constructors ──────────────────────────────────────────────────

impl<Z: Zone> Ajd<Z> {
    /// From a raw Julian Date, read in `zone`.
    pub fn from_julian_date_in(jd: Decimal, zone: Z) -> Result<Self> {
        let civil = decode::from_julian_date(jd, zone.offset_at(jd))?;
        Ok(Self {
            jd,
            zone,
            civil,
            hash: OnceLock::new(),
        })
    }

    /// From validated civil fields read in `zone`.
    pub fn from_civil_in(civil: CivilDateTime, zone: Z) -> Result<Self> {
        let jd = encode::to_julian_date(&civil, zone.offset_for(&civil))?;
        Self::from_julian_date_in(jd, zone)
    }

    /// From civil fields read in `zone`.
    pub fn new_in(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        zone: Z,
    ) -> Result<Self> {
        Self::from_civil_in(
            CivilDateTime::new(year, month, day, hour, minute, second),
            zone,
        )
    }

    /// Midnight at the start of the given date in `zone`.
    pub fn from_ymd_in(year: i32, month: u32, day: u32, zone: Z) -> Result<Self> {
        Self::from_civil_in(CivilDateTime::date(year, month, day), zone)
    }

    /// Same instant as any other [`Day`], read in `zone`.
    pub fn from_day_in(day: &impl Day, zone: Z) -> Result<Self> {
        Self::from_julian_date_in(day.julian_date(), zone)
    }

    /// The same instant read in another zone.
    pub fn rezone<Y: Zone>(&self, zone: Y) -> Result<Ajd<Y>> {
        Ajd::from_julian_date_in(self.jd, zone)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Exact Julian Date.
    #[inline]
    pub fn julian_date(&self) -> Decimal {
        self.jd
    }

    #[inline]
    pub fn zone(&self) -> &Z {
        &self.zone
    }

    /// Civil fields as read in this value's zone.
    #[inline]
    pub fn civil(&self) -> CivilDateTime {
        self.civil
    }

    /// Civil year; never 0, negative for BC.
    #[inline]
    pub fn year(&self) -> i32 {
        self.civil.year
    }

    /// 1–12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.civil.month
    }

    /// 1–31.
    #[inline]
    pub fn day(&self) -> u32 {
        self.civil.day
    }

    /// 0–23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.civil.hour
    }

    /// 0–59.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.civil.minute
    }

    /// 0–59.
    #[inline]
    pub fn second(&self) -> u32 {
        self.civil.second
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Shift by `seconds` (may be negative).
    pub fn add_seconds(&self, seconds: i64) -> Result<Self> {
        self.shift(seconds, 86_400)
    }

    /// Shift by `minutes` (may be negative).
    pub fn add_minutes(&self, minutes: i64) -> Result<Self> {
        self.shift(minutes, 1_440)
    }

    /// Shift by `hours` (may be negative).
    pub fn add_hours(&self, hours: i64) -> Result<Self> {
        self.shift(hours, 24)
    }

    /// Shift by a possibly fractional number of days.
    pub fn add_days(&self, days: impl Into<Decimal>) -> Result<Self> {
        let days = days.into();
        if days.is_zero() {
            return Ok(self.clone());
        }
        let jd = self.jd.checked_add(days).ok_or(Error::Overflow)?;
        Self::from_julian_date_in(jd, self.zone.clone())
    }

    fn shift(&self, count: i64, per_day: i64) -> Result<Self> {
        if count == 0 {
            return Ok(self.clone());
        }
        let days = Decimal::from_int(count)
            .checked_div(Decimal::from_int(per_day))
            .ok_or(Error::Overflow)?;
        self.add_days(days)
    }

    /// Exact signed difference `self − other` in days.
    pub fn days_since(&self, other: &impl Day) -> Decimal {
        self.jd - other.julian_date()
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Chronological three-way comparison against any [`Day`].
    pub fn compare(&self, other: &impl Day) -> Ordering {
        self.jd.cmp(&other.julian_date())
    }

    // ── calendar helpers ──────────────────────────────────────────────

    /// 00:00:00 on the same civil date, in the same zone.
    ///
    /// Returns a clone when already at midnight. Fails only if local
    /// midnight precedes Julian Date 0.
    pub fn truncate_to_midnight(&self) -> Result<Self> {
        if self.civil.is_midnight() {
            return Ok(self.clone());
        }
        let midnight = self.civil.at_midnight();
        let jd = encode::julian_date_unchecked(&midnight, self.zone.offset_for(&midnight))?;
        Self::from_julian_date_in(jd, self.zone.clone())
    }

    fn canonical_hash(&self) -> u64 {
        *self.hash.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.jd.to_string().hash(&mut hasher);
            hasher.finish()
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<Z: Zone> Day for Ajd<Z> {
    #[inline]
    fn julian_date(&self) -> Decimal {
        self.jd
    }

    #[inline]
    fn civil(&self) -> CivilDateTime {
        self.civil
    }
}

// ── Equality / ordering ───────────────────────────────────────────────────

impl<Z: Zone, Y: Zone> PartialEq<Ajd<Y>> for Ajd<Z> {
    #[inline]
    fn eq(&self, other: &Ajd<Y>) -> bool {
        self.jd == other.jd
    }
}

impl<Z: Zone> Eq for Ajd<Z> {}

impl<Z: Zone, Y: Zone> PartialOrd<Ajd<Y>> for Ajd<Z> {
    #[inline]
    fn partial_cmp(&self, other: &Ajd<Y>) -> Option<Ordering> {
        Some(self.jd.cmp(&other.jd))
    }
}

impl<Z: Zone> Ord for Ajd<Z> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.jd.cmp(&other.jd)
    }
}

impl<Z: Zone> Hash for Ajd<Z> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.canonical_hash());
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// `yyyy/mm/dd hh:mm:ss[JD]`
impl<Z: Zone> fmt::Display for Ajd<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.civil, self.jd)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<Z: Zone> Serialize for Ajd<Z> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.jd.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, Z: Zone + Default> Deserialize<'de> for Ajd<Z> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let jd = Decimal::deserialize(deserializer)?;
        Self::from_julian_date_in(jd, Z::default()).map_err(de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
