// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Exact base-10 fixed-point arithmetic.
//!
//! [`Decimal`] stores a signed value as an `i128` count of 10⁻¹⁸ units, so
//! every Julian Date the crate supports (up to 10¹¹ days) is held with
//! eighteen exact fractional digits and no binary rounding.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `+`, `-`, negation | exact |
//! | [`Decimal::checked_mul`] | truncated toward zero at the 18th digit |
//! | [`Decimal::checked_div`] | truncated toward zero at the 18th digit |
//! | [`Decimal::trunc`] | integer part, toward zero |
//! | [`Decimal::round_half_away_from_zero`] | nearest integer, ties away from zero |
//!
//! Because the scale is fixed, numerically equal values share one
//! representation: derived `Eq`, `Ord` and `Hash` are numeric.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const SCALE: u32 = 18;
const UNIT: i128 = 10i128.pow(SCALE);

/// Error returned when parsing a [`Decimal`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The input had no digits.
    #[error("empty decimal literal")]
    Empty,
    /// The input contained something other than a sign, digits and one point.
    #[error("invalid character {0:?} in decimal literal")]
    InvalidDigit(char),
    /// The integer part does not fit the engine's range.
    #[error("decimal literal out of range")]
    OutOfRange,
}

/// Signed fixed-point decimal with 18 fractional digits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i128);

impl Decimal {
    /// Number of fractional digits carried by every value.
    pub const SCALE: u32 = SCALE;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(UNIT);
    pub const HALF: Self = Self(UNIT / 2);

    // ── constructors ──────────────────────────────────────────────────

    /// `mantissa × 10^-scale`, e.g. `Decimal::new(3652_5, 2)` is `365.25`.
    ///
    /// # Panics
    /// If `scale` exceeds [`Decimal::SCALE`] or the value overflows.
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        assert!(scale <= SCALE, "decimal scale exceeds 18 digits");
        Self(mantissa * 10i128.pow(SCALE - scale))
    }

    /// Whole number of units.
    #[inline]
    pub const fn from_int(value: i64) -> Self {
        Self(value as i128 * UNIT)
    }

    /// Build from the raw count of 10⁻¹⁸ units.
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Raw count of 10⁻¹⁸ units.
    #[inline]
    pub const fn raw(self) -> i128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub const fn signum(self) -> i32 {
        self.0.signum() as i32
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ── rounding ──────────────────────────────────────────────────────

    /// Integer part, rounding toward zero.
    #[inline]
    pub const fn trunc(self) -> Self {
        Self(self.0 / UNIT * UNIT)
    }

    /// Fractional part; carries the sign of `self`.
    #[inline]
    pub const fn fract(self) -> Self {
        Self(self.0 % UNIT)
    }

    /// Nearest integer, with ties rounded away from zero.
    pub const fn round_half_away_from_zero(self) -> Self {
        let whole = self.0 / UNIT * UNIT;
        let rest = self.0 % UNIT;
        if rest.abs() * 2 >= UNIT {
            Self(whole + rest.signum() * UNIT)
        } else {
            Self(whole)
        }
    }

    /// Integer part as `i64`, or `None` when it does not fit.
    #[inline]
    pub fn to_i64(self) -> Option<i64> {
        i64::try_from(self.0 / UNIT).ok()
    }

    /// Nearest binary float. Lossy; only for interop with float-based code.
    pub fn to_f64(self) -> f64 {
        (self.0 / UNIT) as f64 + (self.0 % UNIT) as f64 / UNIT as f64
    }

    // ── checked arithmetic ────────────────────────────────────────────

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Product truncated toward zero at the 18th fractional digit.
    ///
    /// Both operands are split into integer and fractional parts so that no
    /// intermediate exceeds `i128`; every partial product shares the sign of
    /// the result, so truncating only the last term truncates the whole.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let (ai, af) = (self.0 / UNIT, self.0 % UNIT);
        let (bi, bf) = (rhs.0 / UNIT, rhs.0 % UNIT);
        let whole = ai.checked_mul(bi)?.checked_mul(UNIT)?;
        let cross = ai.checked_mul(bf)?.checked_add(af.checked_mul(bi)?)?;
        let tail = af * bf / UNIT;
        whole.checked_add(cross)?.checked_add(tail).map(Self)
    }

    /// Quotient truncated toward zero at the 18th fractional digit.
    ///
    /// Returns `None` on division by zero or overflow. The fraction is
    /// produced by long division, one decimal digit at a time.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let (n, d) = (self.0.unsigned_abs(), rhs.0.unsigned_abs());

        let mut quotient = (n / d).checked_mul(UNIT as u128)?;
        let mut rem = n % d;
        let mut place = UNIT as u128 / 10;
        while place > 0 && rem != 0 {
            rem = rem.checked_mul(10)?;
            quotient = quotient.checked_add(rem / d * place)?;
            rem %= d;
            place /= 10;
        }

        let magnitude = i128::try_from(quotient).ok()?;
        Some(Self(if negative { -magnitude } else { magnitude }))
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl From<i32> for Decimal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value.into())
    }
}

impl From<u32> for Decimal {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_int(value.into())
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for Decimal {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Decimal {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Decimal {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Decimal {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Decimal {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ── Text ──────────────────────────────────────────────────────────────────

/// Shortest exact form: no trailing fractional zeros, no point for integers.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / UNIT as u128;
        let frac = magnitude % UNIT as u128;
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(ParseDecimalError::Empty),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let mut raw: i128 = 0;
        for c in whole.chars() {
            let digit = c.to_digit(10).ok_or(ParseDecimalError::InvalidDigit(c))?;
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add(i128::from(digit)))
                .ok_or(ParseDecimalError::OutOfRange)?;
        }
        raw = raw.checked_mul(UNIT).ok_or(ParseDecimalError::OutOfRange)?;

        // Digits past the 18th are validated but dropped (truncation).
        let mut place = UNIT / 10;
        for c in frac.chars() {
            let digit = c.to_digit(10).ok_or(ParseDecimalError::InvalidDigit(c))?;
            raw = raw
                .checked_add(i128::from(digit) * place)
                .ok_or(ParseDecimalError::OutOfRange)?;
            place /= 10;
        }

        Ok(Self(if negative { -raw } else { raw }))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl de::Visitor<'_> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
                Ok(Decimal::from_int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
                i64::try_from(v).map(Decimal::from_int).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}
