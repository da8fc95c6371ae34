// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for date construction and arithmetic.
//!
//! Every failure is a deterministic input error detected before any value
//! is built, so no variant is worth retrying.

use crate::civil::Field;
use crate::decimal::Decimal;
use thiserror::Error;

/// Rejected date input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Year 0 does not exist in the civil calendar.
    #[error("year 0 does not exist (1 BC is written -1)")]
    YearZero,

    /// A civil field is outside its valid range.
    #[error("{field} {value} out of range [{min}, {max}]")]
    InvalidField {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },

    /// 1582-10-05 ..= 1582-10-14 were skipped by the Gregorian reform.
    #[error("1582-10-{day:02} was skipped by the Gregorian reform")]
    ReformGap { day: u32 },

    /// The Julian Date would be negative.
    #[error("Julian Date {0} precedes the epoch of the Julian Period")]
    Underflow(Decimal),

    /// A zone offset of a whole day or more.
    #[error("UTC offset of {0} day is not strictly within one day")]
    InvalidOffset(Decimal),

    /// The Julian Date exceeds [`MAX_JULIAN_DATE`](crate::MAX_JULIAN_DATE)
    /// or an intermediate left the decimal engine's range.
    #[error("date lies beyond the supported range")]
    Overflow,
}

impl Error {
    /// `true` for [`Error::YearZero`] and [`Error::InvalidField`].
    pub fn is_invalid_field(&self) -> bool {
        matches!(self, Error::YearZero | Error::InvalidField { .. })
    }
}

/// Shorthand `Result` used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)`, logging the rejection when the `log` feature is on.
macro_rules! reject {
    ($err:expr) => {{
        let err = $err;
        #[cfg(feature = "log")]
        log::debug!("rejected date input: {err}");
        return Err(err);
    }};
}
