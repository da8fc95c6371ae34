// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical Julian Date
//!
//! Exact conversion between civil calendar fields and the Julian Date, a
//! continuous count of days since noon UTC on 1 January 4713 BC (Julian
//! proleptic calendar).
//!
//! # Core types
//!
//! - [`Ajd<Z>`]: a Julian Date with its civil reading in zone `Z`.
//! - [`Zone`]: offset strategy; [`JST`] (the default), [`UT`] and
//!   [`FixedOffset`] are provided.
//! - [`Decimal`]: fixed-point number with 18 fractional digits, used for
//!   every Julian Date and offset.
//! - [`CivilDateTime`]: year, month, day, hour, minute and second.
//! - [`Day`]: anything that names an instant by Julian Date.
//!
//! # Calendar
//!
//! Dates up to 1582-10-04 are Julian, dates from 1582-10-15 on are
//! Gregorian, and the ten days in between do not exist. There is no year
//! 0: 1 BC is `-1`.
//!
//! ```
//! use ajd::{Ajd, UT};
//!
//! let epoch = Ajd::new_in(1970, 1, 1, 0, 0, 0, UT).unwrap();
//! assert_eq!(epoch.julian_date().to_string(), "2440587.5");
//!
//! let tokyo = epoch.rezone(ajd::JST).unwrap();
//! assert_eq!(tokyo.hour(), 9);
//! assert_eq!(tokyo, epoch);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Decimal`] and [`Ajd`] as decimal strings.
//! - `log`: emit a `debug` record for every rejected input.

#[macro_use]
mod error;

pub mod ajd;
pub mod calendar;
pub mod civil;
pub mod decimal;
pub mod decode;
pub mod encode;
mod interop;
pub mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use ajd::{Ajd, Day};
pub use civil::{CivilDateTime, Field};
pub use decimal::{Decimal, ParseDecimalError};
pub use error::{Error, Result};
pub use interop::{Clock, SystemClock};
pub use zone::{FixedOffset, Zone, JST, UT};

// ── Constants ─────────────────────────────────────────────────────────────

/// Julian Date of 1970-01-01T00:00:00Z.
pub const EPOCH_JULIAN_DATE: Decimal = Decimal::new(2_440_587_5, 1);

/// Julian Date of 1582-10-15T00:00:00Z, the first Gregorian day.
pub const GREGORIAN_CUTOVER_JD: Decimal = Decimal::new(2_299_160_5, 1);

/// Largest supported Julian Date.
pub const MAX_JULIAN_DATE: Decimal = Decimal::new(100_000_000_000, 0);

pub const SECONDS_PER_DAY: Decimal = Decimal::from_int(86_400);
