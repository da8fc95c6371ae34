use ajd::{Ajd, CivilDateTime, Decimal, Error, FixedOffset, Zone, JST, UT};
use proptest::prelude::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn unix_epoch_is_a_fixed_point() {
    let epoch = Ajd::new_in(1970, 1, 1, 0, 0, 0, UT).unwrap();
    assert_eq!(epoch.julian_date(), ajd::EPOCH_JULIAN_DATE);
    assert_eq!(epoch.julian_date(), dec("2440587.5"));
}

#[test]
fn cutover_discontinuity() {
    let last_julian = Ajd::from_ymd_in(1582, 10, 4, UT).unwrap();
    let first_gregorian = Ajd::from_ymd_in(1582, 10, 15, UT).unwrap();
    assert_eq!(first_gregorian.julian_date(), ajd::GREGORIAN_CUTOVER_JD);
    assert_eq!(first_gregorian.days_since(&last_julian), Decimal::ONE);

    for day in 5..=14 {
        assert_eq!(
            Ajd::from_ymd(1582, 10, day).unwrap_err(),
            Error::ReformGap { day }
        );
    }
    assert_eq!(
        last_julian.add_days(1).unwrap().civil(),
        CivilDateTime::date(1582, 10, 15)
    );
}

#[test]
fn no_year_zero() {
    assert_eq!(Ajd::from_ymd(0, 6, 15).unwrap_err(), Error::YearZero);
    // 1 BC is leap under the uniform rule
    let leap_day = Ajd::from_ymd_in(-1, 2, 29, UT).unwrap();
    assert_eq!(leap_day.year(), -1);
    assert_eq!(
        Ajd::from_ymd_in(-1, 12, 31, UT).unwrap().add_days(1).unwrap().civil(),
        CivilDateTime::date(1, 1, 1)
    );
    assert!(Ajd::from_ymd_in(-2, 2, 29, UT).unwrap_err().is_invalid_field());
}

#[test]
fn leap_rollover() {
    let feb_29 = Ajd::from_ymd(2000, 2, 28).unwrap().add_days(1).unwrap();
    assert_eq!(feb_29.civil(), CivilDateTime::date(2000, 2, 29));
    let mar_1 = Ajd::from_ymd(1900, 2, 28).unwrap().add_days(1).unwrap();
    assert_eq!(mar_1.civil(), CivilDateTime::date(1900, 3, 1));
}

#[test]
fn offset_independence_of_equality() {
    let instant = dec("2459945.75");
    let utc = Ajd::from_julian_date_in(instant, UT).unwrap();
    let tokyo = Ajd::from_julian_date(instant).unwrap();

    assert_eq!(utc.civil(), CivilDateTime::new(2023, 1, 1, 6, 0, 0));
    assert_eq!(tokyo.civil(), CivilDateTime::new(2023, 1, 1, 15, 0, 0));
    assert_eq!(utc.julian_date(), tokyo.julian_date());
    assert!(utc == tokyo);
    assert!(tokyo == utc);
}

#[test]
fn underflow_boundary() {
    let origin = Ajd::from_julian_date(Decimal::ZERO).unwrap();
    assert_eq!(origin.julian_date(), Decimal::ZERO);
    assert!(matches!(
        Ajd::from_julian_date(dec("-0.000000000000000001")),
        Err(Error::Underflow(_))
    ));
    assert!(matches!(
        Ajd::from_julian_date_in(dec("-1"), UT),
        Err(Error::Underflow(_))
    ));
}

#[test]
fn upper_bound_overflows() {
    assert!(Ajd::from_julian_date(ajd::MAX_JULIAN_DATE).is_ok());
    assert_eq!(
        Ajd::from_julian_date(ajd::MAX_JULIAN_DATE + Decimal::ONE).unwrap_err(),
        Error::Overflow
    );
}

#[test]
fn india_half_hour_offset() {
    let ist = FixedOffset::from_hours_minutes(5, 30).unwrap();
    let a = Ajd::new_in(2024, 8, 15, 0, 0, 0, ist).unwrap();
    let utc = a.rezone(UT).unwrap();
    assert_eq!(utc.civil(), CivilDateTime::new(2024, 8, 14, 18, 30, 0));
    assert_eq!(utc.rezone(ist).unwrap().civil(), a.civil());
}

#[test]
fn display_renders_fields_and_julian_date() {
    let a = Ajd::new_in(2000, 1, 1, 12, 0, 0, UT).unwrap();
    assert_eq!(a.to_string(), "2000/01/01 12:00:00[2451545]");
    let b = Ajd::from_julian_date(dec("2451545.25")).unwrap();
    assert_eq!(b.to_string(), "2000/01/02 03:00:00[2451545.25]");
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_decimal_strings() {
    let a = Ajd::new_in(1970, 1, 1, 0, 0, 1, UT).unwrap();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "\"2440587.500011574074074074\"");
    let back: Ajd<UT> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
    assert_eq!(back.second(), 1);

    let err = serde_json::from_str::<Ajd<UT>>("\"-1\"").unwrap_err();
    assert!(err.to_string().contains("precedes"));
}

fn civil_fields() -> impl Strategy<Value = CivilDateTime> {
    (
        (-4712i32..=9999).prop_filter("no year zero", |y| *y != 0),
        1u32..=12,
        1u32..=31,
        0u32..24,
        0u32..60,
        0u32..60,
    )
        .prop_map(|(y, mo, d, h, mi, s)| CivilDateTime::new(y, mo, d, h, mi, s))
        .prop_filter("valid civil date", |c| ajd::encode::validate(c).is_ok())
}

fn round_trips<Z: Zone>(civil: CivilDateTime, zone: Z) -> Result<(), TestCaseError> {
    let a = Ajd::from_civil_in(civil, zone).unwrap();
    prop_assert_eq!(a.civil(), civil);
    let jd = ajd::encode::to_julian_date(&civil, a.zone().offset_for(&civil)).unwrap();
    prop_assert_eq!(jd, a.julian_date());
    Ok(())
}

proptest! {
    #[test]
    fn civil_round_trip_in_every_zone(civil in civil_fields()) {
        round_trips(civil, UT)?;
        round_trips(civil, JST)?;
        round_trips(civil, FixedOffset::from_hours_minutes(-5, 0).unwrap())?;
    }

    #[test]
    fn rezoning_preserves_the_instant(civil in civil_fields()) {
        let a = Ajd::from_civil_in(civil, UT).unwrap();
        let b = a.rezone(JST).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(b.add_hours(-9).unwrap().civil(), civil);
    }
}
